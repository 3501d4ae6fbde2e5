use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// `users` 컬렉션에 저장되는 도큐먼트 형태 그대로의 핵심 도메인 엔티티입니다.
/// `_id`는 리포지토리가 생성 시점에 한 번 부여하는 ObjectId hex 문자열이며,
/// 호출자가 절대 지정하지 않습니다.
///
/// ## 소프트 삭제
///
/// `enabled`가 모든 조회/수정/삭제 연산의 가시성 조건입니다.
/// `enabled = false`인 도큐먼트는 이 API 관점에서 존재하지 않는 것과 같습니다.
/// 레코드 상태는 `NonExistent → Enabled → Disabled`로만 진행하며
/// `Disabled`는 종단 상태입니다 (복구 연산 없음).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// 리포지토리가 생성 시 부여하는 불변 식별자
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    /// 이메일 (enabled 레코드 사이에서 unique)
    pub email: String,
    /// 소프트 삭제 플래그. false이면 모든 읽기/쓰기 경로에서 보이지 않음
    pub enabled: bool,
    /// bcrypt 해시. 평문 비밀번호는 저장 경계를 넘지 않음
    pub password: String,
    /// 사용자명 (enabled 레코드 사이에서 unique)
    pub user_name: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    /// 소프트 삭제 시점. 삭제 전에는 존재하지 않는 필드
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime>,
}

/// 아직 저장되지 않은 사용자 후보 레코드
///
/// 파서/핸들러에서 넘어온 원시 입력으로, `id`/타임스탬프/`enabled`가 없고
/// `password`는 아직 평문입니다. 리포지토리만이 이것을 [`User`]로 승격시킵니다.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub user_name: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, to_document};

    #[test]
    fn test_user_serializes_to_wire_field_names() {
        let user = User {
            id: Some("507f1f77bcf86cd799439011".to_string()),
            name: "Cristian".to_string(),
            email: "cristian@gmail.com".to_string(),
            enabled: true,
            password: "$2b$12$hash".to_string(),
            user_name: "cristian".to_string(),
            created_at: DateTime::now(),
            updated_at: DateTime::now(),
            deleted_at: None,
        };

        let doc = to_document(&user).unwrap();

        assert_eq!(doc.get_str("_id").unwrap(), "507f1f77bcf86cd799439011");
        assert_eq!(doc.get_str("userName").unwrap(), "cristian");
        assert!(doc.contains_key("createdAt"));
        assert!(doc.contains_key("updatedAt"));
        // 삭제 전에는 deletedAt 필드 자체가 존재하지 않는다
        assert!(!doc.contains_key("deletedAt"));
    }

    #[test]
    fn test_user_deserializes_without_deleted_at() {
        let doc = doc! {
            "_id": "507f1f77bcf86cd799439011",
            "name": "Cristian",
            "email": "cristian@gmail.com",
            "enabled": true,
            "password": "$2b$12$hash",
            "userName": "cristian",
            "createdAt": DateTime::now(),
            "updatedAt": DateTime::now(),
        };

        let user: User = mongodb::bson::from_document(doc).unwrap();
        assert!(user.enabled);
        assert!(user.deleted_at.is_none());
    }
}

use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::User;

/// 비밀번호가 제거된 사용자 공개 프로젝션
///
/// 조회/수정 응답은 항상 이 타입을 거치므로 `password` 필드(평문이든
/// 해시든)가 API 응답에 포함되는 경로가 존재하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub user_name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id.unwrap_or_default(),
            name: user.name,
            email: user.email,
            user_name: user.user_name,
        }
    }
}

/// 에러 응답 본문
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// 모든 엔드포인트가 공유하는 응답 봉투
///
/// 성공 여부와 함께 연산별로 필요한 필드만 직렬화합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<ErrorBody>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<String>>,
}

impl ApiResponse {
    /// 생성 성공 응답 (`POST /users`)
    pub fn created(id: String) -> Self {
        ApiResponse {
            success: true,
            id: Some(id),
            ..Default::default()
        }
    }

    /// 조회/수정 성공 응답
    pub fn user(user: UserResponse) -> Self {
        ApiResponse {
            success: true,
            id: Some(user.id),
            name: Some(user.name),
            email: Some(user.email),
            user_name: Some(user.user_name),
            ..Default::default()
        }
    }

    /// 배치 생성 성공 응답 (`POST /users/batch`)
    pub fn batch(ids: Vec<String>) -> Self {
        ApiResponse {
            success: true,
            ids: Some(ids),
            ..Default::default()
        }
    }

    /// 실패 응답
    pub fn failure(errors: ErrorBody) -> Self {
        ApiResponse {
            success: false,
            errors: Some(errors),
            ..Default::default()
        }
    }
}

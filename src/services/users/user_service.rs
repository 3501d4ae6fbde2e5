//! 사용자 서비스
//!
//! 검증 후 리포지토리에 위임하는 얇은 오케스트레이션 계층입니다.
//! 리포지토리의 에러 분류는 그대로 통과하며, 핸들러는 이 타입만을
//! 진입점으로 사용합니다. "검증하고 위임한다" 이상의 비즈니스 로직은
//! 두지 않습니다.

use std::sync::Arc;

use validator::Validate;

use crate::domain::dto::users::request::{
    CreateUserRequest, UpdateUserRequest, flatten_validation_errors,
};
use crate::domain::dto::users::response::UserResponse;
use crate::errors::AppError;
use crate::repositories::users::UserRepository;

pub struct UserService {
    repo: Arc<UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<UserRepository>) -> Self {
        UserService { repo }
    }

    /// 사용자를 생성하고 부여된 식별자를 반환합니다
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<String, AppError> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(flatten_validation_errors(&e)))?;

        self.repo.create_user(request.into()).await
    }

    /// 사용자를 조회해 비밀번호가 제거된 프로젝션으로 반환합니다
    pub async fn get_user_by_id(&self, id: &str) -> Result<UserResponse, AppError> {
        let user = self.repo.get_user_by_id(id).await?;

        Ok(UserResponse::from(user))
    }

    /// 전달된 필드만 수정하고 수정 후 프로젝션을 반환합니다
    ///
    /// 수정할 필드가 하나도 없는 요청은 `updatedAt`만 건드리는 무의미한
    /// 쓰기가 되므로 스토어에 도달하기 전에 거부합니다.
    pub async fn update_user(
        &self,
        id: &str,
        request: UpdateUserRequest,
    ) -> Result<UserResponse, AppError> {
        if request.is_empty() {
            return Err(AppError::ValidationError(
                "수정할 필드가 없습니다".to_string(),
            ));
        }

        request
            .validate()
            .map_err(|e| AppError::ValidationError(flatten_validation_errors(&e)))?;

        let user = self.repo.update_user(id, &request).await?;

        Ok(UserResponse::from(user))
    }

    /// 사용자를 소프트 삭제합니다
    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        self.repo.delete_user(id).await
    }

    /// 파싱된 배치 레코드를 검증 후 한 번의 bulk insert로 생성합니다
    ///
    /// 파서는 형태만 보장하므로 필드 규칙 검증은 여기에서 레코드별로
    /// 수행합니다. 한 행이라도 위반이 있으면 해싱/삽입 전에 행 번호와
    /// 함께 전체 배치를 거부합니다.
    pub async fn create_user_batch(
        &self,
        records: Vec<CreateUserRequest>,
    ) -> Result<Vec<String>, AppError> {
        if records.is_empty() {
            return Err(AppError::MalformedInput(
                "CSV 파일에 레코드가 없습니다".to_string(),
            ));
        }

        for (row, record) in records.iter().enumerate() {
            record.validate().map_err(|e| {
                AppError::ValidationError(format!(
                    "row {}: {}",
                    row + 1,
                    flatten_validation_errors(&e)
                ))
            })?;
        }

        self.repo
            .create_user_batch(records.into_iter().map(Into::into).collect())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::users::user_repo::tests::{FakeUserStore, PlainHasher};

    fn service_with_store() -> (UserService, Arc<FakeUserStore>) {
        let store = Arc::new(FakeUserStore::new());
        let repo = Arc::new(UserRepository::new(store.clone(), Arc::new(PlainHasher)));
        (UserService::new(repo), store)
    }

    fn valid_request() -> CreateUserRequest {
        CreateUserRequest {
            name: "Cristian".to_string(),
            email: "cristian@gmail.com".to_string(),
            password: "Test123*".to_string(),
            user_name: "cristian".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_create_then_get_scenario() {
        let (service, _store) = service_with_store();

        let id = service.create_user(valid_request()).await.unwrap();
        assert!(!id.is_empty());

        let user = service.get_user_by_id(&id).await.unwrap();
        assert_eq!(user.name, "Cristian");
        assert_eq!(user.email, "cristian@gmail.com");
        assert_eq!(user.user_name, "cristian");

        // 응답 직렬화 결과에 비밀번호가 어떤 형태로도 존재하지 않아야 한다
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("Test123*"));
    }

    #[actix_web::test]
    async fn test_invalid_request_never_reaches_the_store() {
        let (service, store) = service_with_store();

        let mut request = valid_request();
        request.email = "not-an-email".to_string();

        let err = service.create_user(request).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
        assert_eq!(store.len(), 0);
    }

    #[actix_web::test]
    async fn test_update_validates_supplied_fields() {
        let (service, _store) = service_with_store();
        let id = service.create_user(valid_request()).await.unwrap();

        let update = UpdateUserRequest {
            password: Some("weak".to_string()),
            ..Default::default()
        };

        let err = service.update_user(&id, update).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[actix_web::test]
    async fn test_update_returns_projection_without_password() {
        let (service, _store) = service_with_store();
        let id = service.create_user(valid_request()).await.unwrap();

        let update = UpdateUserRequest {
            name: Some("X".to_string()),
            ..Default::default()
        };
        let user = service.update_user(&id, update).await.unwrap();

        assert_eq!(user.name, "X");
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password"));
    }

    #[actix_web::test]
    async fn test_empty_update_is_rejected_before_the_store() {
        let (service, _store) = service_with_store();
        let id = service.create_user(valid_request()).await.unwrap();
        let before = service.get_user_by_id(&id).await.unwrap();

        let err = service
            .update_user(&id, UpdateUserRequest::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ValidationError(_)));
        // 레코드는 변경되지 않는다
        let after = service.get_user_by_id(&id).await.unwrap();
        assert_eq!(after.name, before.name);
    }

    #[actix_web::test]
    async fn test_delete_then_get_is_not_found() {
        let (service, _store) = service_with_store();
        let id = service.create_user(valid_request()).await.unwrap();

        service.delete_user(&id).await.unwrap();

        let err = service.get_user_by_id(&id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[actix_web::test]
    async fn test_batch_rejects_invalid_row_with_row_number() {
        let (service, store) = service_with_store();

        let mut bad = valid_request();
        bad.email = "nope".to_string();

        let err = service
            .create_user_batch(vec![valid_request(), bad])
            .await
            .unwrap_err();

        match err {
            AppError::ValidationError(message) => assert!(message.contains("row 2")),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(store.len(), 0);
    }

    #[actix_web::test]
    async fn test_batch_creates_all_records() {
        let (service, store) = service_with_store();

        let mut second = valid_request();
        second.email = "jane@example.com".to_string();
        second.user_name = "janedoe".to_string();

        let ids = service
            .create_user_batch(vec![valid_request(), second])
            .await
            .unwrap();

        assert_eq!(ids.len(), 2);
        assert_eq!(store.len(), 2);
    }

    #[actix_web::test]
    async fn test_empty_batch_is_rejected() {
        let (service, _store) = service_with_store();

        let err = service.create_user_batch(Vec::new()).await.unwrap_err();
        assert!(matches!(err, AppError::MalformedInput(_)));
    }
}

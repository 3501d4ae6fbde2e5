//! 사용자 리포지토리
//!
//! 도메인 연산(생성, 조회, 수정, 소프트 삭제, 배치 생성)을 도큐먼트 스토어
//! 연산으로 변환하는 유일한 계층입니다. 소프트 삭제 필터 규약과
//! 원자적 find-one-and-update 계약을 소유합니다.
//!
//! ## 소프트 삭제 규약
//!
//! 모든 읽기/쓰기 연산은 동일한 `{_id, enabled: true}` 필터를 사용합니다.
//! 따라서 논리적으로 삭제된 레코드를 관찰하거나 변경할 수 있는 코드 경로가
//! 존재하지 않으며, 삭제된 사용자는 읽는 쪽에서 존재하지 않는 사용자와
//! 구분할 수 없습니다.
//!
//! ## 원자성
//!
//! 수정/삭제는 조회 후 별도 수정이 아니라 스토어의 단일
//! find-one-and-update 연산입니다. 동시 호출자 간의 교차 실행은
//! 스토어의 원자 연산과 유니크 인덱스가 해결하며, 이 계층은
//! 프로세스 내 잠금을 잡지 않습니다.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use mongodb::bson::{DateTime, Document, doc};
use mongodb::options::ReturnDocument;

use crate::domain::dto::users::request::UpdateUserRequest;
use crate::domain::entities::users::user::{NewUser, User};
use crate::errors::AppError;
use crate::repositories::users::user_store::UserStore;
use crate::utils::password::PasswordHasher;

const ERR_USER_NOT_FOUND: &str = "사용자를 찾을 수 없습니다";

/// 사용자 데이터 액세스 리포지토리
///
/// 스토어 능력과 해셔를 생성자 주입으로 받습니다.
pub struct UserRepository {
    store: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserRepository {
    pub fn new(store: Arc<dyn UserStore>, hasher: Arc<dyn PasswordHasher>) -> Self {
        UserRepository { store, hasher }
    }

    /// 소프트 삭제를 인지하는 단일 필터 규약
    fn enabled_filter(id: &str) -> Document {
        doc! { "_id": id, "enabled": true }
    }

    /// 후보 레코드를 저장 가능한 엔티티로 승격시킵니다
    ///
    /// 식별자 부여, 타임스탬프 스탬핑, `enabled = true` 설정,
    /// 비밀번호 해싱이 모두 여기에서 일어납니다.
    fn stamp(&self, new_user: NewUser, id: String, now: DateTime) -> Result<User, AppError> {
        let password = self.hasher.hash(&new_user.password)?;

        Ok(User {
            id: Some(id),
            name: new_user.name,
            email: new_user.email,
            enabled: true,
            password,
            user_name: new_user.user_name,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        })
    }

    /// 새 사용자를 생성하고 부여된 식별자를 반환합니다
    ///
    /// `email`/`userName`이 기존 enabled 레코드와 충돌하면 스토어의
    /// 유니크 인덱스가 쓰기 시점에 이를 감지하여 `DuplicateKey`가 됩니다.
    pub async fn create_user(&self, new_user: NewUser) -> Result<String, AppError> {
        let id = ObjectId::new().to_hex();
        let user = self.stamp(new_user, id.clone(), DateTime::now())?;

        self.store.insert_one(&user).await?;

        Ok(id)
    }

    /// 여러 사용자를 한 번의 bulk insert로 생성합니다
    ///
    /// 해싱이 한 레코드라도 실패하면 어떤 insert도 시도되기 전에 전체
    /// 배치가 `HashingError`로 실패합니다. 스토어 수준의 부분 실패
    /// (예: 하나의 유니크 충돌)는 호출 전체의 에러가 되며, 부분 삽입의
    /// 지속 여부는 스토어의 고유 보장을 따릅니다.
    pub async fn create_user_batch(&self, batch: Vec<NewUser>) -> Result<Vec<String>, AppError> {
        let now = DateTime::now();

        let mut ids = Vec::with_capacity(batch.len());
        let mut users = Vec::with_capacity(batch.len());

        for new_user in batch {
            let id = ObjectId::new().to_hex();
            users.push(self.stamp(new_user, id.clone(), now)?);
            ids.push(id);
        }

        if users.is_empty() {
            return Ok(ids);
        }

        self.store.insert_many(&users).await?;

        Ok(ids)
    }

    /// ID로 enabled 사용자를 조회합니다
    ///
    /// 소프트 삭제된 도큐먼트는 존재하지 않는 것과 동일하게 `NotFound`입니다.
    pub async fn get_user_by_id(&self, id: &str) -> Result<User, AppError> {
        self.store
            .find_one(Self::enabled_filter(id))
            .await?
            .ok_or_else(|| AppError::NotFound(ERR_USER_NOT_FOUND.to_string()))
    }

    /// 전달된 필드만 원자적으로 수정하고 수정 후 도큐먼트를 반환합니다
    ///
    /// `updatedAt`은 항상 갱신되며, `password`가 포함된 경우에만 다시
    /// 해싱됩니다. 수정이 다른 enabled 레코드의 유니크 필드와 충돌하면
    /// `DuplicateKey`가 됩니다.
    pub async fn update_user(
        &self,
        id: &str,
        fields: &UpdateUserRequest,
    ) -> Result<User, AppError> {
        let mut set = Document::new();

        if let Some(name) = &fields.name {
            set.insert("name", name.as_str());
        }
        if let Some(email) = &fields.email {
            set.insert("email", email.as_str());
        }
        if let Some(user_name) = &fields.user_name {
            set.insert("userName", user_name.as_str());
        }
        if let Some(password) = &fields.password {
            set.insert("password", self.hasher.hash(password)?);
        }
        set.insert("updatedAt", DateTime::now());

        self.store
            .find_one_and_update(
                Self::enabled_filter(id),
                doc! { "$set": set },
                ReturnDocument::After,
            )
            .await?
            .ok_or_else(|| AppError::NotFound(ERR_USER_NOT_FOUND.to_string()))
    }

    /// 사용자를 소프트 삭제합니다
    ///
    /// `{enabled: false, deletedAt: now}`로의 전환은 단일 원자 연산이며,
    /// 이미 삭제되었거나 존재하지 않는 사용자는 `NotFound`입니다.
    /// 이 전환은 이 API 관점에서 종단 상태입니다.
    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        let update = doc! {
            "$set": { "enabled": false, "deletedAt": DateTime::now() }
        };

        self.store
            .find_one_and_update(Self::enabled_filter(id), update, ReturnDocument::Before)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(ERR_USER_NOT_FOUND.to_string()))
    }
}

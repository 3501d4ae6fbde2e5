//! 사용자 컬렉션 저장소 시임
//!
//! 리포지토리가 필요로 하는 네 가지 도큐먼트 스토어 연산만을 노출하는
//! 능력(capability) 인터페이스와 MongoDB 구현체입니다.
//! 테스트에서는 이 트레이트를 구현한 인메모리 가짜 스토어로 대체합니다.

use async_trait::async_trait;
use log::info;
use mongodb::bson::{Document, doc};
use mongodb::options::{IndexOptions, ReturnDocument};
use mongodb::{Collection, IndexModel};

use crate::domain::entities::users::user::User;
use crate::errors::AppError;

/// 리포지토리가 소비하는 도큐먼트 스토어 능력
///
/// 정확히 insert-one, insert-many, find-one, find-one-and-update
/// 네 연산만 포함합니다. find-one-and-update는 단일 원자 연산이어야 하며,
/// 조회와 수정 사이에 관찰 가능한 중간 상태가 없어야 합니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert_one(&self, user: &User) -> Result<(), AppError>;

    async fn insert_many(&self, users: &[User]) -> Result<(), AppError>;

    async fn find_one(&self, filter: Document) -> Result<Option<User>, AppError>;

    async fn find_one_and_update(
        &self,
        filter: Document,
        update: Document,
        return_document: ReturnDocument,
    ) -> Result<Option<User>, AppError>;
}

/// `users` 컬렉션에 대한 MongoDB 구현체
pub struct MongoUserStore {
    collection: Collection<User>,
}

impl MongoUserStore {
    pub const COLLECTION_NAME: &'static str = "users";

    pub fn new(database: &mongodb::Database) -> Self {
        MongoUserStore {
            collection: database.collection(Self::COLLECTION_NAME),
        }
    }

    /// 유니크 인덱스 생성
    ///
    /// `email`과 `userName`에 각각 독립적인 (복합이 아닌) 유니크 인덱스를
    /// 선언합니다. 유니크 충돌은 사전 조회가 아닌 쓰기 시점에 스토어가
    /// 감지하므로 check-then-act 경쟁이 없습니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        let user_name_index = IndexModel::builder()
            .keys(doc! { "userName": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("userName_unique".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_indexes([email_index, user_name_index])
            .await
            .map_err(map_store_error)?;

        info!("users 컬렉션 유니크 인덱스 준비 완료");
        Ok(())
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn insert_one(&self, user: &User) -> Result<(), AppError> {
        self.collection
            .insert_one(user)
            .await
            .map(|_| ())
            .map_err(map_store_error)
    }

    async fn insert_many(&self, users: &[User]) -> Result<(), AppError> {
        self.collection
            .insert_many(users)
            .await
            .map(|_| ())
            .map_err(map_store_error)
    }

    async fn find_one(&self, filter: Document) -> Result<Option<User>, AppError> {
        self.collection
            .find_one(filter)
            .await
            .map_err(map_store_error)
    }

    async fn find_one_and_update(
        &self,
        filter: Document,
        update: Document,
        return_document: ReturnDocument,
    ) -> Result<Option<User>, AppError> {
        self.collection
            .find_one_and_update(filter, update)
            .return_document(return_document)
            .await
            .map_err(map_store_error)
    }
}

/// 드라이버 에러를 도메인 에러 분류로 변환합니다
///
/// 에러 메시지 문자열이 아니라 `ErrorKind` 구조를 검사합니다.
/// 유니크 인덱스 충돌(코드 11000)은 호출자 입력이 원인인 `DuplicateKey`로,
/// 타임아웃은 `DeadlineExceeded`로, 나머지 스토어 장애는 `DatabaseError`로
/// 분류됩니다.
pub(crate) fn map_store_error(err: mongodb::error::Error) -> AppError {
    use mongodb::error::ErrorKind;

    if is_duplicate_key(&err) {
        return AppError::DuplicateKey(
            "이미 사용 중인 이메일 또는 사용자명입니다".to_string(),
        );
    }

    match err.kind.as_ref() {
        ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::TimedOut => {
            AppError::DeadlineExceeded(err.to_string())
        }
        ErrorKind::ServerSelection { .. } => AppError::DeadlineExceeded(err.to_string()),
        _ => AppError::DatabaseError(err.to_string()),
    }
}

const DUPLICATE_KEY_CODE: i32 = 11000;

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        ErrorKind::InsertMany(insert_error) => insert_error
            .write_errors
            .as_ref()
            .is_some_and(|errors| errors.iter().any(|e| e.code == DUPLICATE_KEY_CODE)),
        _ => false,
    }
}

//! 환경 변수 기반 애플리케이션 설정
//!
//! ```bash
//! # MongoDB 연결 URI (필수)
//! export MONGODB_URI="mongodb://localhost:27017"
//!
//! # 사용할 데이터베이스 이름 (필수)
//! export DATABASE_NAME="user_service"
//!
//! # 서버 바인드 주소 (선택, 기본 127.0.0.1:8080)
//! export BIND_ADDRESS="0.0.0.0:8080"
//!
//! # bcrypt work factor (선택, 4..=15)
//! export BCRYPT_COST="12"
//! ```

use std::env;

use crate::errors::AppError;

pub const ERR_MONGODB_URI_NOT_SET: &str = "MONGODB_URI is not set";
pub const ERR_DATABASE_NAME_NOT_SET: &str = "DATABASE_NAME is not set";

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

/// 부트스트랩이 소비하는 애플리케이션 설정
///
/// 스토어 URI와 데이터베이스 이름이 없으면 시작 자체가 실패합니다.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mongodb_uri: String,
    pub database_name: String,
    pub bind_address: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let mongodb_uri = env::var("MONGODB_URI")
            .map_err(|_| AppError::InternalError(ERR_MONGODB_URI_NOT_SET.to_string()))?;
        let database_name = env::var("DATABASE_NAME")
            .map_err(|_| AppError::InternalError(ERR_DATABASE_NAME_NOT_SET.to_string()))?;
        let bind_address =
            env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());

        Ok(AppConfig {
            mongodb_uri,
            database_name,
            bind_address,
        })
    }
}

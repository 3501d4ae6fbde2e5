//! MongoDB 연결 관리 모듈
//!
//! 클라이언트 생성과 시작 시점 ping 확인을 담당합니다.
//! 연결 자체는 소비되는 능력일 뿐이며, 쿼리 형태는 전적으로
//! 리포지토리 계층의 소관입니다.

use log::info;
use mongodb::options::ClientOptions;
use mongodb::{Client, bson::doc};

use crate::config::AppConfig;
use crate::errors::AppError;

#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 설정의 URI로 연결하고 ping으로 도달 가능성을 확인합니다
    pub async fn connect(config: &AppConfig) -> Result<Self, AppError> {
        let mut client_options = ClientOptions::parse(&config.mongodb_uri)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        client_options.app_name = Some("user_service".to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        client
            .database(&config.database_name)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("✅ MongoDB 연결 성공: {}", config.database_name);

        Ok(Database {
            client,
            database_name: config.database_name.clone(),
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }
}

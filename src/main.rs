//! 사용자 서비스 메인 애플리케이션
//!
//! 환경 설정을 읽고 MongoDB에 연결한 뒤, 유니크 인덱스를 보장하고
//! 해셔/스토어/리포지토리/서비스를 명시적으로 조립하여 actix-web
//! HTTP 서버를 구동합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use user_service_backend::config::AppConfig;
use user_service_backend::db::Database;
use user_service_backend::errors::AppError;
use user_service_backend::repositories::users::{MongoUserStore, UserRepository};
use user_service_backend::routes::configure_routes;
use user_service_backend::services::users::UserService;
use user_service_backend::utils::password::BcryptHasher;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    info!("🚀 사용자 서비스 시작중...");

    let (user_service, bind_address) = match setup_dependencies().await {
        Ok(deps) => deps,
        Err(e) => {
            error!("의존성 초기화 실패: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .max_age(3600);

        App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors)
            .app_data(user_service.clone())
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                AppError::ValidationError(err.to_string()).into()
            }))
            .configure(configure_routes)
    })
    .bind(&bind_address)?
    .run()
    .await
}

/// 모든 의존성을 명시적으로 조립합니다
///
/// 설정 → 연결/ping → 유니크 인덱스 → 해셔/스토어/리포지토리/서비스 순서로
/// 초기화하며, 설정 누락이나 스토어 도달 불가는 시작 자체를 실패시킵니다.
async fn setup_dependencies() -> Result<(web::Data<UserService>, String), AppError> {
    let config = AppConfig::from_env()?;

    let database = Database::connect(&config).await?;

    let store = Arc::new(MongoUserStore::new(&database.get_database()));
    store.create_indexes().await?;

    let hasher = Arc::new(BcryptHasher::from_env());
    let repo = Arc::new(UserRepository::new(store, hasher));
    let service = web::Data::new(UserService::new(repo));

    Ok((service, config.bind_address))
}

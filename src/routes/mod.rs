//! API 라우트 설정 모듈
//!
//! 사용자 CRUD/배치 엔드포인트와 헬스체크 엔드포인트를 등록합니다.

use actix_web::{HttpResponse, web};

use crate::handlers;

/// 헬스체크 엔드포인트
async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// 모든 라우트를 앱 설정에 등록합니다
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .service(handlers::users::create_user)
        .service(handlers::users::create_user_batch)
        .service(handlers::users::get_user_by_id)
        .service(handlers::users::update_user)
        .service(handlers::users::delete_user);
}

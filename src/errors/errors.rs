//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 사용자 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 각 에러 종류는 안정적인 에러 코드 문자열을 가지고 있어서,
//! 핸들러 계층이 에러 메시지를 문자열 매칭하지 않고도
//! HTTP 상태 코드와 응답 본문을 결정할 수 있습니다.

use thiserror::Error;

use crate::domain::dto::users::response::{ApiResponse, ErrorBody};

/// 애플리케이션 전역 에러 타입
///
/// 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 — 소프트 삭제된 사용자 포함 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 유니크 필드 충돌 에러 — 호출자 입력이 원인이므로 클라이언트 에러 (400 Bad Request)
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// 배치 업로드 파일 확장자 에러 (400 Bad Request)
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// 배치 업로드 파일 파싱 에러 (400 Bad Request)
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// 비밀번호 해싱 에러 — 설정/환경 문제 (500 Internal Server Error)
    #[error("Hashing error: {0}")]
    HashingError(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 호출자에 의해 취소된 작업 (500 Internal Server Error)
    ///
    /// actix-web은 클라이언트 연결이 끊기면 핸들러 future를 drop하는
    /// 방식으로 취소를 표현하므로 서버 내부 코드가 이 종류를 만들
    /// 경로는 없습니다. 취소를 명시적 에러로 전달해야 하는 임베딩
    /// 호출자(예: 라이브러리로 사용하는 배치 작업)를 위한 종류입니다.
    #[error("Operation canceled: {0}")]
    Canceled(String),

    /// 저장소 타임아웃 (500 Internal Server Error)
    #[error("Deadline exceeded: {0}")]
    DeadlineExceeded(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 핸들러/클라이언트가 사용하는 안정적인 에러 코드
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "validation_error",
            AppError::NotFound(_) => "not_found",
            AppError::DuplicateKey(_) => "duplicate_key",
            AppError::UnsupportedFormat(_) => "unsupported_format",
            AppError::MalformedInput(_) => "malformed_input",
            AppError::HashingError(_) => "hashing_error",
            AppError::DatabaseError(_) => "store_unavailable",
            AppError::Canceled(_) => "canceled",
            AppError::DeadlineExceeded(_) => "deadline_exceeded",
            AppError::InternalError(_) => "internal_error",
        }
    }

    /// 재시도해도 의미가 있는 에러인지 여부 (인프라 계층 에러만 해당)
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::DatabaseError(_) | AppError::Canceled(_) | AppError::DeadlineExceeded(_)
        )
    }
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 `ApiResponse` 에러 봉투로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_)
            | AppError::DuplicateKey(_)
            | AppError::UnsupportedFormat(_)
            | AppError::MalformedInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status).json(ApiResponse::failure(ErrorBody {
            code: self.error_code().to_string(),
            message: self.to_string(),
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("name is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("user not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_duplicate_key_is_a_client_error() {
        // 유니크 충돌은 호출자 입력이 원인이므로 4xx 로 매핑된다
        let error = AppError::DuplicateKey("email already in use".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unsupported_format_error_response() {
        let error = AppError::UnsupportedFormat("only accept CSV file".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_infrastructure_errors_are_server_errors() {
        for error in [
            AppError::HashingError("cost out of range".to_string()),
            AppError::DatabaseError("connection refused".to_string()),
            AppError::DeadlineExceeded("server selection timed out".to_string()),
            AppError::Canceled("request aborted".to_string()),
        ] {
            let response = error.error_response();
            assert_eq!(
                response.status(),
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
            );
        }
    }

    #[test]
    fn test_error_codes_are_distinct() {
        let errors = [
            AppError::ValidationError(String::new()),
            AppError::NotFound(String::new()),
            AppError::DuplicateKey(String::new()),
            AppError::UnsupportedFormat(String::new()),
            AppError::MalformedInput(String::new()),
            AppError::HashingError(String::new()),
            AppError::DatabaseError(String::new()),
            AppError::Canceled(String::new()),
            AppError::DeadlineExceeded(String::new()),
            AppError::InternalError(String::new()),
        ];

        let mut codes: Vec<&str> = errors.iter().map(|e| e.error_code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_retryable_classification() {
        assert!(AppError::DatabaseError(String::new()).is_retryable());
        assert!(AppError::DeadlineExceeded(String::new()).is_retryable());
        assert!(!AppError::ValidationError(String::new()).is_retryable());
        assert!(!AppError::DuplicateKey(String::new()).is_retryable());
    }
}

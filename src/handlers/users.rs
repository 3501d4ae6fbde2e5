//! 사용자 관리 HTTP 핸들러
//!
//! 요청을 서비스 계층에 바인딩하고 결과/에러를 응답 형태로 직렬화하는
//! 얇은 어댑터입니다. 상태 코드 매핑은 `AppError`의 `ResponseError`
//! 구현이 담당하므로 여기에는 분기 로직이 없습니다.
//!
//! | 메서드 | 경로 | 성공 상태 코드 |
//! |--------|------|----------------|
//! | `POST` | `/users` | 201 Created |
//! | `GET` | `/users/{id}` | 200 OK |
//! | `PATCH` | `/users/{id}` | 200 OK |
//! | `DELETE` | `/users/{id}` | 204 No Content |
//! | `POST` | `/users/batch` | 201 Created |

use actix_multipart::Multipart;
use actix_web::{HttpResponse, delete, get, patch, post, web};
use futures_util::TryStreamExt;

use crate::domain::dto::users::request::{CreateUserRequest, UpdateUserRequest};
use crate::domain::dto::users::response::ApiResponse;
use crate::errors::AppError;
use crate::services::users::UserService;
use crate::utils::csv_reader::read_csv_file;

/// 사용자 생성
///
/// 본문: `{name, email, password, userName}` — 모두 필수.
/// 성공 시 `201`과 부여된 식별자를 반환합니다.
#[post("/users")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let id = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::created(id)))
}

/// 사용자 조회
///
/// 소프트 삭제된 사용자는 존재하지 않는 사용자와 동일하게 `404`입니다.
/// 응답에는 비밀번호 필드가 포함되지 않습니다.
#[get("/users/{id}")]
pub async fn get_user_by_id(
    service: web::Data<UserService>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user_by_id(&id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::user(user)))
}

/// 사용자 부분 수정
///
/// 전달된 필드만 변경되며 수정 후 프로젝션을 반환합니다.
#[patch("/users/{id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = service.update_user(&id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::user(user)))
}

/// 사용자 소프트 삭제
#[delete("/users/{id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_user(&id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// CSV 배치 생성
///
/// multipart 필드명 `file`로 업로드된 `.csv` 파일을 파싱하여 모든 행을
/// 한 번의 bulk insert로 생성하고 부여된 식별자 목록을 반환합니다.
#[post("/users/batch")]
pub async fn create_user_batch(
    service: web::Data<UserService>,
    mut payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| AppError::MalformedInput(format!("multipart 처리 실패: {}", e)))?
    {
        let (is_file_field, filename) = {
            let Some(disposition) = field.content_disposition() else {
                continue;
            };
            (
                disposition.get_name() == Some("file"),
                disposition.get_filename().unwrap_or_default().to_string(),
            )
        };
        if !is_file_field {
            continue;
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|e| AppError::MalformedInput(format!("파일 읽기 실패: {}", e)))?
        {
            bytes.extend_from_slice(&chunk);
        }

        upload = Some((filename, bytes));
    }

    let (filename, bytes) = upload.ok_or_else(|| {
        AppError::ValidationError("file 필드는 필수 입력값입니다".to_string())
    })?;

    let records = read_csv_file(&bytes, &filename)?;
    let ids = service.create_user_batch(records).await?;

    Ok(HttpResponse::Created().json(ApiResponse::batch(ids)))
}

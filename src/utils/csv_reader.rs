//! CSV 배치 업로드 파서
//!
//! 업로드된 구분자 텍스트 파일을 사용자 후보 레코드 시퀀스로 변환합니다.
//! 이 단계에서는 형태만 검사하며, 필드 규칙 검증과 해싱은 서비스/리포지토리의
//! 몫입니다.

use std::path::Path;

use serde::Deserialize;

use crate::domain::dto::users::request::CreateUserRequest;
use crate::errors::AppError;

/// CSV 헤더와 1:1로 대응하는 행 레코드
///
/// 헤더는 `name,email,password,username` (대소문자 구분)이어야 합니다.
/// JSON 와이어 이름(`userName`)과 CSV 헤더(`username`)가 다르므로
/// 별도 타입으로 분리되어 있습니다.
#[derive(Debug, Deserialize)]
struct CsvUserRecord {
    name: String,
    email: String,
    password: String,
    username: String,
}

impl From<CsvUserRecord> for CreateUserRequest {
    fn from(record: CsvUserRecord) -> Self {
        CreateUserRequest {
            name: record.name,
            email: record.email,
            password: record.password,
            user_name: record.username,
        }
    }
}

/// 업로드된 파일을 사용자 후보 레코드 목록으로 파싱합니다
///
/// * 확장자가 `.csv`가 아니면 (대소문자 무시) `UnsupportedFormat`
/// * 행 형태가 맞지 않으면 (컬럼 수 불일치, 인코딩 오류 등) `MalformedInput`
///
/// 반환된 레코드에는 `id`/타임스탬프가 없으며 비밀번호는 아직 평문입니다.
pub fn read_csv_file(bytes: &[u8], filename: &str) -> Result<Vec<CreateUserRequest>, AppError> {
    let extension = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase());

    if extension.as_deref() != Some("csv") {
        return Err(AppError::UnsupportedFormat(
            "CSV 파일만 업로드할 수 있습니다".to_string(),
        ));
    }

    let mut reader = csv::Reader::from_reader(bytes);

    reader
        .deserialize::<CsvUserRecord>()
        .map(|row| {
            row.map(CreateUserRequest::from)
                .map_err(|e| AppError::MalformedInput(format!("CSV 파일 처리 실패: {}", e)))
        })
        .collect()
}

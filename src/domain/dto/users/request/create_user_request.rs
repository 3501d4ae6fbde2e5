use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::entities::users::user::NewUser;

/// 비밀번호 복잡도 규칙이 요구하는 특수문자 집합
pub const PASSWORD_SPECIAL_CHARACTERS: &str = "@$!%*?&";

/// 새로운 사용자 생성을 위한 요청 DTO
///
/// JSON 역직렬화와 입력 검증을 담당합니다. 검증 규칙은 타입 위에
/// 선언적으로 고정되어 있으며, 전역 레지스트리 같은 가변 상태는 없습니다.
/// 모든 필드 위반 사항은 한 번의 `validate()` 호출로 전부 수집됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// 사용자 이름 (필수, 비어 있지 않음)
    #[validate(length(min = 1, message = "이름은 필수 입력값입니다"))]
    pub name: String,

    /// 사용자 이메일 주소 (필수, 이메일 형식)
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 계정 비밀번호 (최소 8자, 대소문자+숫자+특수문자 포함)
    #[validate(
        length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"),
        custom(
            function = "validate_password_strength",
            message = "비밀번호는 소문자, 대문자, 숫자, 특수문자를 각각 1개 이상 포함해야 합니다"
        )
    )]
    pub password: String,

    /// 사용자명 (필수, 비어 있지 않음)
    #[validate(length(min = 1, message = "사용자명은 필수 입력값입니다"))]
    pub user_name: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        NewUser {
            name: request.name,
            email: request.email,
            user_name: request.user_name,
            password: request.password,
        }
    }
}

/// 비밀번호 복잡도 검증
///
/// 소문자, 대문자, 숫자, 고정 특수문자 집합의 네 조건이 모두 동시에
/// 충족되어야 합니다. 길이 규칙은 별도의 `length` 검증이 담당합니다.
pub fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| PASSWORD_SPECIAL_CHARACTERS.contains(c));

    if has_lowercase && has_uppercase && has_digit && has_special {
        Ok(())
    } else {
        Err(ValidationError::new("password_strength"))
    }
}

/// 검증 실패 내역을 "필드: 메시지" 목록으로 펼칩니다
///
/// `ValidationErrors`는 필드별 위반을 전부 수집하므로, 호출자는 첫 번째
/// 위반만이 아니라 모든 위반을 한 번에 전달받습니다.
pub fn flatten_validation_errors(errors: &ValidationErrors) -> String {
    let mut violations: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let detail = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{}: {}", field, detail)
            })
        })
        .collect();
    violations.sort();
    violations.join("; ")
}

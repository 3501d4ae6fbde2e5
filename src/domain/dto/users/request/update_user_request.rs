use serde::{Deserialize, Serialize};
use validator::Validate;

use super::create_user_request::validate_password_strength;

/// 사용자 부분 수정을 위한 요청 DTO
///
/// 모든 필드가 선택적이며, 전달된 필드에만 생성 요청과 동일한
/// 검증 규칙이 적용됩니다. 전달되지 않은 필드는 변경되지 않습니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, message = "이름은 비어 있을 수 없습니다"))]
    pub name: Option<String>,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,

    /// 전달되면 리포지토리에서 다시 해싱되어 저장됩니다
    #[validate(
        length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"),
        custom(
            function = "validate_password_strength",
            message = "비밀번호는 소문자, 대문자, 숫자, 특수문자를 각각 1개 이상 포함해야 합니다"
        )
    )]
    pub password: Option<String>,

    #[validate(length(min = 1, message = "사용자명은 비어 있을 수 없습니다"))]
    pub user_name: Option<String>,
}

impl UpdateUserRequest {
    /// 변경할 필드가 하나도 없는 요청인지 여부
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.user_name.is_none()
    }
}

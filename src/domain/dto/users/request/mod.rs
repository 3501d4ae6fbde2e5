pub mod create_user_request;
pub mod update_user_request;

pub use create_user_request::{CreateUserRequest, flatten_validation_errors};
pub use update_user_request::UpdateUserRequest;

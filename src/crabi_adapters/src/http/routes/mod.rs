mod create_user;
mod error;
mod get_user;
mod login;

pub use create_user::{CreateUserRequest, create_user};
pub use error::{ApiError, ErrorResponse};
pub use get_user::get_user;
pub use login::{LoginRequest, login};

use crabi_core::User;
use serde::{Deserialize, Serialize};

/// Public view of a user. The password never leaves the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            first_name: user.first_name().to_owned(),
            last_name: user.last_name().to_owned(),
            email: user.email().to_owned(),
        }
    }
}

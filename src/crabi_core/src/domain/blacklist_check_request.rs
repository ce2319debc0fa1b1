use super::user::User;

/// Identity fields sent to the blacklist service. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlacklistCheckRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<&User> for BlacklistCheckRequest {
    fn from(user: &User) -> Self {
        Self {
            first_name: user.first_name().to_owned(),
            last_name: user.last_name().to_owned(),
            email: user.email().to_owned(),
        }
    }
}

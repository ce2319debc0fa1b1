use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{password::Password, user::User};

// UserRepository port trait and errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserRepositoryError {
    #[error("user already exists")]
    UserAlreadyExists,
    #[error("unexpected repository error: {0}")]
    UnexpectedError(String),
}

/// Durable storage of user records, keyed by email.
///
/// Lookups return `Ok(None)` when nothing matches; `Err` is reserved for
/// failed lookups.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn save_user(&self, user: User) -> Result<(), UserRepositoryError>;

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError>;

    /// Credential comparison is owned by the implementation.
    async fn get_user_by_email_and_password(
        &self,
        email: &str,
        password: &Password,
    ) -> Result<Option<User>, UserRepositoryError>;
}

#[async_trait]
impl<T: UserRepository + ?Sized> UserRepository for Arc<T> {
    async fn save_user(&self, user: User) -> Result<(), UserRepositoryError> {
        (**self).save_user(user).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        (**self).get_user_by_email(email).await
    }

    async fn get_user_by_email_and_password(
        &self,
        email: &str,
        password: &Password,
    ) -> Result<Option<User>, UserRepositoryError> {
        (**self)
            .get_user_by_email_and_password(email, password)
            .await
    }
}

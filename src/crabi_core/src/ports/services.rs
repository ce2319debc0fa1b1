use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::blacklist_check_request::BlacklistCheckRequest;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlacklistError {
    #[error("user was found in pld blacklist")]
    Blacklisted,
    #[error("pld server returned {0} status code")]
    UnexpectedStatus(u16),
    #[error("{0}")]
    Transport(String),
    #[error("invalid pld response: {0}")]
    InvalidResponse(String),
}

/// Port trait for the external blacklist ("PLD") service.
///
/// `Ok(())` means the person is clear. Being listed, a failed call and an
/// unreadable answer are all errors.
#[async_trait]
pub trait BlacklistGateway: Send + Sync {
    async fn check_blacklist(&self, request: &BlacklistCheckRequest) -> Result<(), BlacklistError>;
}

#[async_trait]
impl<T: BlacklistGateway + ?Sized> BlacklistGateway for Arc<T> {
    async fn check_blacklist(&self, request: &BlacklistCheckRequest) -> Result<(), BlacklistError> {
        (**self).check_blacklist(request).await
    }
}

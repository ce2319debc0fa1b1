use std::collections::HashSet;

use crabi_core::{BlacklistCheckRequest, BlacklistError, BlacklistGateway};

/// In-process gateway that only rejects the emails it was given.
#[derive(Debug, Clone, Default)]
pub struct MockBlacklistGateway {
    listed_emails: HashSet<String>,
}

impl MockBlacklistGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listed<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            listed_emails: emails.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait::async_trait]
impl BlacklistGateway for MockBlacklistGateway {
    async fn check_blacklist(&self, request: &BlacklistCheckRequest) -> Result<(), BlacklistError> {
        if self.listed_emails.contains(&request.email) {
            return Err(BlacklistError::Blacklisted);
        }
        Ok(())
    }
}

use crabi_core::{BlacklistCheckRequest, BlacklistError, BlacklistGateway};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

/// Blacklist gateway talking JSON over HTTP to the PLD service.
pub struct HttpBlacklistGateway {
    http_client: Client,
    url: String,
}

impl HttpBlacklistGateway {
    pub fn new(url: String, http_client: Client) -> Self {
        Self { http_client, url }
    }
}

#[async_trait::async_trait]
impl BlacklistGateway for HttpBlacklistGateway {
    #[tracing::instrument(name = "Checking PLD blacklist over HTTP", skip_all)]
    async fn check_blacklist(&self, request: &BlacklistCheckRequest) -> Result<(), BlacklistError> {
        let request_body = CheckBlacklistRequest {
            first_name: &request.first_name,
            last_name: &request.last_name,
            email: &request.email,
        };

        let response = self
            .http_client
            .post(&self.url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| BlacklistError::Transport(e.to_string()))?;

        // The PLD service answers a completed check with 201 Created.
        if response.status() != StatusCode::CREATED {
            tracing::warn!(status = %response.status(), "unexpected PLD status");
            return Err(BlacklistError::UnexpectedStatus(response.status().as_u16()));
        }

        let response_body = response
            .json::<CheckBlacklistResponse>()
            .await
            .map_err(|e| BlacklistError::InvalidResponse(e.to_string()))?;

        if response_body.is_in_blacklist {
            return Err(BlacklistError::Blacklisted);
        }

        Ok(())
    }
}

#[derive(Serialize, Debug)]
struct CheckBlacklistRequest<'a> {
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
}

#[derive(Deserialize, Debug)]
struct CheckBlacklistResponse {
    is_in_blacklist: bool,
}

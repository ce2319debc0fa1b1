use std::time::Duration;

use crabi_core::{BlacklistCheckRequest, BlacklistError, BlacklistGateway};
use tonic::transport::{Channel, Endpoint};

use super::pld_proto::{CheckInBlackListReq, pld_service_client::PldServiceClient};

const CONNECT_FAILED: &str = "failed to connect to pld service";
const CHECK_FAILED: &str = "failed to check in pld service";

fn transport_error(status: &tonic::Status) -> BlacklistError {
    let message = match status.code() {
        tonic::Code::Unavailable => CONNECT_FAILED,
        _ => CHECK_FAILED,
    };
    tracing::error!(code = ?status.code(), detail = status.message(), "{}", message);
    BlacklistError::Transport(message.to_string())
}

/// Blacklist gateway calling the PLD service over gRPC.
///
/// The channel is created once and reconnects on demand, so clones share the
/// same underlying connection.
#[derive(Clone)]
pub struct GrpcBlacklistGateway {
    client: PldServiceClient<Channel>,
}

impl GrpcBlacklistGateway {
    pub fn new(channel: Channel) -> Self {
        Self {
            client: PldServiceClient::new(channel),
        }
    }

    /// Build a gateway whose connection is established on first use.
    pub fn connect_lazy(endpoint: &str, timeout: Duration) -> Result<Self, tonic::transport::Error> {
        let channel = Endpoint::from_shared(endpoint.to_owned())?
            .connect_timeout(timeout)
            .timeout(timeout)
            .connect_lazy();

        Ok(Self::new(channel))
    }
}

#[async_trait::async_trait]
impl BlacklistGateway for GrpcBlacklistGateway {
    #[tracing::instrument(name = "Checking PLD blacklist over gRPC", skip_all)]
    async fn check_blacklist(&self, request: &BlacklistCheckRequest) -> Result<(), BlacklistError> {
        let request_body = CheckInBlackListReq {
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            email: request.email.clone(),
            birthday: String::new(),
        };

        let mut client = self.client.clone();
        let response = client
            .check_in_blacklist(request_body)
            .await
            .map_err(|status| transport_error(&status))?;

        if response.into_inner().is_in_blacklist {
            return Err(BlacklistError::Blacklisted);
        }

        Ok(())
    }
}

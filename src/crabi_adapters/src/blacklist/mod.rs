pub mod grpc_blacklist_gateway;
pub mod http_blacklist_gateway;
pub mod mock_blacklist_gateway;
pub mod pld_proto;

pub use grpc_blacklist_gateway::GrpcBlacklistGateway;
pub use http_blacklist_gateway::HttpBlacklistGateway;
pub use mock_blacklist_gateway::MockBlacklistGateway;

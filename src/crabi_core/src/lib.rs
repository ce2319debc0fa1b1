pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    blacklist_check_request::BlacklistCheckRequest,
    password::Password,
    user::{User, UserError, UserField},
};

pub use ports::{
    repositories::{UserRepository, UserRepositoryError},
    services::{BlacklistError, BlacklistGateway},
};

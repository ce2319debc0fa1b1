pub mod user_service;

// Re-export for convenience
pub use user_service::{UserService, UserServiceBuilder, UserServiceError};

//! # Crabi - User Account Service Library
//!
//! This is a facade crate that re-exports all public APIs from the user service components.
//! Use this crate to get access to registration, login and lookup in one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `User`, `Password`, `BlacklistCheckRequest`
//! - **Ports**: `BlacklistGateway`, `UserRepository`
//! - **Application**: `UserService`
//! - **Adapters**: `HttpBlacklistGateway`, `GrpcBlacklistGateway`, `PostgresUserRepository`, etc.
//! - **Service**: `UserApi` - The HTTP entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use crabi_core::*;
}

pub use crabi_core::{BlacklistCheckRequest, Password, User, UserError, UserField};

// ============================================================================
// Ports
// ============================================================================

pub use crabi_core::{BlacklistError, BlacklistGateway, UserRepository, UserRepositoryError};

// ============================================================================
// Application Layer
// ============================================================================

pub use crabi_application::{UserService, UserServiceBuilder, UserServiceError};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use crabi_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use crabi_adapters::persistence::*;
    }

    /// Blacklist gateway implementations
    pub mod blacklist {
        pub use crabi_adapters::blacklist::*;
    }

    /// JWT utilities
    pub mod auth {
        pub use crabi_adapters::auth::*;
    }

    /// Configuration
    pub mod config {
        pub use crabi_adapters::config::*;
    }
}

pub use crabi_adapters::{
    auth::JwtConfig,
    blacklist::{GrpcBlacklistGateway, HttpBlacklistGateway, MockBlacklistGateway},
    config::Settings,
    persistence::{HashMapUserRepository, PostgresUserRepository},
};

// ============================================================================
// User Service (Main Entry Point)
// ============================================================================

pub use crabi_user_service::{UserApi, get_postgres_pool};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use crabi_application::UserServiceError;
use crabi_core::BlacklistError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::TokenError;

const UNEXPECTED_ERROR: &str = "unexpected error";

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    UnexpectedError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status_code, body).into_response()
    }
}

impl From<UserServiceError> for ApiError {
    fn from(error: UserServiceError) -> Self {
        let message = error.to_string();
        match error {
            UserServiceError::Validation(_) => ApiError::InvalidInput(message),
            UserServiceError::Blacklist(BlacklistError::Blacklisted) => ApiError::Forbidden(message),
            UserServiceError::Blacklist(_) => ApiError::BadGateway(message),
            UserServiceError::DuplicateAccount(_) => ApiError::Conflict(message),
            UserServiceError::InvalidCredentials => ApiError::Unauthorized(message),
            UserServiceError::NotFound => ApiError::NotFound(message),
            UserServiceError::Configuration(_) | UserServiceError::Repository(_) => {
                tracing::error!(error = %message, "user service failure");
                ApiError::UnexpectedError(UNEXPECTED_ERROR.to_string())
            }
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::MissingToken | TokenError::InvalidToken(_) => {
                ApiError::Unauthorized(error.to_string())
            }
            TokenError::UnexpectedError(e) => {
                tracing::error!(error = %e, "token failure");
                ApiError::UnexpectedError(UNEXPECTED_ERROR.to_string())
            }
        }
    }
}

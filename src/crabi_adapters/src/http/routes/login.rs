use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use crabi_application::UserService;
use crabi_core::{BlacklistGateway, Password, UserRepository};
use serde::Deserialize;

use super::{UserResponse, error::ApiError};
use crate::auth::{JwtConfig, generate_auth_token};
use crate::config::TOKEN_HEADER;

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: Password,
}

/// Authenticate and hand back a JWT in the `Token` header.
#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<B, R>(
    State((user_service, jwt_config)): State<(Arc<UserService<B, R>>, JwtConfig)>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    B: BlacklistGateway + 'static,
    R: UserRepository + 'static,
{
    let user = user_service
        .login(&request.email, &request.password)
        .await?;

    let token = generate_auth_token(user.email(), &jwt_config)?;

    Ok((
        StatusCode::OK,
        [(TOKEN_HEADER, token)],
        Json(UserResponse::from(&user)),
    ))
}

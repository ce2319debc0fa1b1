use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use crabi_application::UserService;
use crabi_core::{BlacklistGateway, Password, User, UserRepository};
use serde::Deserialize;

use super::{UserResponse, error::ApiError};

/// Missing fields deserialize as empty and are reported by validation.
#[derive(Deserialize, Default)]
#[serde(default)]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: Password,
}

#[tracing::instrument(name = "Create user", skip_all)]
pub async fn create_user<B, R>(
    State(user_service): State<Arc<UserService<B, R>>>,
    Json(request): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    B: BlacklistGateway + 'static,
    R: UserRepository + 'static,
{
    let user = User::new(
        request.first_name,
        request.last_name,
        request.email,
        request.password,
    );

    let created = user_service.create_user(user).await?;

    tracing::info!(email = %created.email(), "user created");

    Ok((StatusCode::CREATED, Json(UserResponse::from(&created))))
}

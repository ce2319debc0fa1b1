use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use crabi_application::UserService;
use crabi_core::{BlacklistGateway, UserRepository};

use super::{UserResponse, error::ApiError};

#[tracing::instrument(name = "Get user", skip_all)]
pub async fn get_user<B, R>(
    State(user_service): State<Arc<UserService<B, R>>>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    B: BlacklistGateway + 'static,
    R: UserRepository + 'static,
{
    let user = user_service.get_user(&email).await?;

    Ok(Json(UserResponse::from(&user)))
}

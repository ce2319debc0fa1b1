use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use super::jwt::{JwtConfig, extract_token, validate_auth_token};
use crate::http::routes::ApiError;

/// Rejects requests without a valid `Token` header.
#[tracing::instrument(name = "Verify token", skip_all)]
pub async fn require_token(
    State(config): State<JwtConfig>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token(request.headers())?;
    let claims = validate_auth_token(token, &config)?;

    tracing::debug!(subject = %claims.sub, "token accepted");

    Ok(next.run(request).await)
}

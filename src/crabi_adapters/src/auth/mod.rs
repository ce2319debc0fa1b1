pub mod jwt;
pub mod require_token;

pub use jwt::{Claims, JwtConfig, TokenError, extract_token, generate_auth_token, validate_auth_token};
pub use require_token::require_token;

mod helpers;
mod tracing;
mod user_api;

pub use helpers::get_postgres_pool;
pub use user_api::UserApi;

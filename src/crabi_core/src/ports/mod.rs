pub mod repositories;
pub mod services;

pub mod hashmap_user_repository;
pub mod postgres_user_repository;

pub use hashmap_user_repository::HashMapUserRepository;
pub use postgres_user_repository::PostgresUserRepository;

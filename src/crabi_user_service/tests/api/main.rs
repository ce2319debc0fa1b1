mod create_user;
mod get_user;
mod helpers;
mod login;
mod postgres_repository;

pub mod auth;
pub mod blacklist;
pub mod config;
pub mod http;
pub mod persistence;

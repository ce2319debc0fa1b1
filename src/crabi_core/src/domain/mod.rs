pub mod blacklist_check_request;
pub mod password;
pub mod user;

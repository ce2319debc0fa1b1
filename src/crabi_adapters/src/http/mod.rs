pub mod routes;

pub mod paths {
    pub const USERS: &str = "/api/v1/users/";
    pub const USER_BY_EMAIL: &str = "/api/v1/users/{email}";
    pub const LOGIN: &str = "/api/v1/login/";
}

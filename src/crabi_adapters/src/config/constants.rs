pub mod env {
    /// Environment overrides look like `CRABI__PLD__HOST`.
    pub const ENV_PREFIX: &str = "CRABI";
    pub const ENV_SEPARATOR: &str = "__";
}

pub mod files {
    pub const BASE_CONFIG_FILE: &str = "config/base";
    pub const LOCAL_CONFIG_FILE: &str = "config/local";
}

pub mod defaults {
    pub const APPLICATION_HOST: &str = "0.0.0.0";
    pub const APPLICATION_PORT: i64 = 8080;
    pub const PLD_TIMEOUT_IN_MILLIS: i64 = 10_000;
    pub const JWT_TIME_TO_LIVE_IN_SECONDS: i64 = 3600;
}

/// Header carrying the JWT, both on login responses and protected requests.
/// Header names are case-insensitive; clients usually send `Token`.
pub const TOKEN_HEADER: &str = "token";

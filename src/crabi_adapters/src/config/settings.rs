use std::time::Duration;

use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use thiserror::Error;

use super::constants::{defaults, env, files};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("{0} configuration value needed")]
    Missing(&'static str),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub postgres: PostgresSettings,
    pub pld: PldSettings,
    pub jwt: JwtSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PldSettings {
    pub protocol: String,
    pub host: String,
    pub port: String,
    pub uri: String,
    pub timeout_in_millis: u64,
}

impl PldSettings {
    pub fn uses_grpc(&self) -> bool {
        self.protocol
            .trim_end_matches("://")
            .eq_ignore_ascii_case("grpc")
    }

    /// Full URL of the HTTP check endpoint, e.g. `http://pld:3000/check-blacklist`.
    pub fn http_url(&self) -> String {
        format!("{}{}:{}{}", self.protocol, self.host, self.port, self.uri)
    }

    pub fn grpc_endpoint(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_in_millis)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    pub secret: Secret<String>,
    pub time_to_live_in_seconds: i64,
}

impl Settings {
    /// Load settings from the optional config files and the environment.
    ///
    /// Read once at startup; everything downstream receives the values
    /// through its constructor.
    pub fn load() -> Result<Self, SettingsError> {
        let config = Self::with_defaults()?
            .add_source(File::with_name(files::BASE_CONFIG_FILE).required(false))
            .add_source(File::with_name(files::LOCAL_CONFIG_FILE).required(false))
            .add_source(Self::environment())
            .build()?;

        Self::from_config(config)
    }

    /// `CRABI__<SECTION>__<KEY>` variables, kept as strings.
    ///
    /// Numeric fields are converted when the settings are deserialized.
    pub fn environment() -> Environment {
        Environment::with_prefix(env::ENV_PREFIX).separator(env::ENV_SEPARATOR)
    }

    pub fn with_defaults() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
        Config::builder()
            .set_default("application.host", defaults::APPLICATION_HOST)?
            .set_default("application.port", defaults::APPLICATION_PORT)?
            .set_default("postgres.url", "")?
            .set_default("pld.protocol", "")?
            .set_default("pld.host", "")?
            .set_default("pld.port", "")?
            .set_default("pld.uri", "")?
            .set_default("pld.timeout_in_millis", defaults::PLD_TIMEOUT_IN_MILLIS)?
            .set_default("jwt.secret", "")?
            .set_default(
                "jwt.time_to_live_in_seconds",
                defaults::JWT_TIME_TO_LIVE_IN_SECONDS,
            )
    }

    pub fn from_config(config: Config) -> Result<Self, SettingsError> {
        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let required = [
            ("postgres.url", self.postgres.url.expose_secret().as_str()),
            ("pld.protocol", self.pld.protocol.as_str()),
            ("pld.host", self.pld.host.as_str()),
            ("pld.port", self.pld.port.as_str()),
            ("pld.uri", self.pld.uri.as_str()),
            ("jwt.secret", self.jwt.secret.expose_secret().as_str()),
        ];

        match required.into_iter().find(|(_, value)| value.is_empty()) {
            Some((key, _)) => Err(SettingsError::Missing(key)),
            None => Ok(()),
        }
    }
}

pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::{
    ApplicationSettings, JwtSettings, PldSettings, PostgresSettings, Settings, SettingsError,
};

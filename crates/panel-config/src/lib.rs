//! # panel-config
//!
//! Layered configuration loading for Panel using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PANEL_*` prefix, `__` as separator)
//! 2. Project-level `.panel/config.toml`
//! 3. User-level `~/.config/panel/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PANEL_DATABASE__PATH` -> `database.path`,
//! `PANEL_STATUS__ALLOWED` -> `status.allowed` (use `[scheduled,completed]`
//! array syntax), and so on.
//!
//! # Usage
//!
//! ```no_run
//! use panel_config::PanelConfig;
//!
//! let config = PanelConfig::load_with_dotenv().expect("config");
//! println!("database: {}", config.database.path);
//! ```

mod auth;
mod database;
mod error;
mod general;
mod status;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use status::StatusConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local configuration directory.
pub const PROJECT_DIR: &str = ".panel";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PanelConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub status: StatusConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl PanelConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(PROJECT_DIR).join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("PANEL_").split("__"))
    }

    /// Reject values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty database path or a
    /// blank entry in the status allow-list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "must not be empty".into(),
            });
        }
        if let Some(idx) = self.status.allowed.iter().position(|s| s.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: format!("status.allowed[{idx}]"),
                reason: "must not be blank".into(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("panel").join("config.toml"))
    }
}

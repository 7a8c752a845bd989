//! # counsel-config
//!
//! Layered configuration loading for Counsel using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`COUNSEL_*` prefix, `__` as separator)
//! 2. Project-level `.counsel/config.toml`
//! 3. User-level `~/.config/counsel/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `COUNSEL_GENERAL__DEFAULT_LIMIT` -> `general.default_limit`,
//! `COUNSEL_STORE__SEED_SAMPLE_DATA` -> `store.seed_sample_data`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use counsel_config::CounselConfig;
//!
//! let config = CounselConfig::load().expect("config");
//! if config.store.seed_sample_data {
//!     println!("starting with sample data");
//! }
//! ```

mod dashboard;
mod error;
mod general;
mod store;

pub use dashboard::DashboardConfig;
pub use error::ConfigError;
pub use general::{GeneralConfig, OUTPUT_FORMATS};
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for config overrides.
pub const ENV_PREFIX: &str = "COUNSEL_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CounselConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl CounselConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Reads the process environment as it is; `.env` files are the caller's job.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` on extraction failure or invalid values.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".counsel/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values the CLI cannot act on.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !OUTPUT_FORMATS.contains(&self.general.default_format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.default_format".into(),
                reason: format!(
                    "'{}' is not one of {}",
                    self.general.default_format,
                    OUTPUT_FORMATS.join(", ")
                ),
            });
        }
        if self.general.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("counsel").join("config.toml"))
    }
}

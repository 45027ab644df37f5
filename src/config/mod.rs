//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values use the `SIMWORK` prefix with `__`
//! as the nesting separator, e.g. `SIMWORK__DEMO__LOGIN_DELAY_MS=0`.

mod demo;
mod error;
mod storage;

pub use demo::DemoConfig;
pub use error::{ConfigError, ConfigValidationError};
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// On-device storage configuration (backend, base dir, keys).
    #[serde(default)]
    pub storage: StorageConfig,

    /// Demo behavior (simulated latencies, log filter).
    #[serde(default)]
    pub demo: DemoConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Loads a `.env` file if present, then reads `SIMWORK`-prefixed
    /// variables. Every value has a default, so an empty environment
    /// yields a working configuration.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SIMWORK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.storage.validate()?;
        self.demo.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configuration_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }
}

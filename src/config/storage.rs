//! On-device storage configuration.

use serde::Deserialize;

use super::error::ConfigValidationError;

/// Which device storage adapter to use.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Ephemeral in-memory storage; state is lost on exit.
    #[default]
    Memory,
    /// One JSON file per key under `base_dir`.
    File,
}

/// Storage configuration: backend choice and the two storage keys.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Storage backend.
    #[serde(default)]
    pub backend: StorageBackend,

    /// Base directory for the file backend.
    #[serde(default = "default_base_dir")]
    pub base_dir: String,

    /// Key holding the serialized user profile.
    #[serde(default = "default_profile_key")]
    pub profile_key: String,

    /// Key holding the serialized sign-up payload (write-only).
    #[serde(default = "default_signup_key")]
    pub signup_key: String,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.profile_key.trim().is_empty() {
            return Err(ConfigValidationError::new(
                "storage.profile_key",
                "must not be empty",
            ));
        }
        if self.signup_key.trim().is_empty() {
            return Err(ConfigValidationError::new(
                "storage.signup_key",
                "must not be empty",
            ));
        }
        if self.profile_key == self.signup_key {
            return Err(ConfigValidationError::new(
                "storage.signup_key",
                "must differ from storage.profile_key",
            ));
        }
        if self.backend == StorageBackend::File && self.base_dir.trim().is_empty() {
            return Err(ConfigValidationError::new(
                "storage.base_dir",
                "must not be empty for the file backend",
            ));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            base_dir: default_base_dir(),
            profile_key: default_profile_key(),
            signup_key: default_signup_key(),
        }
    }
}

fn default_base_dir() -> String {
    "./data".to_string()
}

fn default_profile_key() -> String {
    "simwork-user".to_string()
}

fn default_signup_key() -> String {
    "simwork-signup".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_the_original_storage_keys() {
        let config = StorageConfig::default();
        assert_eq!(config.profile_key, "simwork-user");
        assert_eq!(config.signup_key, "simwork-signup");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn colliding_keys_are_rejected() {
        let config = StorageConfig {
            signup_key: "simwork-user".to_string(),
            ..StorageConfig::default()
        };
        assert!(config.validate().is_err());
    }
}

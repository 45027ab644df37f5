//! Demo behavior configuration.

use serde::Deserialize;
use std::time::Duration;

use super::error::ConfigValidationError;

/// Simulated latencies and logging for the demo flows.
///
/// The original demo fakes network round-trips with fixed timers: one
/// second for login/registration/sign-up, two seconds for evaluation.
#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
    /// Delay applied to mock login and registration.
    #[serde(default = "default_auth_delay_ms")]
    pub auth_delay_ms: u64,

    /// Delay applied to the simulated task evaluation.
    #[serde(default = "default_evaluation_delay_ms")]
    pub evaluation_delay_ms: u64,

    /// Delay applied to the sign-up form submission.
    #[serde(default = "default_auth_delay_ms")]
    pub signup_delay_ms: u64,

    /// Tracing filter directive.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl DemoConfig {
    pub fn auth_delay(&self) -> Duration {
        Duration::from_millis(self.auth_delay_ms)
    }

    pub fn evaluation_delay(&self) -> Duration {
        Duration::from_millis(self.evaluation_delay_ms)
    }

    pub fn signup_delay(&self) -> Duration {
        Duration::from_millis(self.signup_delay_ms)
    }

    /// Zero-latency configuration for tests.
    pub fn instant() -> Self {
        Self {
            auth_delay_ms: 0,
            evaluation_delay_ms: 0,
            signup_delay_ms: 0,
            log_filter: default_log_filter(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.log_filter.trim().is_empty() {
            return Err(ConfigValidationError::new(
                "demo.log_filter",
                "must not be empty",
            ));
        }
        Ok(())
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            auth_delay_ms: default_auth_delay_ms(),
            evaluation_delay_ms: default_evaluation_delay_ms(),
            signup_delay_ms: default_auth_delay_ms(),
            log_filter: default_log_filter(),
        }
    }
}

fn default_auth_delay_ms() -> u64 {
    1000
}

fn default_evaluation_delay_ms() -> u64 {
    2000
}

fn default_log_filter() -> String {
    "simwork=info".to_string()
}

//! Sign-up capture.
//!
//! Serializes a completed sign-up form to the write-only sign-up storage
//! key. The payload is never read back by anything.

use std::sync::Arc;
use tracing::info;

use crate::config::DemoConfig;
use crate::domain::foundation::DomainError;
use crate::domain::signup::SignupForm;
use crate::ports::DeviceStorage;

/// Handler for the marketing sign-up form submission.
pub struct SignupHandler {
    storage: Arc<dyn DeviceStorage>,
    signup_key: String,
    config: DemoConfig,
}

impl SignupHandler {
    pub fn new(
        storage: Arc<dyn DeviceStorage>,
        signup_key: impl Into<String>,
        config: DemoConfig,
    ) -> Self {
        Self {
            storage,
            signup_key: signup_key.into(),
            config,
        }
    }

    /// Captures the form. The form must have reached its final step.
    pub async fn submit(&self, form: &SignupForm) -> Result<(), DomainError> {
        let payload = form.payload()?;

        tokio::time::sleep(self.config.signup_delay()).await;

        let json = serde_json::to_string(&payload).map_err(DomainError::storage)?;
        self.storage
            .set(&self.signup_key, json)
            .await
            .map_err(DomainError::storage)?;
        info!(email = %payload.email, "sign-up captured");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryDeviceStorage;
    use crate::domain::foundation::{ErrorCode, UserRole};
    use crate::domain::signup::SignupPayload;
    use crate::ports::DeviceStorage as _;

    fn completed_form() -> SignupForm {
        let mut form = SignupForm::new();
        form.set_name("Morgan Chen");
        form.set_email("morgan@example.com");
        form.set_password("hunter2");
        form.advance().unwrap();
        form.set_role(UserRole::AiEngineer);
        form.advance().unwrap();
        form.toggle_interest("training");
        form
    }

    #[tokio::test]
    async fn submit_writes_the_payload_under_the_signup_key() {
        let storage = Arc::new(InMemoryDeviceStorage::new());
        let handler = SignupHandler::new(
            storage.clone(),
            "simwork-signup",
            crate::config::DemoConfig::instant(),
        );

        handler.submit(&completed_form()).await.unwrap();

        let raw = storage.get("simwork-signup").await.unwrap().unwrap();
        let payload: SignupPayload = serde_json::from_str(&raw).unwrap();
        assert_eq!(payload.email, "morgan@example.com");
        assert_eq!(payload.role, UserRole::AiEngineer);
        assert_eq!(payload.interests, vec!["training".to_string()]);
    }

    #[tokio::test]
    async fn incomplete_form_is_rejected_without_writing() {
        let storage = Arc::new(InMemoryDeviceStorage::new());
        let handler = SignupHandler::new(
            storage.clone(),
            "simwork-signup",
            crate::config::DemoConfig::instant(),
        );

        let err = handler.submit(&SignupForm::new()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::IncompleteForm);
        assert!(storage.get("simwork-signup").await.unwrap().is_none());
    }
}

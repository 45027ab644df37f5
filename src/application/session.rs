//! Session/profile service.
//!
//! Wraps the device storage port with the mock authentication flows. None of
//! these operations can meaningfully fail: any credentials are accepted and
//! an absent stored profile simply means "not logged in". The only real
//! errors are storage faults.

use std::sync::Arc;
use tracing::{debug, info};

use crate::config::DemoConfig;
use crate::domain::foundation::{DomainError, UserRole};
use crate::domain::user::UserProfile;
use crate::ports::DeviceStorage;

/// Manages the persisted user profile and the mock auth flows.
pub struct SessionService {
    storage: Arc<dyn DeviceStorage>,
    profile_key: String,
    config: DemoConfig,
}

impl SessionService {
    pub fn new(
        storage: Arc<dyn DeviceStorage>,
        profile_key: impl Into<String>,
        config: DemoConfig,
    ) -> Self {
        Self {
            storage,
            profile_key: profile_key.into(),
            config,
        }
    }

    /// Startup read of the stored profile. `None` means not logged in.
    pub async fn load(&self) -> Result<Option<UserProfile>, DomainError> {
        let raw = self
            .storage
            .get(&self.profile_key)
            .await
            .map_err(DomainError::storage)?;

        match raw {
            None => Ok(None),
            Some(json) => {
                let profile: UserProfile =
                    serde_json::from_str(&json).map_err(DomainError::storage)?;
                Ok(Some(profile))
            }
        }
    }

    /// Fabricates and persists the zeroed demo profile for a role.
    pub async fn start_demo(&self, role: UserRole) -> Result<UserProfile, DomainError> {
        let profile = UserProfile::demo(role);
        self.persist(&profile).await?;
        info!(role = %role, "started demo session");
        Ok(profile)
    }

    /// Mock login. Any email/password combination succeeds.
    pub async fn login(
        &self,
        email: &str,
        _password: &str,
    ) -> Result<UserProfile, DomainError> {
        // Simulated network round-trip.
        tokio::time::sleep(self.config.auth_delay()).await;

        let profile = UserProfile::from_login(email);
        self.persist(&profile).await?;
        info!(user = %profile.id(), "mock login succeeded");
        Ok(profile)
    }

    /// Mock registration. Always succeeds.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        _password: &str,
        role: UserRole,
    ) -> Result<UserProfile, DomainError> {
        tokio::time::sleep(self.config.auth_delay()).await;

        let profile = UserProfile::from_registration(name, email, role);
        self.persist(&profile).await?;
        info!(user = %profile.id(), role = %role, "mock registration succeeded");
        Ok(profile)
    }

    /// Persists profile changes (e.g. progress updates).
    pub async fn save(&self, profile: &UserProfile) -> Result<(), DomainError> {
        self.persist(profile).await
    }

    /// Removes the stored profile. A later `load` returns `None`.
    pub async fn logout(&self) -> Result<(), DomainError> {
        self.storage
            .remove(&self.profile_key)
            .await
            .map_err(DomainError::storage)?;
        info!("logged out, stored profile cleared");
        Ok(())
    }

    async fn persist(&self, profile: &UserProfile) -> Result<(), DomainError> {
        let json = serde_json::to_string(profile).map_err(DomainError::storage)?;
        self.storage
            .set(&self.profile_key, json)
            .await
            .map_err(DomainError::storage)?;
        debug!(key = %self.profile_key, "profile persisted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryDeviceStorage;
    use crate::domain::foundation::UserId;

    fn service(storage: Arc<InMemoryDeviceStorage>) -> SessionService {
        SessionService::new(storage, "simwork-user", DemoConfig::instant())
    }

    #[tokio::test]
    async fn load_without_a_stored_profile_is_none() {
        let storage = Arc::new(InMemoryDeviceStorage::new());
        let service = service(storage);
        assert!(service.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn start_demo_persists_a_zeroed_profile() {
        let storage = Arc::new(InMemoryDeviceStorage::new());
        let service = service(storage);

        let profile = service.start_demo(UserRole::Developer).await.unwrap();
        assert_eq!(profile.id(), &UserId::demo());

        let loaded = service.load().await.unwrap().unwrap();
        assert_eq!(loaded, profile);
        assert_eq!(loaded.progress().xp(), 0);
    }

    #[tokio::test]
    async fn any_credentials_log_in() {
        let storage = Arc::new(InMemoryDeviceStorage::new());
        let service = service(storage);

        let profile = service.login("alex@example.com", "wrong").await.unwrap();
        assert_eq!(profile.name(), "alex");
        assert_eq!(profile.role(), UserRole::Developer);
        assert!(service.load().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn registration_keeps_the_chosen_role() {
        let storage = Arc::new(InMemoryDeviceStorage::new());
        let service = service(storage);

        let profile = service
            .register("Taylor", "taylor@example.com", "pw", UserRole::DataEntry)
            .await
            .unwrap();
        assert_eq!(profile.role(), UserRole::DataEntry);
    }

    #[tokio::test]
    async fn logout_clears_the_stored_profile() {
        let storage = Arc::new(InMemoryDeviceStorage::new());
        let service = service(storage);

        service.start_demo(UserRole::Pm).await.unwrap();
        service.logout().await.unwrap();
        assert!(service.load().await.unwrap().is_none());

        // Logging out twice is harmless.
        service.logout().await.unwrap();
    }

    #[tokio::test]
    async fn save_overwrites_the_stored_profile() {
        let storage = Arc::new(InMemoryDeviceStorage::new());
        let service = service(storage);

        let mut profile = service.start_demo(UserRole::Developer).await.unwrap();
        profile
            .progress_mut()
            .record_completion(crate::domain::foundation::TaskId::new("task-1"), 150);
        service.save(&profile).await.unwrap();

        let loaded = service.load().await.unwrap().unwrap();
        assert_eq!(loaded.progress().xp(), 150);
    }
}

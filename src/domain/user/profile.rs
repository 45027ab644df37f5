//! User/session profile.
//!
//! Profiles are fabricated locally: on demo-start for a chosen role, or by
//! the mock login/registration flows which accept any credentials. They are
//! persisted to on-device storage and cleared on logout.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId, UserRole};

use super::Progress;

const DEMO_AVATAR: &str = "/images/avatars/avatar-demo.png";
const DEFAULT_AVATAR: &str = "/images/avatars/avatar-1.png";

/// A locally fabricated user profile with its progress record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    id: UserId,
    name: String,
    email: String,
    role: UserRole,
    avatar: String,
    progress: Progress,
    created_at: Timestamp,
}

impl UserProfile {
    /// Fabricates the zeroed demo profile for a chosen role.
    pub fn demo(role: UserRole) -> Self {
        Self {
            id: UserId::demo(),
            name: "Demo User".to_string(),
            email: "demo@simwork.dev".to_string(),
            role,
            avatar: DEMO_AVATAR.to_string(),
            progress: Progress::new(),
            created_at: Timestamp::now(),
        }
    }

    /// Fabricates a profile for a mock login.
    ///
    /// The display name is taken from the email's local part; the role
    /// defaults to developer, matching the original demo.
    pub fn from_login(email: impl Into<String>) -> Self {
        let email = email.into();
        let name = email
            .split('@')
            .next()
            .filter(|part| !part.is_empty())
            .unwrap_or("visitor")
            .to_string();

        Self {
            id: UserId::generate(),
            name,
            email,
            role: UserRole::Developer,
            avatar: DEFAULT_AVATAR.to_string(),
            progress: Progress::new(),
            created_at: Timestamp::now(),
        }
    }

    /// Fabricates a profile for a mock registration.
    pub fn from_registration(
        name: impl Into<String>,
        email: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            id: UserId::generate(),
            name: name.into(),
            email: email.into(),
            role,
            avatar: DEFAULT_AVATAR.to_string(),
            progress: Progress::new(),
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitutes a profile from stored or fixture parts (no fabrication).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        role: UserRole,
        avatar: impl Into<String>,
        progress: Progress,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role,
            avatar: avatar.into(),
            progress,
            created_at,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn progress_mut(&mut self) -> &mut Progress {
        &mut self.progress
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

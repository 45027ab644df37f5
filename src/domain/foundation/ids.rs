//! Strongly-typed identifier value objects.
//!
//! Task and workstation identifiers come from the fixture catalogs and use
//! human-readable slugs (`task-1`, `dev-bay`). User identifiers are generated
//! at login/registration time, except for the fixed demo profile id.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of a fixture task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Creates a TaskId from a fixture slug.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Identifier of a fixture workstation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkstationId(String);

impl WorkstationId {
    /// Creates a WorkstationId from a fixture slug.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkstationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for WorkstationId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Identifier of a user profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Fixed identifier used by the fabricated demo profile.
    pub const DEMO: &'static str = "demo-user";

    /// Creates a UserId from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh UserId for a mock login or registration.
    pub fn generate() -> Self {
        Self(format!("user-{}", Uuid::new_v4().simple()))
    }

    /// Returns the UserId of the demo profile.
    pub fn demo() -> Self {
        Self(Self::DEMO.to_string())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_id_preserves_fixture_slug() {
        let id = TaskId::new("task-1");
        assert_eq!(id.as_str(), "task-1");
        assert_eq!(format!("{}", id), "task-1");
    }

    #[test]
    fn generated_user_ids_are_unique_and_prefixed() {
        let a = UserId::generate();
        let b = UserId::generate();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("user-"));
    }

    #[test]
    fn demo_user_id_is_fixed() {
        assert_eq!(UserId::demo().as_str(), "demo-user");
        assert_eq!(UserId::demo(), UserId::demo());
    }
}

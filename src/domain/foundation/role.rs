//! User role value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// The five professional roles a visitor can pick in the demo.
///
/// Each role owns one workstation and a fixed set of tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserRole {
    Developer,
    Designer,
    Pm,
    DataEntry,
    AiEngineer,
}

impl UserRole {
    /// All roles, in fixture order.
    pub const ALL: [UserRole; 5] = [
        UserRole::Developer,
        UserRole::Designer,
        UserRole::Pm,
        UserRole::DataEntry,
        UserRole::AiEngineer,
    ];

    /// Returns the wire/storage representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Developer => "developer",
            UserRole::Designer => "designer",
            UserRole::Pm => "pm",
            UserRole::DataEntry => "data-entry",
            UserRole::AiEngineer => "ai-engineer",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "developer" => Ok(UserRole::Developer),
            "designer" => Ok(UserRole::Designer),
            "pm" => Ok(UserRole::Pm),
            "data-entry" => Ok(UserRole::DataEntry),
            "ai-engineer" => Ok(UserRole::AiEngineer),
            other => Err(ValidationError::invalid_format(
                "role",
                format!("unknown role '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_display_and_from_str() {
        for role in UserRole::ALL {
            let parsed: UserRole = role.as_str().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!("astronaut".parse::<UserRole>().is_err());
    }

    #[test]
    fn role_serializes_as_kebab_case() {
        let json = serde_json::to_string(&UserRole::AiEngineer).unwrap();
        assert_eq!(json, "\"ai-engineer\"");
    }
}

//! Score value object (0-100 scale).
//!
//! Used both for task completion scores and for skill proficiency levels.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// An integer score between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    /// Zero points.
    pub const ZERO: Self = Self(0);

    /// The maximum attainable score.
    pub const MAX: Self = Self(100);

    /// Creates a new Score, clamping to the valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Score, returning an error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range("score", 0, 100, value as i32));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value widened for accumulation.
    pub fn as_u32(&self) -> u32 {
        u32::from(self.0)
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_new_accepts_valid_values() {
        assert_eq!(Score::new(0).value(), 0);
        assert_eq!(Score::new(60).value(), 60);
        assert_eq!(Score::new(100).value(), 100);
    }

    #[test]
    fn score_new_clamps_to_100() {
        assert_eq!(Score::new(101).value(), 100);
        assert_eq!(Score::new(255).value(), 100);
    }

    #[test]
    fn score_try_new_rejects_out_of_range() {
        assert!(Score::try_new(100).is_ok());
        assert!(Score::try_new(101).is_err());
    }

    #[test]
    fn score_orders_by_value() {
        assert!(Score::new(60) < Score::new(100));
    }
}

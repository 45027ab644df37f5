//! State machine trait for step enums.
//!
//! The demo has two linear step sequences: the task wizard
//! (details -> submission) and the marketing sign-up form
//! (account -> company -> interests). Both implement this trait to get
//! validated transitions.

use super::ValidationError;

/// Trait for step enums that represent state machines.
///
/// Implementors define valid transitions and get a validated
/// `transition_to` method for free.
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from the current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs a transition with validation, returning an error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if the current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

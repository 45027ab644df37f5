//! Task wizard state machine.
//!
//! A linear two-step flow: the details step shows the task content and
//! captures the visitor's answer, the submission step reviews it and allows
//! the terminal submit. Forward movement and submission are gated on a
//! non-empty answer; backward movement is unconditional. Cancelling is
//! simply dropping the wizard.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{DomainError, ErrorCode, StateMachine};

use super::Task;

/// The wizard's two steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WizardStep {
    Details,
    Submission,
}

impl WizardStep {
    /// Zero-based step index, as shown in the progress indicator.
    pub fn index(&self) -> usize {
        match self {
            WizardStep::Details => 0,
            WizardStep::Submission => 1,
        }
    }

    /// Number of steps in the wizard.
    pub const COUNT: usize = 2;
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WizardStep::Details => "details",
            WizardStep::Submission => "submission",
        };
        write!(f, "{}", s)
    }
}

impl StateMachine for WizardStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        matches!((self, target), (WizardStep::Details, WizardStep::Submission))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            WizardStep::Details => vec![WizardStep::Submission],
            WizardStep::Submission => vec![],
        }
    }
}

/// A task being worked through the two-step wizard.
#[derive(Debug, Clone)]
pub struct TaskWizard {
    task: Task,
    step: WizardStep,
    answer: String,
    in_flight: bool,
}

impl TaskWizard {
    /// Opens the wizard on the details step with an empty answer.
    pub fn open(task: Task) -> Self {
        Self {
            task,
            step: WizardStep::Details,
            answer: String::new(),
            in_flight: false,
        }
    }

    pub fn task(&self) -> &Task {
        &self.task
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// The captured answer or option selection.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// True while a simulated evaluation delay is in flight.
    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    fn has_answer(&self) -> bool {
        !self.answer.trim().is_empty()
    }

    fn reject_if_in_flight(&self) -> Result<(), DomainError> {
        if self.in_flight {
            return Err(DomainError::new(
                ErrorCode::SubmissionInFlight,
                "Submission already in flight",
            ));
        }
        Ok(())
    }

    /// Captures the visitor's answer or option selection.
    pub fn set_answer(&mut self, answer: impl Into<String>) -> Result<(), DomainError> {
        self.reject_if_in_flight()?;
        self.answer = answer.into();
        Ok(())
    }

    /// True when the forward button would be enabled.
    pub fn can_advance(&self) -> bool {
        self.step == WizardStep::Details && self.has_answer() && !self.in_flight
    }

    /// True when the submit button would be enabled.
    pub fn can_submit(&self) -> bool {
        self.step == WizardStep::Submission && self.has_answer() && !self.in_flight
    }

    /// Moves to the next step. Forward movement requires a non-empty answer.
    pub fn advance(&mut self) -> Result<WizardStep, DomainError> {
        self.reject_if_in_flight()?;
        if !self.has_answer() {
            return Err(DomainError::new(
                ErrorCode::EmptyAnswer,
                "An answer is required before continuing",
            ));
        }

        self.step = self
            .step
            .transition_to(WizardStep::Submission)
            .map_err(|e| DomainError::new(ErrorCode::InvalidStateTransition, e.to_string()))?;
        Ok(self.step)
    }

    /// Moves back to the details step, unconditionally.
    pub fn back(&mut self) -> Result<WizardStep, DomainError> {
        self.reject_if_in_flight()?;
        if self.step == WizardStep::Details {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Already on the first step",
            ));
        }
        self.step = WizardStep::Details;
        Ok(self.step)
    }

    /// Begins the terminal submit, yielding the captured answer.
    ///
    /// Only valid on the submission step with a non-empty answer and no
    /// submission already in flight. The wizard stays pinned until
    /// [`TaskWizard::finish_submission`] or the wizard is dropped.
    pub fn begin_submission(&mut self) -> Result<String, DomainError> {
        self.reject_if_in_flight()?;
        if self.step != WizardStep::Submission {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Submit is only available on the submission step",
            ));
        }
        if !self.has_answer() {
            return Err(DomainError::new(
                ErrorCode::EmptyAnswer,
                "Cannot submit an empty answer",
            ));
        }

        self.in_flight = true;
        Ok(self.answer.clone())
    }

    /// Clears the in-flight flag after the evaluation delay resolves.
    pub fn finish_submission(&mut self) {
        self.in_flight = false;
    }
}

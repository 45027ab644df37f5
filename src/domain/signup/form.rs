//! Sign-up form state machine and its write-only payload.
//!
//! The marketing landing page walks a visitor through three steps (account,
//! company, interests) and captures the result to on-device storage. The
//! payload is never read back.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{DomainError, ErrorCode, StateMachine, Timestamp, UserRole};

/// The sign-up form's three steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignupStep {
    Account,
    Company,
    Interests,
}

impl SignupStep {
    /// Zero-based step index, as shown in the progress indicator.
    pub fn index(&self) -> usize {
        match self {
            SignupStep::Account => 0,
            SignupStep::Company => 1,
            SignupStep::Interests => 2,
        }
    }

    /// Number of steps in the form.
    pub const COUNT: usize = 3;
}

impl fmt::Display for SignupStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SignupStep::Account => "account",
            SignupStep::Company => "company",
            SignupStep::Interests => "interests",
        };
        write!(f, "{}", s)
    }
}

impl StateMachine for SignupStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        matches!(
            (self, target),
            (SignupStep::Account, SignupStep::Company)
                | (SignupStep::Company, SignupStep::Interests)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            SignupStep::Account => vec![SignupStep::Company],
            SignupStep::Company => vec![SignupStep::Interests],
            SignupStep::Interests => vec![],
        }
    }
}

/// The captured sign-up form, serialized as-is to the sign-up storage key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub company: String,
    pub size: String,
    pub interests: Vec<String>,
    pub captured_at: Timestamp,
}

/// The multi-step sign-up form being filled in.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    step: Option<SignupStep>,
    name: String,
    email: String,
    password: String,
    role: Option<UserRole>,
    company: String,
    size: String,
    interests: Vec<String>,
}

impl SignupForm {
    /// Starts a fresh form on the account step.
    pub fn new() -> Self {
        Self {
            step: Some(SignupStep::Account),
            ..Self::default()
        }
    }

    pub fn step(&self) -> SignupStep {
        self.step.unwrap_or(SignupStep::Account)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn set_role(&mut self, role: UserRole) {
        self.role = Some(role);
    }

    pub fn set_company(&mut self, company: impl Into<String>) {
        self.company = company.into();
    }

    pub fn set_size(&mut self, size: impl Into<String>) {
        self.size = size.into();
    }

    /// Adds or removes an interest checkbox value.
    pub fn toggle_interest(&mut self, interest: impl Into<String>) {
        let interest = interest.into();
        if let Some(pos) = self.interests.iter().position(|i| *i == interest) {
            self.interests.remove(pos);
        } else {
            self.interests.push(interest);
        }
    }

    pub fn interests(&self) -> &[String] {
        &self.interests
    }

    fn step_complete(&self, step: SignupStep) -> bool {
        match step {
            SignupStep::Account => {
                !self.name.trim().is_empty()
                    && !self.email.trim().is_empty()
                    && !self.password.is_empty()
            }
            // Company name and size are optional; only the role select is
            // required. Interests may be left unchecked entirely.
            SignupStep::Company => self.role.is_some(),
            SignupStep::Interests => true,
        }
    }

    /// Moves to the next step if the current step's required fields are set.
    pub fn advance(&mut self) -> Result<SignupStep, DomainError> {
        let current = self.step();
        if !self.step_complete(current) {
            return Err(DomainError::new(
                ErrorCode::IncompleteForm,
                format!("Required fields missing on the {} step", current),
            ));
        }

        let next = current
            .valid_transitions()
            .into_iter()
            .next()
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::InvalidStateTransition,
                    "Already on the final step",
                )
            })?;
        self.step = Some(current.transition_to(next).map_err(DomainError::from)?);
        Ok(self.step())
    }

    /// Moves back one step, unconditionally.
    pub fn back(&mut self) -> Result<SignupStep, DomainError> {
        let previous = match self.step() {
            SignupStep::Account => {
                return Err(DomainError::new(
                    ErrorCode::InvalidStateTransition,
                    "Already on the first step",
                ))
            }
            SignupStep::Company => SignupStep::Account,
            SignupStep::Interests => SignupStep::Company,
        };
        self.step = Some(previous);
        Ok(self.step())
    }

    /// Produces the storable payload. Only valid from the final step with
    /// every earlier step complete.
    pub fn payload(&self) -> Result<SignupPayload, DomainError> {
        if self.step() != SignupStep::Interests {
            return Err(DomainError::new(
                ErrorCode::IncompleteForm,
                "The form has not reached the final step",
            ));
        }
        let role = self.role.ok_or_else(|| {
            DomainError::new(ErrorCode::IncompleteForm, "No role was selected")
        })?;

        Ok(SignupPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            role,
            company: self.company.clone(),
            size: self.size.clone(),
            interests: self.interests.clone(),
            captured_at: Timestamp::now(),
        })
    }
}

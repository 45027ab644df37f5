//! Multi-step marketing sign-up form.

mod form;

pub use form::{SignupForm, SignupPayload, SignupStep};

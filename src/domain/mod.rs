//! Domain layer: value objects, fixtures, and pure state machines.

pub mod foundation;
pub mod office;
pub mod signup;
pub mod task;
pub mod user;

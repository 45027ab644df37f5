//! Foundation value objects shared across the domain.

mod errors;
mod ids;
mod role;
mod score;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{TaskId, UserId, WorkstationId};
pub use role::UserRole;
pub use score::Score;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;

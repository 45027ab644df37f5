//! Task fixtures and the task wizard.

mod content;
mod difficulty;
mod evaluation;
mod scoring;
mod task;
mod wizard;

pub use content::{CustomerForm, Dimensions, TaskContent};
pub use difficulty::Difficulty;
pub use evaluation::{EvaluationCriteria, Metric};
pub use scoring::{evaluate_submission, TaskCompletion, MAX_SCORE, MIN_SCORE};
pub use task::Task;
pub use wizard::{TaskWizard, WizardStep};

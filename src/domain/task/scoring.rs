//! Randomized submission scoring.
//!
//! The demo does not evaluate submissions: every submission "earns" a
//! uniformly distributed score with no relation to the input. The RNG is
//! injected so tests can seed it deterministically.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Score, TaskId};

/// Lowest score a submission can receive.
pub const MIN_SCORE: u8 = 60;

/// Highest score a submission can receive.
pub const MAX_SCORE: u8 = 100;

/// Draws a score for a submission, uniform in `[MIN_SCORE, MAX_SCORE]`.
pub fn evaluate_submission<R: Rng + ?Sized>(rng: &mut R) -> Score {
    Score::new(rng.gen_range(MIN_SCORE..=MAX_SCORE))
}

/// The outcome of a submitted task: the task id and its drawn score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCompletion {
    task_id: TaskId,
    score: Score,
}

impl TaskCompletion {
    /// Creates a completion record.
    pub fn new(task_id: TaskId, score: Score) -> Self {
        Self { task_id, score }
    }

    pub fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    pub fn score(&self) -> Score {
        self.score
    }
}

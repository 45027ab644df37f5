//! Task fixture entity.
//!
//! Tasks are immutable fixtures: loaded from the static catalog, never
//! created or destroyed at runtime.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::foundation::{TaskId, UserRole};

use super::{Difficulty, EvaluationCriteria, TaskContent};

/// A single fixed challenge with a type-specific content payload and a
/// scoring rubric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    role: UserRole,
    difficulty: Difficulty,
    xp_reward: u32,
    /// Soft limit in seconds; purely informational in the demo.
    time_limit_secs: Option<u64>,
    content: TaskContent,
    evaluation: EvaluationCriteria,
}

impl Task {
    /// Creates a fixture task.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        role: UserRole,
        difficulty: Difficulty,
        xp_reward: u32,
        time_limit_secs: Option<u64>,
        content: TaskContent,
        evaluation: EvaluationCriteria,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            role,
            difficulty,
            xp_reward,
            time_limit_secs,
            content,
            evaluation,
        }
    }

    pub fn id(&self) -> &TaskId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The role that owns this task.
    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Experience points awarded on completion.
    pub fn xp_reward(&self) -> u32 {
        self.xp_reward
    }

    /// Optional soft time limit.
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_secs.map(Duration::from_secs)
    }

    pub fn content(&self) -> &TaskContent {
        &self.content
    }

    pub fn evaluation(&self) -> &EvaluationCriteria {
        &self.evaluation
    }
}

//! Page-local demo state: role selection and completion tally.
//!
//! The original demo accumulates completed tasks and the running score in
//! page state and never writes them back to the profile's progress record.
//! That behavior is kept as-is: `DemoSession` is deliberately independent of
//! `UserProfile`.

use crate::domain::foundation::{TaskId, UserRole};
use crate::domain::task::TaskCompletion;

/// Visual state of the demo page: selected role, completed task ids, and
/// the cumulative score.
#[derive(Debug, Clone, Default)]
pub struct DemoSession {
    selected_role: Option<UserRole>,
    completed: Vec<TaskId>,
    total_score: u32,
}

impl DemoSession {
    /// Fresh session with nothing selected or completed.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_role(&self) -> Option<UserRole> {
        self.selected_role
    }

    /// Picks (or switches) the browsed role. Completions are kept; they are
    /// page state, not per-role state.
    pub fn select_role(&mut self, role: UserRole) {
        self.selected_role = Some(role);
    }

    /// Records a completion: appends the task id (once) and adds the score
    /// to the running total. A duplicate completion of the same task leaves
    /// the session unchanged.
    pub fn record(&mut self, completion: &TaskCompletion) {
        if self.is_completed(completion.task_id()) {
            return;
        }
        self.completed.push(completion.task_id().clone());
        self.total_score += completion.score().as_u32();
    }

    pub fn is_completed(&self, task_id: &TaskId) -> bool {
        self.completed.iter().any(|id| id == task_id)
    }

    /// Completed task ids, in completion order.
    pub fn completed_tasks(&self) -> &[TaskId] {
        &self.completed
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Sum of all recorded completion scores.
    pub fn total_score(&self) -> u32 {
        self.total_score
    }
}

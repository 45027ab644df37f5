//! Progress record: level, experience, completed tasks, skills.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{Score, TaskId};

/// Experience points required to clear the given level.
///
/// Grows geometrically: 100 XP for level 1, then x1.5 per level.
pub fn xp_for_next_level(level: u32) -> u32 {
    (100.0 * 1.5_f64.powi(level as i32)).floor() as u32
}

/// A user's accumulated level, experience, completed-task list, and skill
/// proficiency map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    level: u32,
    xp: u32,
    completed_tasks: Vec<TaskId>,
    skills: HashMap<String, Score>,
}

impl Progress {
    /// Fresh zeroed progress for a new profile.
    pub fn new() -> Self {
        Self {
            level: 1,
            xp: 0,
            completed_tasks: Vec::new(),
            skills: HashMap::new(),
        }
    }

    /// Reconstructs progress from stored parts.
    pub fn from_parts(
        level: u32,
        xp: u32,
        completed_tasks: Vec<TaskId>,
        skills: HashMap<String, Score>,
    ) -> Self {
        Self {
            level,
            xp,
            completed_tasks,
            skills,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn xp(&self) -> u32 {
        self.xp
    }

    pub fn completed_tasks(&self) -> &[TaskId] {
        &self.completed_tasks
    }

    pub fn skills(&self) -> &HashMap<String, Score> {
        &self.skills
    }

    pub fn has_completed(&self, task_id: &TaskId) -> bool {
        self.completed_tasks.iter().any(|id| id == task_id)
    }

    /// Percentage of the way to the next level, capped at 100.
    pub fn level_progress(&self) -> Score {
        let needed = xp_for_next_level(self.level);
        if needed == 0 {
            return Score::MAX;
        }
        let pct = (self.xp as f64 / needed as f64 * 100.0).floor() as u32;
        Score::new(pct.min(100) as u8)
    }

    /// Records a completed task, awarding its XP. Duplicate ids are ignored.
    pub fn record_completion(&mut self, task_id: TaskId, xp_reward: u32) {
        if self.has_completed(&task_id) {
            return;
        }
        self.completed_tasks.push(task_id);
        self.xp = self.xp.saturating_add(xp_reward);
    }

    /// Sets a skill's proficiency level.
    pub fn set_skill(&mut self, skill: impl Into<String>, proficiency: Score) {
        self.skills.insert(skill.into(), proficiency);
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_progress_starts_zeroed_at_level_one() {
        let progress = Progress::new();
        assert_eq!(progress.level(), 1);
        assert_eq!(progress.xp(), 0);
        assert!(progress.completed_tasks().is_empty());
        assert!(progress.skills().is_empty());
    }

    #[test]
    fn xp_curve_grows_geometrically() {
        assert_eq!(xp_for_next_level(0), 100);
        assert_eq!(xp_for_next_level(1), 150);
        assert_eq!(xp_for_next_level(2), 225);
    }

    #[test]
    fn recording_a_completion_awards_xp_once() {
        let mut progress = Progress::new();
        progress.record_completion(TaskId::new("task-1"), 150);
        progress.record_completion(TaskId::new("task-1"), 150);

        assert_eq!(progress.completed_tasks().len(), 1);
        assert_eq!(progress.xp(), 150);
        assert!(progress.has_completed(&TaskId::new("task-1")));
    }

    #[test]
    fn level_progress_is_capped_at_100() {
        let mut progress = Progress::new();
        progress.record_completion(TaskId::new("task-1"), 10_000);
        assert_eq!(progress.level_progress(), Score::MAX);
    }

    #[test]
    fn level_progress_reports_partial_completion() {
        let mut progress = Progress::new();
        // Level 1 requires 150 XP; 75 XP is halfway there.
        progress.record_completion(TaskId::new("task-1"), 75);
        assert_eq!(progress.level_progress().value(), 50);
    }
}

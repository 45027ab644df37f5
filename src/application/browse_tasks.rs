//! Role/task browser.
//!
//! A pure filter over the fixture catalog: tasks for the selected role, in
//! fixture order, minus any that the demo session has already completed.

use std::sync::Arc;
use tracing::warn;

use crate::domain::foundation::{DomainError, ErrorCode, TaskId, UserRole, WorkstationId};
use crate::domain::task::Task;
use crate::ports::TaskCatalog;

/// Query handler for browsing tasks by role or workstation.
pub struct BrowseTasksHandler {
    catalog: Arc<dyn TaskCatalog>,
}

impl BrowseTasksHandler {
    pub fn new(catalog: Arc<dyn TaskCatalog>) -> Self {
        Self { catalog }
    }

    /// Tasks for a role, excluding already-completed ids.
    pub fn for_role(&self, role: UserRole, completed: &[TaskId]) -> Vec<Task> {
        self.catalog
            .tasks_for_role(role)
            .into_iter()
            .filter(|task| !completed.contains(task.id()))
            .cloned()
            .collect()
    }

    /// Looks up a single task.
    pub fn task(&self, id: &TaskId) -> Result<Task, DomainError> {
        self.catalog
            .task(id)
            .cloned()
            .ok_or_else(|| {
                DomainError::new(ErrorCode::TaskNotFound, format!("No task '{}'", id))
            })
    }

    /// Tasks offered at a workstation, excluding completed ids.
    ///
    /// Fixture workstations list some task ids with no task behind them;
    /// those are skipped. A listed task whose role disagrees with the
    /// workstation's is a fixture bug and is skipped with a warning.
    pub fn for_workstation(
        &self,
        workstation_id: &WorkstationId,
        completed: &[TaskId],
    ) -> Result<Vec<Task>, DomainError> {
        let workstation = self.catalog.workstation(workstation_id).ok_or_else(|| {
            DomainError::new(
                ErrorCode::WorkstationNotFound,
                format!("No workstation '{}'", workstation_id),
            )
        })?;

        let mut tasks = Vec::new();
        for task_id in workstation.available_tasks() {
            if completed.contains(task_id) {
                continue;
            }
            let Some(task) = self.catalog.task(task_id) else {
                continue;
            };
            if task.role() != workstation.role() {
                warn!(
                    task = %task_id,
                    workstation = %workstation_id,
                    "task role does not match workstation, skipping"
                );
                continue;
            }
            tasks.push(task.clone());
        }
        Ok(tasks)
    }
}

//! `TaskCatalog` over the static fixture data.

use crate::domain::foundation::{TaskId, UserRole, WorkstationId};
use crate::domain::office::Workstation;
use crate::domain::task::Task;
use crate::ports::TaskCatalog;

use super::fixtures;

/// Catalog backed by the compiled-in fixtures.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureCatalog;

impl FixtureCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl TaskCatalog for FixtureCatalog {
    fn task(&self, id: &TaskId) -> Option<&Task> {
        fixtures::tasks().iter().find(|task| task.id() == id)
    }

    fn tasks_for_role(&self, role: UserRole) -> Vec<&Task> {
        fixtures::tasks()
            .iter()
            .filter(|task| task.role() == role)
            .collect()
    }

    fn all_tasks(&self) -> &[Task] {
        fixtures::tasks()
    }

    fn workstation(&self, id: &WorkstationId) -> Option<&Workstation> {
        fixtures::workstations().iter().find(|ws| ws.id() == id)
    }

    fn workstation_for_role(&self, role: UserRole) -> Option<&Workstation> {
        fixtures::workstations().iter().find(|ws| ws.role() == role)
    }

    fn workstations(&self) -> &[Workstation] {
        fixtures::workstations()
    }
}

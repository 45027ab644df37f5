//! Task catalog port - lookup over the immutable fixture data.

use crate::domain::foundation::{TaskId, UserRole, WorkstationId};
use crate::domain::office::Workstation;
use crate::domain::task::Task;

/// Read-only access to the fixture task and workstation catalogs.
///
/// Catalogs are immutable and in-memory, so lookups are synchronous and
/// infallible; an unknown id simply yields `None`.
pub trait TaskCatalog: Send + Sync {
    /// Looks up a task by id.
    fn task(&self, id: &TaskId) -> Option<&Task>;

    /// Returns the tasks whose role matches, in fixture order.
    fn tasks_for_role(&self, role: UserRole) -> Vec<&Task>;

    /// All fixture tasks, in fixture order.
    fn all_tasks(&self) -> &[Task];

    /// Looks up a workstation by id.
    fn workstation(&self, id: &WorkstationId) -> Option<&Workstation>;

    /// Returns the workstation owned by a role, if any.
    fn workstation_for_role(&self, role: UserRole) -> Option<&Workstation>;

    /// All fixture workstations, in fixture order.
    fn workstations(&self) -> &[Workstation];
}

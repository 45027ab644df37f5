//! Workstation fixture entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{TaskId, UserRole, WorkstationId};

/// Position of a workstation in the decorative 3D office scene.
///
/// Carried through from the fixtures but unused beyond decoration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// A named, role-tagged cluster of available tasks.
///
/// Immutable fixture. Every task reachable through a workstation is expected
/// to carry the workstation's role; the catalog checks this at filter time
/// rather than enforcing it structurally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workstation {
    id: WorkstationId,
    name: String,
    role: UserRole,
    position: Vec3,
    available_tasks: Vec<TaskId>,
}

impl Workstation {
    /// Creates a fixture workstation.
    pub fn new(
        id: WorkstationId,
        name: impl Into<String>,
        role: UserRole,
        position: Vec3,
        available_tasks: Vec<TaskId>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            position,
            available_tasks,
        }
    }

    pub fn id(&self) -> &WorkstationId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The role that owns this workstation.
    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Ids of the tasks offered at this workstation, in fixture order.
    pub fn available_tasks(&self) -> &[TaskId] {
        &self.available_tasks
    }

    pub fn offers(&self, task_id: &TaskId) -> bool {
        self.available_tasks.iter().any(|id| id == task_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workstation_reports_offered_tasks() {
        let ws = Workstation::new(
            WorkstationId::new("dev-bay"),
            "Developer Bay",
            UserRole::Developer,
            Vec3::new(-8.0, 0.0, -5.0),
            vec![TaskId::new("task-1")],
        );

        assert!(ws.offers(&TaskId::new("task-1")));
        assert!(!ws.offers(&TaskId::new("task-2")));
    }
}

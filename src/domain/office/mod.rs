//! Office fixtures: role-tagged workstations.

mod workstation;

pub use workstation::{Vec3, Workstation};

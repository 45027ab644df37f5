//! Static fixture catalogs and their `TaskCatalog` implementation.

mod fixture_catalog;
mod fixtures;

pub use fixture_catalog::FixtureCatalog;
pub use fixtures::{sample_users, tasks, workstations};

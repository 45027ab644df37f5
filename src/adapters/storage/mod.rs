//! Device storage adapters.
//!
//! In-memory for tests and the ephemeral demo mode, file-backed for runs
//! that should survive a restart.

mod file;
mod in_memory;

pub use file::FileDeviceStorage;
pub use in_memory::InMemoryDeviceStorage;

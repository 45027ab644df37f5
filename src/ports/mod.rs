//! Ports - interfaces the application layer depends on.

mod device_storage;
mod task_catalog;

pub use device_storage::{DeviceStorage, StorageError};
pub use task_catalog::TaskCatalog;

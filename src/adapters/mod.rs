//! Adapters - concrete implementations of the ports.

pub mod catalog;
pub mod storage;

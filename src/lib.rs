//! SimWork - workplace simulation demo core.
//!
//! This crate implements the logic behind the SimWork product demo:
//! fixture task catalogs grouped by workstation, a two-step task wizard
//! with randomized scoring, and mock session flows persisted to
//! on-device storage.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

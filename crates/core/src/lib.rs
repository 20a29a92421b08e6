//! Core types and storage contracts for uservault.
//!
//! This crate holds the pure domain model (records and the operations on
//! their data maps) and the storage contracts that backend crates implement.
//! It has no database dependency; concrete backends live in the `uservault`
//! crate and are selected there via feature flags.

pub mod record;
pub mod storage;

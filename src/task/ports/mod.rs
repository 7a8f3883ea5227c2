//! Port contracts for the kanban board.
//!
//! Ports define storage-agnostic interfaces used by board services.

pub mod store;

pub use store::{TaskStore, TaskStoreError, TaskStoreResult};

//! Kanban board status-transition engine.
//!
//! Tasks live in one store and are shown in three fixed columns, one per
//! status. Dropping a task onto another column changes its status; every
//! other gesture leaves the store untouched. The module follows hexagonal
//! architecture:
//!
//! - Domain types, the column projection and the gesture interpreter in
//!   [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

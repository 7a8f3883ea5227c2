//! Taskboard: the status-transition engine behind a kanban board.
//!
//! This crate owns the task set shown on a three-column board, derives the
//! column contents from it, and turns drag-and-drop gestures into status
//! changes.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for task storage
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`task`]: Task store, column projection, drag interpretation and task
//!   creation

pub mod task;

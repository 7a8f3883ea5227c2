//! In-memory adapters for the kanban board.

mod task;

pub use task::InMemoryTaskStore;

//! Step definitions for kanban board BDD scenarios.

pub mod world;

mod when;

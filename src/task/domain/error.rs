//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
///
/// Every variant describes caller input that the board refuses to accept.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the configured limit.
    #[error("task title has {length} characters, limit is {max}")]
    TitleTooLong {
        /// Character count of the rejected title.
        length: usize,
        /// Configured maximum.
        max: usize,
    },

    /// The task description exceeds the configured limit.
    #[error("task description has {length} characters, limit is {max}")]
    DescriptionTooLong {
        /// Character count of the rejected description.
        length: usize,
        /// Configured maximum.
        max: usize,
    },

    /// A drop target named a bucket that does not exist.
    #[error(transparent)]
    UnknownBucket(#[from] ParseTaskStatusError),

    /// The dragged item identity is not a task identifier.
    #[error("invalid task identifier: {0}")]
    InvalidTaskId(String),
}

/// Error returned while parsing task statuses from bucket identifiers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

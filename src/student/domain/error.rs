//! Error types for student domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing student domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StudentDomainError {
    /// The student name is missing or empty after trimming.
    #[error("student name must not be empty")]
    EmptyName,

    /// The assigned task is missing or empty after trimming.
    #[error("assigned task must not be empty")]
    EmptyTask,

    /// The deadline is missing or empty after trimming.
    #[error("deadline must not be empty")]
    EmptyDeadline,

    /// The requested review status is not one of the known values.
    #[error(transparent)]
    UnknownStatus(#[from] ParseReviewStatusError),
}

/// Error returned while parsing review statuses from requests or storage.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown review status: {0}")]
pub struct ParseReviewStatusError(pub String);

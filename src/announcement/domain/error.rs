//! Error types for announcement validation.

use thiserror::Error;

/// Errors returned while constructing announcement values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnnouncementDomainError {
    /// The announced task is empty after trimming.
    #[error("current task must not be empty")]
    EmptyTask,
}

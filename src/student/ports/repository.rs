//! Repository port for student record persistence.

use crate::student::domain::{Student, StudentId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for student repository operations.
pub type StudentRepositoryResult<T> = Result<T, StudentRepositoryError>;

/// Student persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Stores a newly enrolled student.
    ///
    /// # Errors
    ///
    /// Returns [`StudentRepositoryError::DuplicateStudent`] when the student
    /// ID already exists.
    async fn store(&self, student: &Student) -> StudentRepositoryResult<()>;

    /// Replaces a stored student if its stored revision still equals
    /// `expected_revision`.
    ///
    /// # Errors
    ///
    /// Returns [`StudentRepositoryError::NotFound`] when the student does not
    /// exist or [`StudentRepositoryError::Conflict`] when another write
    /// landed first.
    async fn update(&self, student: &Student, expected_revision: u64)
    -> StudentRepositoryResult<()>;

    /// Finds a student by identifier.
    ///
    /// Returns `None` when the student does not exist.
    async fn find_by_id(&self, id: StudentId) -> StudentRepositoryResult<Option<Student>>;

    /// Returns every stored student in creation order.
    async fn list(&self) -> StudentRepositoryResult<Vec<Student>>;

    /// Removes a student permanently.
    ///
    /// # Errors
    ///
    /// Returns [`StudentRepositoryError::NotFound`] when the student does not
    /// exist.
    async fn delete(&self, id: StudentId) -> StudentRepositoryResult<()>;
}

/// Errors returned by student repository implementations.
#[derive(Debug, Clone, Error)]
pub enum StudentRepositoryError {
    /// A student with the same identifier already exists.
    #[error("duplicate student identifier: {0}")]
    DuplicateStudent(StudentId),

    /// The student was not found.
    #[error("student not found: {0}")]
    NotFound(StudentId),

    /// The stored revision no longer matches the one the change was based on.
    #[error("student {id} was modified concurrently (expected revision {expected_revision})")]
    Conflict {
        /// Student whose write was refused.
        id: StudentId,
        /// Revision the caller read before computing its change.
        expected_revision: u64,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl StudentRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

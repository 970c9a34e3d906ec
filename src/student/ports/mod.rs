//! Port contracts for student record management.
//!
//! Ports define infrastructure-agnostic interfaces used by student services.

pub mod repository;

#[cfg(test)]
pub use repository::MockStudentRepository;
pub use repository::{StudentRepository, StudentRepositoryError, StudentRepositoryResult};

//! Shared world state for student review BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use reviewdesk::student::{
    adapters::memory::InMemoryStudentRepository,
    domain::Student,
    services::{StudentRecordService, StudentServiceError},
};
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestStudentService = StudentRecordService<InMemoryStudentRepository, DefaultClock>;

/// Scenario world for student review behaviour tests.
pub struct StudentReviewWorld {
    pub service: TestStudentService,
    pub student: Option<Student>,
    pub last_update_result: Option<Result<Student, StudentServiceError>>,
}

impl StudentReviewWorld {
    /// Creates a world with no enrolled student.
    #[must_use]
    pub fn new() -> Self {
        let service = StudentRecordService::new(
            Arc::new(InMemoryStudentRepository::new()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            student: None,
            last_update_result: None,
        }
    }

    /// Returns the enrolled student.
    ///
    /// # Errors
    ///
    /// Returns an error if no student has been enrolled yet.
    pub fn enrolled(&self) -> Result<&Student, eyre::Report> {
        self.student
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing enrolled student in scenario world"))
    }
}

impl Default for StudentReviewWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> StudentReviewWorld {
    StudentReviewWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

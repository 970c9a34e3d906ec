//! Service layer for student enrolment, lookup, review updates, and removal.

use crate::error::ErrorKind;
use crate::student::{
    domain::{
        ChangeSet, ReviewStatus, Student, StudentDomainError, StudentId, StudentProfile,
        TransitionRejection,
    },
    ports::{StudentRepository, StudentRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Number of read-check-write rounds attempted before a concurrent-write
/// conflict is reported to the caller.
const MAX_UPDATE_ATTEMPTS: usize = 3;

/// Request payload for enrolling a student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateStudentRequest {
    name: String,
    task: String,
    deadline: String,
    github: Option<String>,
}

impl CreateStudentRequest {
    /// Creates a request with the required profile fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        task: impl Into<String>,
        deadline: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            task: task.into(),
            deadline: deadline.into(),
            github: None,
        }
    }

    /// Sets an initial GitHub link.
    #[must_use]
    pub fn with_github(mut self, github: impl Into<String>) -> Self {
        self.github = Some(github.into());
        self
    }
}

/// Request payload for a constrained student update.
///
/// Status values arrive as text and are parsed by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStudentRequest {
    id: StudentId,
    github: Option<String>,
    status: Option<String>,
}

impl UpdateStudentRequest {
    /// Creates an update request that changes nothing yet.
    #[must_use]
    pub const fn new(id: StudentId) -> Self {
        Self {
            id,
            github: None,
            status: None,
        }
    }

    /// Requests a GitHub link.
    #[must_use]
    pub fn with_github(mut self, github: impl Into<String>) -> Self {
        self.github = Some(github.into());
        self
    }

    /// Requests a review status by its wire name.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Returns the target student.
    #[must_use]
    pub const fn id(&self) -> StudentId {
        self.id
    }

    fn to_change_set(&self) -> Result<ChangeSet, StudentDomainError> {
        let mut change = ChangeSet::new();
        if let Some(github) = &self.github {
            change = change.with_github(github.as_str());
        }
        let requested_status = self
            .status
            .as_deref()
            .map(str::trim)
            .filter(|status| !status.is_empty());
        if let Some(status) = requested_status {
            change = change.with_status(ReviewStatus::try_from(status)?);
        }
        Ok(change)
    }
}

/// Service-level errors for student record operations.
#[derive(Debug, Error)]
pub enum StudentServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] StudentDomainError),
    /// The student does not exist.
    #[error("student not found: {0}")]
    NotFound(StudentId),
    /// The transition rules refused the change.
    #[error(transparent)]
    Rejected(#[from] TransitionRejection),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(StudentRepositoryError),
}

impl StudentServiceError {
    /// Classifies the error for callers.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Rejected(rejection) => ErrorKind::from(*rejection),
            Self::Repository(_) => ErrorKind::BackendUnavailable,
        }
    }
}

impl From<StudentRepositoryError> for StudentServiceError {
    fn from(err: StudentRepositoryError) -> Self {
        match err {
            StudentRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for student service operations.
pub type StudentServiceResult<T> = Result<T, StudentServiceError>;

/// Student record orchestration service.
#[derive(Clone)]
pub struct StudentRecordService<R, C>
where
    R: StudentRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> StudentRecordService<R, C>
where
    R: StudentRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new student record service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Enrols a student in the `pending` status.
    ///
    /// # Errors
    ///
    /// Returns [`StudentServiceError::Validation`] when a profile field is
    /// blank, or [`StudentServiceError::Repository`] when persistence fails.
    pub async fn create(&self, request: CreateStudentRequest) -> StudentServiceResult<Student> {
        let profile = StudentProfile::new(request.name, request.task, request.deadline)?;
        let student = Student::enroll(profile, request.github, &*self.clock);
        self.repository
            .store(&student)
            .await
            .inspect_err(|err| warn!(error = %err, "failed to store student"))?;
        info!(student_id = %student.id(), name = student.name(), "student enrolled");
        Ok(student)
    }

    /// Lists every student.
    ///
    /// # Errors
    ///
    /// Returns [`StudentServiceError::Repository`] when persistence fails.
    pub async fn list(&self) -> StudentServiceResult<Vec<Student>> {
        let students = self
            .repository
            .list()
            .await
            .inspect_err(|err| warn!(error = %err, "failed to list students"))?;
        debug!(count = students.len(), "listed students");
        Ok(students)
    }

    /// Retrieves a student by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StudentServiceError::NotFound`] when the student does not
    /// exist.
    pub async fn get_by_id(&self, id: StudentId) -> StudentServiceResult<Student> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(StudentServiceError::NotFound(id))
    }

    /// Applies a constrained update to a student.
    ///
    /// The change is evaluated against the stored record and written with a
    /// compare-and-swap on the record revision. When another write lands
    /// first the change is re-evaluated against the fresh record.
    ///
    /// # Errors
    ///
    /// Returns [`StudentServiceError::Validation`] for unknown status values,
    /// [`StudentServiceError::NotFound`] when the student does not exist,
    /// [`StudentServiceError::Rejected`] when the transition rules refuse the
    /// change, or [`StudentServiceError::Repository`] when persistence fails
    /// or conflicts persist.
    pub async fn update(&self, request: UpdateStudentRequest) -> StudentServiceResult<Student> {
        let change = request.to_change_set()?;
        let id = request.id();

        let mut attempt = 1;
        loop {
            let mut student = self.get_by_id(id).await?;
            let previous_status = student.status();
            let expected_revision = student.revision();

            if let Err(rejection) = student.apply_change(&change, &*self.clock) {
                debug!(student_id = %id, reason = rejection.code(), "update rejected");
                return Err(rejection.into());
            }

            match self.repository.update(&student, expected_revision).await {
                Ok(()) => {
                    if student.status() == previous_status {
                        debug!(student_id = %id, "student updated");
                    } else {
                        info!(
                            student_id = %id,
                            from = %previous_status,
                            to = %student.status(),
                            "review status changed"
                        );
                    }
                    return Ok(student);
                }
                Err(StudentRepositoryError::Conflict { .. }) if attempt < MAX_UPDATE_ATTEMPTS => {
                    debug!(student_id = %id, attempt, "concurrent update, re-evaluating");
                    attempt += 1;
                }
                Err(err) => {
                    warn!(student_id = %id, error = %err, "failed to persist student update");
                    return Err(err.into());
                }
            }
        }
    }

    /// Removes a student permanently.
    ///
    /// # Errors
    ///
    /// Returns [`StudentServiceError::NotFound`] when the student does not
    /// exist.
    pub async fn delete(&self, id: StudentId) -> StudentServiceResult<()> {
        self.repository.delete(id).await?;
        info!(student_id = %id, "student deleted");
        Ok(())
    }
}

//! Domain model for student records and their review workflow.
//!
//! Students are enrolled with a fixed profile, submit a GitHub link once, and
//! move through `pending -> underReview -> reviewed`. The transition rules
//! live in [`evaluate`] and are free of infrastructure concerns.

mod error;
mod ids;
mod status;
mod student;
mod transition;

pub use error::{ParseReviewStatusError, StudentDomainError};
pub use ids::StudentId;
pub use status::ReviewStatus;
pub use student::{PersistedStudentData, Student, StudentProfile};
pub use transition::{AcceptedChange, ChangeSet, TransitionRejection, evaluate};

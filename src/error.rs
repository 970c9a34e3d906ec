//! Outcome classification shared by every service.
//!
//! Services expose their own error enums; [`ErrorKind`] folds them into the
//! taxonomy callers act on: bad input, unknown identifiers, the five
//! transition rejections, and an unreachable backend.

use crate::student::domain::TransitionRejection;
use std::fmt;

/// Caller-facing classification of a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Required input was missing, empty, or not recognised.
    Validation,
    /// The identifier does not refer to a stored record.
    NotFound,
    /// The GitHub link was already submitted.
    GitHubLocked,
    /// A record under review was asked to return to pending.
    IllegalRevert,
    /// The record is reviewed and accepts no changes.
    RecordLocked,
    /// A pending record was asked to skip the review step.
    SkippedReview,
    /// The change neither advances the status nor submits a link.
    InvalidTransition,
    /// The persistence layer could not complete the operation.
    ///
    /// Callers may retry at their discretion.
    BackendUnavailable,
}

impl ErrorKind {
    /// Returns the stable machine-readable code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Validation => "validation_error",
            Self::NotFound => "not_found",
            Self::GitHubLocked => "github_locked",
            Self::IllegalRevert => "illegal_revert",
            Self::RecordLocked => "record_locked",
            Self::SkippedReview => "skipped_review",
            Self::InvalidTransition => "invalid_transition",
            Self::BackendUnavailable => "backend_unavailable",
        }
    }

    /// Returns whether the outcome is an expected business result rather
    /// than an infrastructure failure.
    #[must_use]
    pub const fn is_business_outcome(self) -> bool {
        !matches!(self, Self::BackendUnavailable)
    }
}

impl From<TransitionRejection> for ErrorKind {
    fn from(rejection: TransitionRejection) -> Self {
        match rejection {
            TransitionRejection::GitHubLocked => Self::GitHubLocked,
            TransitionRejection::IllegalRevert => Self::IllegalRevert,
            TransitionRejection::RecordLocked => Self::RecordLocked,
            TransitionRejection::SkippedReview => Self::SkippedReview,
            TransitionRejection::InvalidTransition => Self::InvalidTransition,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

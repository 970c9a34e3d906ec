//! Transition rules for student record updates.
//!
//! An update carries a partial [`ChangeSet`]. [`evaluate`] decides whether it
//! may be applied to the current record state. The rules run in a fixed
//! order and the first rejection wins:
//!
//! 1. A GitHub link may only be set while the stored link is still empty.
//! 2. A record under review may not go back to `pending`.
//! 3. A reviewed record accepts no change at all.
//! 4. A pending record may not jump straight to `reviewed`.
//! 5. Anything else must either advance the status by one step or carry a
//!    GitHub link.

use super::ReviewStatus;
use thiserror::Error;

/// Partial change requested for a student record.
///
/// Empty or whitespace-only GitHub links are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    github: Option<String>,
    status: Option<ReviewStatus>,
}

impl ChangeSet {
    /// Creates an empty change-set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            github: None,
            status: None,
        }
    }

    /// Requests a GitHub link. Blank values leave the field untouched.
    #[must_use]
    pub fn with_github(mut self, github: impl Into<String>) -> Self {
        let raw = github.into();
        let trimmed = raw.trim();
        self.github = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_owned())
        };
        self
    }

    /// Requests a review status.
    #[must_use]
    pub const fn with_status(mut self, status: ReviewStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns the requested GitHub link, if any.
    #[must_use]
    pub fn github(&self) -> Option<&str> {
        self.github.as_deref()
    }

    /// Returns the requested review status, if any.
    #[must_use]
    pub const fn status(&self) -> Option<ReviewStatus> {
        self.status
    }

    /// Returns whether the change-set requests nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.github.is_none() && self.status.is_none()
    }
}

/// Reason an update was refused.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash)]
pub enum TransitionRejection {
    /// The GitHub link has already been submitted.
    #[error("GitHub link is already locked")]
    GitHubLocked,

    /// The record is under review and may not return to pending.
    #[error("cannot revert to pending once under review")]
    IllegalRevert,

    /// The record has been reviewed and is locked.
    #[error("reviewed student record is locked")]
    RecordLocked,

    /// The record must pass through under-review before reviewed.
    #[error("must go to underReview before reviewed")]
    SkippedReview,

    /// The change neither advances the status nor submits a GitHub link.
    #[error("invalid status transition")]
    InvalidTransition,
}

impl TransitionRejection {
    /// Returns the stable machine-readable reason code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::GitHubLocked => "github_locked",
            Self::IllegalRevert => "illegal_revert",
            Self::RecordLocked => "record_locked",
            Self::SkippedReview => "skipped_review",
            Self::InvalidTransition => "invalid_transition",
        }
    }
}

/// Change-set that has passed every transition rule.
///
/// Only [`evaluate`] constructs this value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedChange {
    github: Option<String>,
    status: Option<ReviewStatus>,
}

impl AcceptedChange {
    /// Returns the GitHub link to store, if the change sets one.
    #[must_use]
    pub fn github(&self) -> Option<&str> {
        self.github.as_deref()
    }

    /// Returns the status to store, if the change sets one.
    #[must_use]
    pub const fn status(&self) -> Option<ReviewStatus> {
        self.status
    }

    pub(crate) fn into_parts(self) -> (Option<String>, Option<ReviewStatus>) {
        (self.github, self.status)
    }
}

/// Decides whether `proposed` may be applied to a record in `status` whose
/// stored GitHub link is `github`.
///
/// # Errors
///
/// Returns the first [`TransitionRejection`] whose rule matches.
pub fn evaluate(
    status: ReviewStatus,
    github: &str,
    proposed: &ChangeSet,
) -> Result<AcceptedChange, TransitionRejection> {
    let proposes_github = proposed.github.is_some();

    if proposes_github && !github.trim().is_empty() {
        return Err(TransitionRejection::GitHubLocked);
    }
    if status == ReviewStatus::UnderReview && proposed.status == Some(ReviewStatus::Pending) {
        return Err(TransitionRejection::IllegalRevert);
    }
    if status.is_terminal() {
        return Err(TransitionRejection::RecordLocked);
    }
    if status == ReviewStatus::Pending && proposed.status == Some(ReviewStatus::Reviewed) {
        return Err(TransitionRejection::SkippedReview);
    }

    let advances = matches!(
        (status, proposed.status),
        (ReviewStatus::Pending, Some(ReviewStatus::UnderReview))
            | (ReviewStatus::UnderReview, Some(ReviewStatus::Reviewed))
    );
    if !advances && !proposes_github {
        return Err(TransitionRejection::InvalidTransition);
    }

    Ok(AcceptedChange {
        github: proposed.github.clone(),
        status: proposed.status,
    })
}

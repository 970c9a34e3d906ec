//! Review status of a student submission.

use super::ParseReviewStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Review workflow status.
///
/// Statuses only move forward along `pending -> underReview -> reviewed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReviewStatus {
    /// No submission has been reviewed yet.
    Pending,
    /// The submission is being reviewed.
    UnderReview,
    /// The submission has been reviewed. No further changes are permitted.
    Reviewed,
}

impl ReviewStatus {
    /// Returns the canonical wire and storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::UnderReview => "underReview",
            Self::Reviewed => "reviewed",
        }
    }

    /// Returns whether the status forbids every further mutation.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Reviewed)
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ReviewStatus {
    type Error = ParseReviewStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "pending" => Ok(Self::Pending),
            "underReview" => Ok(Self::UnderReview),
            "reviewed" => Ok(Self::Reviewed),
            _ => Err(ParseReviewStatusError(value.to_owned())),
        }
    }
}

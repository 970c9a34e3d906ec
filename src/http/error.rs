//! Mapping of service failures onto HTTP responses.

use super::response::FailureBody;
use crate::announcement::services::AnnouncementServiceError;
use crate::error::ErrorKind;
use crate::student::services::StudentServiceError;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::warn;

/// Failure returned by an HTTP handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    kind: ErrorKind,
    message: String,
}

impl ApiError {
    /// Creates an error of the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the HTTP status reported for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self.kind {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::BackendUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::Validation
            | ErrorKind::GitHubLocked
            | ErrorKind::IllegalRevert
            | ErrorKind::RecordLocked
            | ErrorKind::SkippedReview
            | ErrorKind::InvalidTransition => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<StudentServiceError> for ApiError {
    fn from(err: StudentServiceError) -> Self {
        Self::new(err.kind(), err.to_string())
    }
}

impl From<AnnouncementServiceError> for ApiError {
    fn from(err: AnnouncementServiceError) -> Self {
        Self::new(err.kind(), err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(ErrorKind::Validation, rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if !self.kind.is_business_outcome() {
            warn!(code = self.kind.code(), message = %self.message, "request failed");
        }
        let body = FailureBody {
            success: false,
            code: self.kind.code().to_owned(),
            message: self.message,
        };
        (status, Json(body)).into_response()
    }
}

//! JSON bodies exchanged over HTTP.
//!
//! Successful writes answer `{"success": true, ...}` and failures answer
//! `{"success": false, "code": ..., "message": ...}`.

use crate::announcement::domain::{CurrentTask, TaskAnnouncement};
use crate::student::domain::{ReviewStatus, Student};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/students`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateStudentBody {
    /// Student name.
    pub name: String,
    /// Assigned task.
    pub task: String,
    /// Free-form deadline.
    pub deadline: String,
    /// Optional initial GitHub link.
    pub github: Option<String>,
}

/// Body of `PATCH /api/students/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateStudentBody {
    /// Requested GitHub link.
    pub github: Option<String>,
    /// Requested review status.
    pub status: Option<String>,
}

/// Body of `PATCH /api/task`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SetCurrentTaskBody {
    /// Task to announce.
    pub current_task: String,
}

/// Wire form of a student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentView {
    /// Student identifier.
    pub id: String,
    /// Student name.
    pub name: String,
    /// Assigned task.
    pub task: String,
    /// Free-form deadline.
    pub deadline: String,
    /// Submitted GitHub link, empty until submitted.
    pub github: String,
    /// Review status.
    pub status: ReviewStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<&Student> for StudentView {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id().to_string(),
            name: student.name().to_owned(),
            task: student.task().to_owned(),
            deadline: student.deadline().to_owned(),
            github: student.github().to_owned(),
            status: student.status(),
            created_at: student.created_at(),
            updated_at: student.updated_at(),
        }
    }
}

/// Successful response carrying one student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentEnvelope {
    /// Always `true`.
    pub success: bool,
    /// The created, fetched, or updated student.
    pub student: StudentView,
}

impl From<&Student> for StudentEnvelope {
    fn from(student: &Student) -> Self {
        Self {
            success: true,
            student: StudentView::from(student),
        }
    }
}

/// Successful response with no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    /// Always `true`.
    pub success: bool,
}

impl Acknowledgement {
    /// Creates a successful acknowledgement.
    #[must_use]
    pub const fn ok() -> Self {
        Self { success: true }
    }
}

/// Response of `GET /api/task`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentTaskView {
    /// Announced task, or the placeholder when none is set.
    pub current_task: String,
    /// When the task was announced; absent for the placeholder.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&CurrentTask> for CurrentTaskView {
    fn from(current: &CurrentTask) -> Self {
        Self {
            current_task: current.text().to_owned(),
            updated_at: current.announcement().map(TaskAnnouncement::updated_at),
        }
    }
}

impl From<&TaskAnnouncement> for CurrentTaskView {
    fn from(announcement: &TaskAnnouncement) -> Self {
        Self {
            current_task: announcement.current_task().to_owned(),
            updated_at: Some(announcement.updated_at()),
        }
    }
}

/// Response of `PATCH /api/task`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskEnvelope {
    /// Always `true`.
    pub success: bool,
    /// The stored announcement.
    pub task: CurrentTaskView,
}

/// Failure response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureBody {
    /// Always `false`.
    pub success: bool,
    /// Stable machine-readable reason code.
    pub code: String,
    /// Human-readable explanation.
    pub message: String,
}

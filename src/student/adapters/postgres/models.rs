//! Diesel row models for student persistence.

use super::schema::students;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for student records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = students)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StudentRow {
    /// Student identifier.
    pub id: uuid::Uuid,
    /// Student name.
    pub name: String,
    /// Assigned task.
    pub task: String,
    /// Free-form deadline.
    pub deadline: String,
    /// Submitted GitHub link.
    pub github: String,
    /// Review status.
    pub status: String,
    /// Revision counter.
    pub revision: i64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for student records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = students)]
pub struct NewStudentRow {
    /// Student identifier.
    pub id: uuid::Uuid,
    /// Student name.
    pub name: String,
    /// Assigned task.
    pub task: String,
    /// Free-form deadline.
    pub deadline: String,
    /// Submitted GitHub link.
    pub github: String,
    /// Review status.
    pub status: String,
    /// Revision counter.
    pub revision: i64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

//! Diesel row models for announcement persistence.

use super::schema::task_announcements;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Key of the only row in `task_announcements`.
pub const SINGLETON_SLOT: i16 = 1;

/// Query result row for the announcement.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = task_announcements)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AnnouncementRow {
    /// Announced task.
    pub current_task: String,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for the announcement.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = task_announcements)]
pub struct NewAnnouncementRow {
    /// Fixed singleton key.
    pub slot: i16,
    /// Announced task.
    pub current_task: String,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

//! Domain model for the current-task announcement.
//!
//! At most one announcement exists. It is created by the first write and
//! replaced by every later one.

mod announcement;
mod error;

pub use announcement::{CurrentTask, NO_TASK_SET, TaskAnnouncement};
pub use error::AnnouncementDomainError;

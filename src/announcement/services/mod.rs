//! Application services for the current-task announcement.

mod current_task;

pub use current_task::{AnnouncementService, AnnouncementServiceError, AnnouncementServiceResult};

//! Port contracts for the current-task announcement.

pub mod repository;

#[cfg(test)]
pub use repository::MockAnnouncementRepository;
pub use repository::{
    AnnouncementRepository, AnnouncementRepositoryError, AnnouncementRepositoryResult,
};

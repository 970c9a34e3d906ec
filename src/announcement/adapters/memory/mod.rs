//! In-memory adapter for the announcement.

mod announcement;

pub use announcement::InMemoryAnnouncementRepository;

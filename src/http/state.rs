//! Shared handler state.

use crate::announcement::{ports::AnnouncementRepository, services::AnnouncementService};
use crate::student::{ports::StudentRepository, services::StudentRecordService};
use mockable::DefaultClock;
use std::sync::Arc;

/// Services reachable from every handler.
pub struct AppState<S, A>
where
    S: StudentRepository,
    A: AnnouncementRepository,
{
    /// Student record service.
    pub students: Arc<StudentRecordService<S, DefaultClock>>,
    /// Current-task announcement service.
    pub announcements: Arc<AnnouncementService<A, DefaultClock>>,
}

impl<S, A> AppState<S, A>
where
    S: StudentRepository,
    A: AnnouncementRepository,
{
    /// Wires services over the given repositories using the system clock.
    #[must_use]
    pub fn new(students: S, announcements: A) -> Self {
        let clock = Arc::new(DefaultClock);
        Self {
            students: Arc::new(StudentRecordService::new(
                Arc::new(students),
                Arc::clone(&clock),
            )),
            announcements: Arc::new(AnnouncementService::new(Arc::new(announcements), clock)),
        }
    }
}

impl<S, A> Clone for AppState<S, A>
where
    S: StudentRepository,
    A: AnnouncementRepository,
{
    fn clone(&self) -> Self {
        Self {
            students: Arc::clone(&self.students),
            announcements: Arc::clone(&self.announcements),
        }
    }
}

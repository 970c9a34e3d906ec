//! `PostgreSQL` repository implementation for the announcement.

use super::{
    models::{AnnouncementRow, NewAnnouncementRow, SINGLETON_SLOT},
    schema::task_announcements,
};
use crate::announcement::{
    domain::TaskAnnouncement,
    ports::{AnnouncementRepository, AnnouncementRepositoryError, AnnouncementRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by the announcement adapter.
pub type AnnouncementPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed announcement repository.
#[derive(Debug, Clone)]
pub struct PostgresAnnouncementRepository {
    pool: AnnouncementPgPool,
}

impl PostgresAnnouncementRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: AnnouncementPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> AnnouncementRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> AnnouncementRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool
                .get()
                .map_err(AnnouncementRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(AnnouncementRepositoryError::persistence)?
    }
}

#[async_trait]
impl AnnouncementRepository for PostgresAnnouncementRepository {
    async fn load(&self) -> AnnouncementRepositoryResult<Option<TaskAnnouncement>> {
        self.run_blocking(move |connection| {
            let row = task_announcements::table
                .filter(task_announcements::slot.eq(SINGLETON_SLOT))
                .select(AnnouncementRow::as_select())
                .first::<AnnouncementRow>(connection)
                .optional()
                .map_err(AnnouncementRepositoryError::persistence)?;
            Ok(row.map(|stored| {
                TaskAnnouncement::from_persisted(stored.current_task, stored.updated_at)
            }))
        })
        .await
    }

    async fn upsert(&self, announcement: &TaskAnnouncement) -> AnnouncementRepositoryResult<()> {
        let new_row = NewAnnouncementRow {
            slot: SINGLETON_SLOT,
            current_task: announcement.current_task().to_owned(),
            updated_at: announcement.updated_at(),
        };

        self.run_blocking(move |connection| {
            diesel::insert_into(task_announcements::table)
                .values(&new_row)
                .on_conflict(task_announcements::slot)
                .do_update()
                .set((
                    task_announcements::current_task.eq(&new_row.current_task),
                    task_announcements::updated_at.eq(new_row.updated_at),
                ))
                .execute(connection)
                .map_err(AnnouncementRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }
}

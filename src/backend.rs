//! Store handles created and closed by the process entry point.
//!
//! A [`Backend`] is constructed once from [`Config`], turned into an HTTP
//! router, and closed explicitly when the server stops. Repositories receive
//! their pool through the handle rather than through shared global state.

use crate::announcement::adapters::{
    memory::InMemoryAnnouncementRepository, postgres::PostgresAnnouncementRepository,
};
use crate::config::Config;
use crate::http::{AppState, router};
use crate::student::adapters::{
    memory::InMemoryStudentRepository, postgres::PostgresStudentRepository,
};
use axum::Router;
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use thiserror::Error;
use tracing::{debug, info};

/// `PostgreSQL` connection pool shared by every repository.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Schema applied when connecting to `PostgreSQL`. Every statement is
/// idempotent.
const SCHEMA_SQL: &str = include_str!("../migrations/2025-11-01-000000_create_reviewdesk/up.sql");

/// Errors returned while opening a backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The connection pool could not be established.
    #[error("failed to connect to PostgreSQL: {0}")]
    Connect(#[from] PoolError),

    /// The schema could not be applied.
    #[error("failed to prepare PostgreSQL schema: {0}")]
    Schema(#[from] diesel::result::Error),
}

/// Explicitly owned persistence handle.
#[derive(Debug, Clone)]
pub enum Backend {
    /// Process-local storage; contents are lost on exit.
    InMemory {
        /// Student records.
        students: InMemoryStudentRepository,
        /// Current-task announcement.
        announcements: InMemoryAnnouncementRepository,
    },
    /// `PostgreSQL` storage behind a connection pool.
    Postgres(PgPool),
}

impl Backend {
    /// Creates an empty in-memory backend.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::InMemory {
            students: InMemoryStudentRepository::new(),
            announcements: InMemoryAnnouncementRepository::new(),
        }
    }

    /// Opens the backend selected by `config`.
    ///
    /// This blocks while the `PostgreSQL` pool is filled.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] when `PostgreSQL` is configured but cannot be
    /// reached or prepared.
    pub fn open(config: &Config) -> Result<Self, BackendError> {
        match config.database_url.as_deref() {
            Some(database_url) => Self::connect_postgres(database_url, config.pool_size),
            None => Ok(Self::in_memory()),
        }
    }

    /// Connects to `PostgreSQL` and applies the schema.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Connect`] when no connection can be made or
    /// [`BackendError::Schema`] when the schema statements fail.
    pub fn connect_postgres(database_url: &str, pool_size: u32) -> Result<Self, BackendError> {
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool = Pool::builder().max_size(pool_size).build(manager)?;
        pool.get()?.batch_execute(SCHEMA_SQL)?;
        info!(pool_size, "connected to PostgreSQL");
        Ok(Self::Postgres(pool))
    }

    /// Returns a short name for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InMemory { .. } => "in-memory",
            Self::Postgres(_) => "postgres",
        }
    }

    /// Builds the HTTP router over this backend's repositories.
    #[must_use]
    pub fn router(&self, allowed_origin: Option<&str>) -> Router {
        match self {
            Self::InMemory {
                students,
                announcements,
            } => router(
                AppState::new(students.clone(), announcements.clone()),
                allowed_origin,
            ),
            Self::Postgres(pool) => router(
                AppState::new(
                    PostgresStudentRepository::new(pool.clone()),
                    PostgresAnnouncementRepository::new(pool.clone()),
                ),
                allowed_origin,
            ),
        }
    }

    /// Releases the backend's resources.
    pub fn close(self) {
        match self {
            Self::InMemory { .. } => debug!("discarding in-memory backend"),
            Self::Postgres(pool) => {
                let state = pool.state();
                info!(
                    connections = state.connections,
                    idle = state.idle_connections,
                    "closing PostgreSQL pool"
                );
                drop(pool);
            }
        }
    }
}

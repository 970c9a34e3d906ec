//! `PostgreSQL` adapter for the announcement.

mod models;
mod repository;
mod schema;

pub use repository::{AnnouncementPgPool, PostgresAnnouncementRepository};

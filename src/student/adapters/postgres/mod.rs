//! `PostgreSQL` adapters for student record persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresStudentRepository, StudentPgPool};

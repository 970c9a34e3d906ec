//! The current-task announcement shown to every student.
//!
//! A single record holds the task currently assigned to the cohort. Reading
//! before anything is announced yields a fixed placeholder. Layout mirrors
//! the [`crate::student`] module: [`domain`], [`ports`], [`adapters`], and
//! [`services`].

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

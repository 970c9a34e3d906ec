//! Step definitions for current-task BDD scenarios.

mod steps;
pub mod world;

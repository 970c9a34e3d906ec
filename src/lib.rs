//! Reviewdesk: review tracking for student programming tasks.
//!
//! Students are enrolled against a task and deadline, submit a GitHub link,
//! and move through a forward-only review lifecycle
//! (`pending` → `underReview` → `reviewed`). A single current-task
//! announcement is shared with every student.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: In-memory and `PostgreSQL` implementations of ports
//! - **Services**: Orchestration over ports
//!
//! # Modules
//!
//! - [`student`]: Student records and the review transition rules
//! - [`announcement`]: The singleton current-task announcement
//! - [`http`]: JSON-over-HTTP boundary
//! - [`backend`]: Store selection and lifecycle
//! - [`config`]: Environment configuration
//! - [`error`]: Outcome taxonomy shared across contexts

pub mod announcement;
pub mod backend;
pub mod config;
pub mod error;
pub mod http;
pub mod student;

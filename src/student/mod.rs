//! Student records and their review workflow.
//!
//! Students are enrolled with a name, an assigned task, and a deadline. They
//! submit a GitHub link once, and a reviewer moves them through
//! `pending -> underReview -> reviewed`. Every update passes through the
//! transition rules in [`domain::evaluate`]. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

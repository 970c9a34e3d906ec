//! Adapter implementations for the announcement repository port.

pub mod memory;
pub mod postgres;

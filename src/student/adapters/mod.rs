//! Adapter implementations for the student repository port.

pub mod memory;
pub mod postgres;

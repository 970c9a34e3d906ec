//! Unit tests for the announcement module.

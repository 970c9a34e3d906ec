//! Unit tests for the student records module.

//! In-memory adapters for student records.

mod student;

pub use student::InMemoryStudentRepository;

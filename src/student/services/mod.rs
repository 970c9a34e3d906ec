//! Application services for student record orchestration.

mod records;

pub use records::{
    CreateStudentRequest, StudentRecordService, StudentServiceError, StudentServiceResult,
    UpdateStudentRequest,
};

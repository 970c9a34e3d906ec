//! In-memory repository for student records.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::student::{
    domain::{Student, StudentId},
    ports::{StudentRepository, StudentRepositoryError, StudentRepositoryResult},
};

/// Thread-safe in-memory student repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStudentRepository {
    state: Arc<RwLock<InMemoryStudentState>>,
}

#[derive(Debug, Default)]
struct InMemoryStudentState {
    students: HashMap<StudentId, Student>,
    creation_order: Vec<StudentId>,
}

impl InMemoryStudentRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: &impl ToString) -> StudentRepositoryError {
    StudentRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn store(&self, student: &Student) -> StudentRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        if state.students.contains_key(&student.id()) {
            return Err(StudentRepositoryError::DuplicateStudent(student.id()));
        }

        state.creation_order.push(student.id());
        state.students.insert(student.id(), student.clone());
        Ok(())
    }

    async fn update(
        &self,
        student: &Student,
        expected_revision: u64,
    ) -> StudentRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;

        let stored = state
            .students
            .get_mut(&student.id())
            .ok_or(StudentRepositoryError::NotFound(student.id()))?;
        if stored.revision() != expected_revision {
            return Err(StudentRepositoryError::Conflict {
                id: student.id(),
                expected_revision,
            });
        }

        *stored = student.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: StudentId) -> StudentRepositoryResult<Option<Student>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        Ok(state.students.get(&id).cloned())
    }

    async fn list(&self) -> StudentRepositoryResult<Vec<Student>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        Ok(state
            .creation_order
            .iter()
            .filter_map(|id| state.students.get(id).cloned())
            .collect())
    }

    async fn delete(&self, id: StudentId) -> StudentRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        if state.students.remove(&id).is_none() {
            return Err(StudentRepositoryError::NotFound(id));
        }
        state.creation_order.retain(|existing| *existing != id);
        Ok(())
    }
}

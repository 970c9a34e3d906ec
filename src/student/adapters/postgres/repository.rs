//! `PostgreSQL` repository implementation for student record storage.

use super::{
    models::{NewStudentRow, StudentRow},
    schema::students,
};
use crate::student::{
    domain::{PersistedStudentData, ReviewStatus, Student, StudentId, StudentProfile},
    ports::{StudentRepository, StudentRepositoryError, StudentRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by student adapters.
pub type StudentPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed student repository.
#[derive(Debug, Clone)]
pub struct PostgresStudentRepository {
    pool: StudentPgPool,
}

impl PostgresStudentRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: StudentPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> StudentRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> StudentRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(StudentRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(StudentRepositoryError::persistence)?
    }
}

#[async_trait]
impl StudentRepository for PostgresStudentRepository {
    async fn store(&self, student: &Student) -> StudentRepositoryResult<()> {
        let student_id = student.id();
        let new_row = to_new_row(student)?;

        self.run_blocking(move |connection| {
            diesel::insert_into(students::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        StudentRepositoryError::DuplicateStudent(student_id)
                    }
                    _ => StudentRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(
        &self,
        student: &Student,
        expected_revision: u64,
    ) -> StudentRepositoryResult<()> {
        let student_id = student.id();
        let github_val = student.github().to_owned();
        let status_val = student.status().as_str().to_owned();
        let revision_val = to_column_revision(student.revision())?;
        let expected_val = to_column_revision(expected_revision)?;
        let updated_val = student.updated_at();

        self.run_blocking(move |connection| {
            let target = students::table
                .filter(students::id.eq(student_id.into_inner()))
                .filter(students::revision.eq(expected_val));
            let updated_count = diesel::update(target)
                .set((
                    students::github.eq(&github_val),
                    students::status.eq(&status_val),
                    students::revision.eq(revision_val),
                    students::updated_at.eq(updated_val),
                ))
                .execute(connection)
                .map_err(StudentRepositoryError::persistence)?;

            if updated_count == 0 {
                let exists = diesel::select(diesel::dsl::exists(
                    students::table.filter(students::id.eq(student_id.into_inner())),
                ))
                .get_result::<bool>(connection)
                .map_err(StudentRepositoryError::persistence)?;
                return Err(if exists {
                    StudentRepositoryError::Conflict {
                        id: student_id,
                        expected_revision,
                    }
                } else {
                    StudentRepositoryError::NotFound(student_id)
                });
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: StudentId) -> StudentRepositoryResult<Option<Student>> {
        self.run_blocking(move |connection| {
            let row = students::table
                .filter(students::id.eq(id.into_inner()))
                .select(StudentRow::as_select())
                .first::<StudentRow>(connection)
                .optional()
                .map_err(StudentRepositoryError::persistence)?;
            row.map(row_to_student).transpose()
        })
        .await
    }

    async fn list(&self) -> StudentRepositoryResult<Vec<Student>> {
        self.run_blocking(move |connection| {
            let rows = students::table
                .order(students::created_at.asc())
                .select(StudentRow::as_select())
                .load::<StudentRow>(connection)
                .map_err(StudentRepositoryError::persistence)?;
            rows.into_iter().map(row_to_student).collect()
        })
        .await
    }

    async fn delete(&self, id: StudentId) -> StudentRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted_count =
                diesel::delete(students::table.filter(students::id.eq(id.into_inner())))
                    .execute(connection)
                    .map_err(StudentRepositoryError::persistence)?;
            if deleted_count == 0 {
                return Err(StudentRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn to_column_revision(revision: u64) -> StudentRepositoryResult<i64> {
    i64::try_from(revision).map_err(StudentRepositoryError::persistence)
}

fn to_new_row(student: &Student) -> StudentRepositoryResult<NewStudentRow> {
    Ok(NewStudentRow {
        id: student.id().into_inner(),
        name: student.name().to_owned(),
        task: student.task().to_owned(),
        deadline: student.deadline().to_owned(),
        github: student.github().to_owned(),
        status: student.status().as_str().to_owned(),
        revision: to_column_revision(student.revision())?,
        created_at: student.created_at(),
        updated_at: student.updated_at(),
    })
}

fn row_to_student(row: StudentRow) -> StudentRepositoryResult<Student> {
    let StudentRow {
        id,
        name,
        task,
        deadline,
        github,
        status: persisted_status,
        revision: persisted_revision,
        created_at,
        updated_at,
    } = row;

    let profile =
        StudentProfile::new(name, task, deadline).map_err(StudentRepositoryError::persistence)?;
    let status = ReviewStatus::try_from(persisted_status.as_str())
        .map_err(StudentRepositoryError::persistence)?;
    let revision =
        u64::try_from(persisted_revision).map_err(StudentRepositoryError::persistence)?;

    Ok(Student::from_persisted(PersistedStudentData {
        id: StudentId::from_uuid(id),
        profile,
        github,
        status,
        revision,
        created_at,
        updated_at,
    }))
}

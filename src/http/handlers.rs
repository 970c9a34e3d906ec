//! Route handlers for students and the current-task announcement.

use super::{
    error::ApiError,
    response::{
        Acknowledgement, CreateStudentBody, CurrentTaskView, SetCurrentTaskBody,
        StudentEnvelope, StudentView, TaskEnvelope, UpdateStudentBody,
    },
    state::AppState,
};
use crate::announcement::ports::AnnouncementRepository;
use crate::error::ErrorKind;
use crate::student::{
    domain::StudentId,
    ports::StudentRepository,
    services::{CreateStudentRequest, UpdateStudentRequest},
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

type JsonBody<T> = Result<Json<T>, JsonRejection>;

/// Unparseable identifiers cannot name a stored record.
fn parse_student_id(raw: &str) -> Result<StudentId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::new(ErrorKind::NotFound, format!("student not found: {raw}")))
}

/// Handler: GET /health
pub async fn health() -> &'static str {
    "ok"
}

/// Handler: GET /api/students
pub async fn list_students<S, A>(
    State(state): State<AppState<S, A>>,
) -> Result<Json<Vec<StudentView>>, ApiError>
where
    S: StudentRepository + 'static,
    A: AnnouncementRepository + 'static,
{
    let students = state.students.list().await?;
    Ok(Json(students.iter().map(StudentView::from).collect()))
}

/// Handler: POST /api/students
pub async fn create_student<S, A>(
    State(state): State<AppState<S, A>>,
    payload: JsonBody<CreateStudentBody>,
) -> Result<Json<StudentEnvelope>, ApiError>
where
    S: StudentRepository + 'static,
    A: AnnouncementRepository + 'static,
{
    let Json(body) = payload?;
    let mut request = CreateStudentRequest::new(body.name, body.task, body.deadline);
    if let Some(github) = body.github {
        request = request.with_github(github);
    }
    let student = state.students.create(request).await?;
    Ok(Json(StudentEnvelope::from(&student)))
}

/// Handler: GET /api/students/{id}
pub async fn get_student<S, A>(
    State(state): State<AppState<S, A>>,
    Path(raw_id): Path<String>,
) -> Result<Json<StudentEnvelope>, ApiError>
where
    S: StudentRepository + 'static,
    A: AnnouncementRepository + 'static,
{
    let id = parse_student_id(&raw_id)?;
    let student = state.students.get_by_id(id).await?;
    Ok(Json(StudentEnvelope::from(&student)))
}

/// Handler: PATCH /api/students/{id}
pub async fn update_student<S, A>(
    State(state): State<AppState<S, A>>,
    Path(raw_id): Path<String>,
    payload: JsonBody<UpdateStudentBody>,
) -> Result<Json<StudentEnvelope>, ApiError>
where
    S: StudentRepository + 'static,
    A: AnnouncementRepository + 'static,
{
    let id = parse_student_id(&raw_id)?;
    let Json(body) = payload?;
    let mut request = UpdateStudentRequest::new(id);
    if let Some(github) = body.github {
        request = request.with_github(github);
    }
    if let Some(status) = body.status {
        request = request.with_status(status);
    }
    let student = state.students.update(request).await?;
    Ok(Json(StudentEnvelope::from(&student)))
}

/// Handler: DELETE /api/students/{id}
pub async fn delete_student<S, A>(
    State(state): State<AppState<S, A>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Acknowledgement>, ApiError>
where
    S: StudentRepository + 'static,
    A: AnnouncementRepository + 'static,
{
    let id = parse_student_id(&raw_id)?;
    state.students.delete(id).await?;
    Ok(Json(Acknowledgement::ok()))
}

/// Handler: GET /api/task
pub async fn current_task<S, A>(
    State(state): State<AppState<S, A>>,
) -> Result<Json<CurrentTaskView>, ApiError>
where
    S: StudentRepository + 'static,
    A: AnnouncementRepository + 'static,
{
    let current = state.announcements.current().await?;
    Ok(Json(CurrentTaskView::from(&current)))
}

/// Handler: PATCH /api/task
pub async fn set_current_task<S, A>(
    State(state): State<AppState<S, A>>,
    payload: JsonBody<SetCurrentTaskBody>,
) -> Result<Json<TaskEnvelope>, ApiError>
where
    S: StudentRepository + 'static,
    A: AnnouncementRepository + 'static,
{
    let Json(body) = payload?;
    let announcement = state.announcements.set(body.current_task).await?;
    Ok(Json(TaskEnvelope {
        success: true,
        task: CurrentTaskView::from(&announcement),
    }))
}

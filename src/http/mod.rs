//! JSON-over-HTTP boundary.
//!
//! Routes:
//!
//! - `GET /health`
//! - `GET /api/students`, `POST /api/students`
//! - `GET /api/students/{id}`, `PATCH /api/students/{id}`,
//!   `DELETE /api/students/{id}`
//! - `GET /api/task`, `PATCH /api/task`
//!
//! Business rejections answer `400`, unknown students `404`, and store
//! failures `503`, all with a `{"success": false, "code", "message"}` body.

mod error;
mod handlers;
pub mod response;
mod state;

pub use error::ApiError;
pub use state::AppState;

use crate::announcement::ports::AnnouncementRepository;
use crate::student::ports::StudentRepository;
use axum::{
    Router,
    http::{
        HeaderValue, Method,
        header::{AUTHORIZATION, CONTENT_TYPE, InvalidHeaderValue},
    },
    routing::get,
};
use tower_http::cors::CorsLayer;
use tracing::warn;

/// Builds a CORS layer admitting a single browser origin.
///
/// # Errors
///
/// Returns [`InvalidHeaderValue`] when `origin` is not a valid header value.
pub fn cors_layer(origin: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    let allowed = HeaderValue::from_str(origin)?;
    Ok(CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]))
}

/// Builds the application router.
///
/// CORS headers are only added when `allowed_origin` is set and valid.
pub fn router<S, A>(state: AppState<S, A>, allowed_origin: Option<&str>) -> Router
where
    S: StudentRepository + 'static,
    A: AnnouncementRepository + 'static,
{
    let app = Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/students",
            get(handlers::list_students::<S, A>).post(handlers::create_student::<S, A>),
        )
        .route(
            "/api/students/{id}",
            get(handlers::get_student::<S, A>)
                .patch(handlers::update_student::<S, A>)
                .delete(handlers::delete_student::<S, A>),
        )
        .route(
            "/api/task",
            get(handlers::current_task::<S, A>).patch(handlers::set_current_task::<S, A>),
        )
        .with_state(state);

    match allowed_origin.map(|origin| (origin, cors_layer(origin))) {
        Some((_, Ok(cors))) => app.layer(cors),
        Some((origin, Err(err))) => {
            warn!(origin, error = %err, "ignoring invalid CORS origin");
            app
        }
        None => app,
    }
}

pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analytics::handle_analytics;
use crate::records::handlers as records;
use crate::screening::handlers as screening;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Intake
        .route(
            "/api/v1/resumes",
            get(records::handle_list_resumes).post(records::handle_create_resume),
        )
        .route(
            "/api/v1/resumes/:id",
            get(records::handle_get_resume).delete(records::handle_delete_resume),
        )
        .route(
            "/api/v1/jobs",
            get(records::handle_list_jobs).post(records::handle_create_job),
        )
        .route(
            "/api/v1/jobs/:id",
            get(records::handle_get_job).delete(records::handle_delete_job),
        )
        // Screening
        .route("/api/v1/screen", post(screening::handle_screen))
        .route("/api/v1/screenings", get(screening::handle_list_screenings))
        .route(
            "/api/v1/screenings/:id",
            get(screening::handle_get_screening),
        )
        .route("/api/v1/analytics", get(handle_analytics))
        .with_state(state)
}

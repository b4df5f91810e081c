pub mod health;
pub mod notifications;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::assessment::handlers as assessment;
use crate::report::handlers as report;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Assessment flow
        .route("/api/v1/assessment", get(assessment::handle_get_assessment))
        .route("/api/v1/assessment/start", post(assessment::handle_start))
        .route(
            "/api/v1/assessment/access",
            get(assessment::handle_check_access),
        )
        .route(
            "/api/v1/assessment/rounds/:round/complete",
            post(assessment::handle_complete),
        )
        .route("/api/v1/assessment/advance", post(assessment::handle_advance))
        .route(
            "/api/v1/assessment/prompt/dismiss",
            post(assessment::handle_dismiss_prompt),
        )
        .route("/api/v1/assessment/cancel", post(assessment::handle_cancel))
        // Proctoring
        .route(
            "/api/v1/proctoring/focus-loss",
            post(assessment::handle_focus_loss),
        )
        .route("/api/v1/proctoring/camera", post(assessment::handle_camera))
        // Resume analysis
        .route(
            "/api/v1/resume",
            post(resume::handle_upload_resume)
                .get(resume::handle_get_resume)
                .layer(DefaultBodyLimit::max(upload_limit)),
        )
        // Report
        .route("/api/v1/report", get(report::handle_get_report))
        .route("/api/v1/notifications", get(notifications::drain_handler))
        .with_state(state)
}

//! Axum route handlers for the Assessment API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::assessment::flow::AccessCheck;
use crate::assessment::proctoring::ProctorStatus;
use crate::assessment::rounds::Round;
use crate::assessment::service::{AssessmentView, FocusLossOutcome, TransitionOutcome};
use crate::assessment::session::AssessmentMode;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct StartRequest {
    pub job_role: String,
    #[serde(default)]
    pub mode: AssessmentMode,
    /// Standalone only: where to send the candidate after starting.
    pub target_path: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AccessQuery {
    pub path: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct CompleteRequest {
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FocusLossRequest {
    pub round: Option<Round>,
}

#[derive(Debug, Deserialize)]
pub struct CameraRequest {
    pub granted: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/assessment
pub async fn handle_get_assessment(State(state): State<AppState>) -> Json<AssessmentView> {
    Json(state.assessment.view().await)
}

/// POST /api/v1/assessment/start
pub async fn handle_start(
    State(state): State<AppState>,
    Json(request): Json<StartRequest>,
) -> Result<Json<TransitionOutcome>, AppError> {
    let outcome = state
        .assessment
        .start(
            &request.job_role,
            request.mode,
            request.target_path.as_deref(),
        )
        .await?;
    Ok(Json(outcome))
}

/// GET /api/v1/assessment/access?path=/technical
///
/// Denial is a normal answer (`allowed: false` plus a redirect effect), not an error.
pub async fn handle_check_access(
    State(state): State<AppState>,
    Query(query): Query<AccessQuery>,
) -> Json<AccessCheck> {
    Json(state.assessment.check_access(&query.path).await)
}

/// POST /api/v1/assessment/rounds/:round/complete
///
/// Completing a round ahead of the current one in sequence mode is `FORBIDDEN`;
/// completing without an active session is `UNPROCESSABLE_ENTITY`.
pub async fn handle_complete(
    State(state): State<AppState>,
    Path(round): Path<String>,
    body: Option<Json<CompleteRequest>>,
) -> Result<Json<TransitionOutcome>, AppError> {
    let round = parse_round(&round)?;
    let request = body.map(|Json(r)| r).unwrap_or_default();
    let outcome = state
        .assessment
        .complete(round, request.suggestions)
        .await?;
    Ok(Json(outcome))
}

/// POST /api/v1/assessment/advance
pub async fn handle_advance(
    State(state): State<AppState>,
) -> Result<Json<TransitionOutcome>, AppError> {
    Ok(Json(state.assessment.advance().await?))
}

/// POST /api/v1/assessment/prompt/dismiss
pub async fn handle_dismiss_prompt(State(state): State<AppState>) -> Json<TransitionOutcome> {
    Json(state.assessment.dismiss_prompt().await)
}

/// POST /api/v1/assessment/cancel
pub async fn handle_cancel(State(state): State<AppState>) -> Json<TransitionOutcome> {
    Json(state.assessment.cancel().await)
}

/// POST /api/v1/proctoring/focus-loss
pub async fn handle_focus_loss(
    State(state): State<AppState>,
    body: Option<Json<FocusLossRequest>>,
) -> Json<FocusLossOutcome> {
    let request = body.map(|Json(r)| r).unwrap_or_default();
    Json(state.assessment.record_focus_loss(request.round).await)
}

/// POST /api/v1/proctoring/camera
pub async fn handle_camera(
    State(state): State<AppState>,
    Json(request): Json<CameraRequest>,
) -> Json<ProctorStatus> {
    Json(state.assessment.record_camera(request.granted).await)
}

fn parse_round(raw: &str) -> Result<Round, AppError> {
    raw.parse::<Round>()
        .map_err(|e| AppError::NotFound(e.to_string()))
}

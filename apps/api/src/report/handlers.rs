use axum::{extract::State, Json};
use serde::Serialize;

use crate::assessment::rounds::{Round, ROUNDS};
use crate::resume::handlers::StoredAnalysis;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RoundProgress {
    pub round: Round,
    pub label: &'static str,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub job_role: String,
    pub rounds: Vec<RoundProgress>,
    pub completed_count: usize,
    pub suggestions: Vec<String>,
    pub resume: Option<StoredAnalysis>,
}

/// GET /api/v1/report
pub async fn handle_get_report(State(state): State<AppState>) -> Json<ReportResponse> {
    let view = state.assessment.view().await;
    let session = view.session;

    let rounds: Vec<RoundProgress> = ROUNDS
        .into_iter()
        .map(|round| RoundProgress {
            round,
            label: round.label(),
            completed: session.is_completed(round),
        })
        .collect();

    Json(ReportResponse {
        job_role: session.job_role,
        completed_count: rounds.iter().filter(|r| r.completed).count(),
        rounds,
        suggestions: session.collected_suggestions,
        resume: state.latest_resume.read().await.clone(),
    })
}

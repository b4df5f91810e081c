//! Axum route handlers for the Resume API.

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::resume::persistence::save_analysis;
use crate::resume::scorer::ResumeAnalysis;
use crate::state::AppState;

/// Multipart field carrying the resume document.
const RESUME_FIELD: &str = "resume";

/// The most recent analysis plus upload metadata. Replaced, never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredAnalysis {
    pub file_name: String,
    pub analyzed_at: DateTime<Utc>,
    pub analysis: ResumeAnalysis,
}

#[derive(Debug, Default, Deserialize)]
pub struct UploadQuery {
    /// Also add gap suggestions to the assessment report.
    #[serde(default)]
    pub include_in_report: bool,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    #[serde(flatten)]
    pub stored: StoredAnalysis,
    pub suggestions_added: usize,
}

/// POST /api/v1/resume
///
/// Extracts text from the uploaded document and scores it against the skill
/// taxonomy. A document that cannot be read is a `DOCUMENT_PARSE_ERROR`; a
/// readable resume with no matching skills is a valid, all-gap analysis.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    Query(query): Query<UploadQuery>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or("resume").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;
        upload = Some((file_name, content_type, bytes));
        break;
    }

    let (file_name, content_type, bytes) = upload.ok_or_else(|| {
        AppError::Validation(format!("Missing '{RESUME_FIELD}' file field"))
    })?;
    if bytes.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }

    info!("Analyzing resume '{}' ({} bytes)", file_name, bytes.len());
    let text = state
        .extractor
        .extract_text(bytes, content_type.as_deref())
        .await?;
    let analysis = state.scorer.analyze(&text);
    info!(
        "Resume scored {}/100 ({} of {} skills found)",
        analysis.total_score,
        analysis.found_skills.len(),
        analysis.skills.len()
    );

    let suggestions_added = if query.include_in_report {
        state
            .assessment
            .record_suggestions(analysis.gap_suggestions())
            .await
    } else {
        0
    };

    let stored = StoredAnalysis {
        file_name,
        analyzed_at: Utc::now(),
        analysis,
    };
    if let Err(e) = save_analysis(state.store.as_ref(), &stored).await {
        warn!("Failed to persist resume analysis: {e}");
    }
    *state.latest_resume.write().await = Some(stored.clone());

    Ok(Json(UploadResponse {
        stored,
        suggestions_added,
    }))
}

/// GET /api/v1/resume
pub async fn handle_get_resume(
    State(state): State<AppState>,
) -> Result<Json<StoredAnalysis>, AppError> {
    state
        .latest_resume
        .read()
        .await
        .clone()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No resume has been analyzed yet".to_string()))
}

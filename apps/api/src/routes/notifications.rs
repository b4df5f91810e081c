use axum::{extract::State, Json};

use crate::notify::Notification;
use crate::state::AppState;

/// GET /api/v1/notifications
/// Drains pending notifications; each one is returned once.
pub async fn drain_handler(State(state): State<AppState>) -> Json<Vec<Notification>> {
    Json(state.notifications.drain())
}

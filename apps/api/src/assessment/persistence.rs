//! Persisted mirror of the assessment session.
//!
//! One key per field. Absent keys fall back to defaults (empty role means no
//! active session, missing index means 0); malformed values are logged and
//! treated as absent.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::assessment::rounds::{Round, ROUNDS};
use crate::assessment::session::{AssessmentMode, AssessmentSession};
use crate::store::{KeyValueStore, StoreError};

pub const JOB_ROLE_KEY: &str = "job_role";
pub const MODE_KEY: &str = "assessment_mode";
pub const ROUND_INDEX_KEY: &str = "current_round_index";
pub const COMPLETED_KEY: &str = "completed_rounds";
pub const SUGGESTIONS_KEY: &str = "collected_suggestions";

/// Writes every field of the session.
pub async fn save_session(
    store: &dyn KeyValueStore,
    session: &AssessmentSession,
) -> Result<(), StoreError> {
    let completed: Vec<&str> = session.completed_round_ids.iter().map(|r| r.id()).collect();

    store.set(JOB_ROLE_KEY, &session.job_role).await?;
    store.set(MODE_KEY, session.mode.as_str()).await?;
    store
        .set(ROUND_INDEX_KEY, &session.current_round_index.to_string())
        .await?;
    store.set(COMPLETED_KEY, &to_json_array(&completed)).await?;
    store
        .set(SUGGESTIONS_KEY, &to_json_array(&session.collected_suggestions))
        .await?;

    debug!(
        "Persisted session: role={:?} mode={} index={} completed={}",
        session.job_role,
        session.mode,
        session.current_round_index,
        completed.len()
    );
    Ok(())
}

/// Removes the session keys written by `save_session`. Collected suggestions are
/// kept; they outlive a cancelled session.
pub async fn clear_session(store: &dyn KeyValueStore) -> Result<(), StoreError> {
    for key in [JOB_ROLE_KEY, MODE_KEY, ROUND_INDEX_KEY, COMPLETED_KEY] {
        store.remove(key).await?;
    }
    Ok(())
}

pub async fn load_session(store: &dyn KeyValueStore) -> Result<AssessmentSession, StoreError> {
    let job_role = store.get(JOB_ROLE_KEY).await?.unwrap_or_default();

    let mode = match store.get(MODE_KEY).await? {
        Some(raw) => raw.parse::<AssessmentMode>().unwrap_or_else(|e| {
            warn!("Ignoring persisted mode: {e}");
            AssessmentMode::default()
        }),
        None => AssessmentMode::default(),
    };

    let current_round_index = match store.get(ROUND_INDEX_KEY).await? {
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(index) if index < ROUNDS.len() => index,
            Ok(index) => {
                warn!("Persisted round index {index} out of range, clamping");
                ROUNDS.len() - 1
            }
            Err(_) => {
                warn!("Ignoring malformed persisted round index: {raw:?}");
                0
            }
        },
        None => 0,
    };

    let completed_round_ids: BTreeSet<Round> = store
        .get(COMPLETED_KEY)
        .await?
        .map(|raw| from_json_array(COMPLETED_KEY, &raw))
        .unwrap_or_default()
        .into_iter()
        .filter_map(|id| match id.parse::<Round>() {
            Ok(round) => Some(round),
            Err(e) => {
                warn!("Dropping persisted completion: {e}");
                None
            }
        })
        .collect();

    let collected_suggestions = store
        .get(SUGGESTIONS_KEY)
        .await?
        .map(|raw| from_json_array(SUGGESTIONS_KEY, &raw))
        .unwrap_or_default();

    Ok(AssessmentSession {
        job_role,
        mode,
        current_round_index,
        completed_round_ids,
        collected_suggestions,
    })
}

fn to_json_array<T: AsRef<str>>(items: &[T]) -> String {
    let items: Vec<&str> = items.iter().map(|s| s.as_ref()).collect();
    serde_json::to_string(&items).unwrap_or_else(|_| "[]".to_string())
}

fn from_json_array(key: &str, raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        warn!("Ignoring malformed persisted value for '{key}': {e}");
        Vec::new()
    })
}

//! Persisted copy of the latest resume analysis, stored as one JSON value so the
//! report survives a restart.

use tracing::warn;

use crate::resume::handlers::StoredAnalysis;
use crate::store::{KeyValueStore, StoreError};

pub const RESUME_ANALYSIS_KEY: &str = "resume_analysis";

pub async fn save_analysis(
    store: &dyn KeyValueStore,
    stored: &StoredAnalysis,
) -> Result<(), StoreError> {
    let json = serde_json::to_string(stored)?;
    store.set(RESUME_ANALYSIS_KEY, &json).await
}

/// A malformed value is logged and treated as absent.
pub async fn load_analysis(store: &dyn KeyValueStore) -> Result<Option<StoredAnalysis>, StoreError> {
    let Some(raw) = store.get(RESUME_ANALYSIS_KEY).await? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(stored) => Ok(Some(stored)),
        Err(e) => {
            warn!("Ignoring malformed persisted resume analysis: {e}");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::resume::scorer::{KeywordResumeScorer, ResumeScorer};
    use crate::store::MemoryStore;

    fn sample() -> StoredAnalysis {
        StoredAnalysis {
            file_name: "cv.pdf".to_string(),
            analyzed_at: Utc::now(),
            analysis: KeywordResumeScorer::default().analyze("React and PostgreSQL"),
        }
    }

    #[tokio::test]
    async fn test_saved_analysis_is_restored() {
        let store = MemoryStore::new();
        let stored = sample();
        save_analysis(&store, &stored).await.unwrap();
        assert_eq!(load_analysis(&store).await.unwrap(), Some(stored));
    }

    #[tokio::test]
    async fn test_missing_analysis_loads_none() {
        let store = MemoryStore::new();
        assert_eq!(load_analysis(&store).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_malformed_analysis_is_ignored() {
        let store = MemoryStore::new();
        store.set(RESUME_ANALYSIS_KEY, "{not json").await.unwrap();
        assert_eq!(load_analysis(&store).await.unwrap(), None);
    }
}

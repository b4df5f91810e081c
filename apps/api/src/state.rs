use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::assessment::flow::FlowSettings;
use crate::assessment::service::AssessmentService;
use crate::config::Config;
use crate::notify::NotificationLog;
use crate::resume::extract::{DocumentExtractor, PdfTextExtractor};
use crate::resume::handlers::StoredAnalysis;
use crate::resume::persistence::load_analysis;
use crate::resume::scorer::{KeywordResumeScorer, ResumeScorer};
use crate::store::{KeyValueStore, StoreError};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// The single live assessment; owns the flow, its persisted mirror and the countdown.
    pub assessment: Arc<AssessmentService>,
    /// Pluggable resume scorer. Default: KeywordResumeScorer.
    pub scorer: Arc<dyn ResumeScorer>,
    pub extractor: Arc<dyn DocumentExtractor>,
    pub store: Arc<dyn KeyValueStore>,
    /// Latest resume analysis; superseded by each upload and mirrored to `store`.
    pub latest_resume: Arc<RwLock<Option<StoredAnalysis>>>,
    pub notifications: Arc<NotificationLog>,
}

impl AppState {
    /// Wires the default collaborators and restores the persisted session and
    /// resume analysis from `store`.
    pub async fn build(config: Config, store: Arc<dyn KeyValueStore>) -> Result<Self, StoreError> {
        let notifications = Arc::new(NotificationLog::new());
        let latest_resume = load_analysis(store.as_ref()).await?;
        let assessment = AssessmentService::load(
            Arc::clone(&store),
            notifications.clone(),
            FlowSettings::from(&config),
            config.focus_loss_threshold,
        )
        .await?;

        Ok(Self {
            assessment,
            scorer: Arc::new(KeywordResumeScorer::default()),
            extractor: Arc::new(PdfTextExtractor::new(Duration::from_secs(
                config.parse_timeout_secs,
            ))),
            store,
            latest_resume: Arc::new(RwLock::new(latest_resume)),
            notifications,
            config,
        })
    }
}

//! Owns the live `AssessmentFlow` and applies the effects its transitions return.
//!
//! Every transition holds the flow lock from the state change through effect
//! application and persistence, so transitions (including countdown ticks) are
//! serialized. Effect application is synchronous; the countdown and delayed
//! navigations run as spawned Tokio tasks.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::assessment::flow::{
    AccessCheck, AssessmentFlow, CompletionPrompt, Effect, FlowError, FlowSettings, Tick,
};
use crate::assessment::persistence::{clear_session, load_session, save_session};
use crate::assessment::proctoring::{ProctorMonitor, ProctorStatus, VIOLATION_SUGGESTIONS};
use crate::assessment::rounds::Round;
use crate::assessment::session::{AssessmentMode, AssessmentSession};
use crate::notify::{NotificationSink, Severity};
use crate::store::{KeyValueStore, StoreError};

/// Snapshot returned to clients after every call.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentView {
    pub session: AssessmentSession,
    /// Round the sequence currently requires; `None` without an active sequence session.
    pub current_round: Option<Round>,
    pub prompt: Option<CompletionPrompt>,
    pub staged_next: Option<Round>,
    pub last_navigation: Option<String>,
    pub proctoring: ProctorStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransitionOutcome {
    pub effects: Vec<Effect>,
    pub assessment: AssessmentView,
}

#[derive(Debug, Clone, Serialize)]
pub struct FocusLossOutcome {
    pub status: ProctorStatus,
    /// Present when the event forced the round to complete.
    pub forced_completion: Option<TransitionOutcome>,
}

pub struct AssessmentService {
    flow: tokio::sync::Mutex<AssessmentFlow>,
    proctor: Mutex<ProctorMonitor>,
    store: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn NotificationSink>,
    last_navigation: Arc<Mutex<Option<String>>>,
    countdown: Mutex<Option<JoinHandle<()>>>,
    /// Pending delayed navigation (the report redirect after the final round).
    redirect: Mutex<Option<JoinHandle<()>>>,
}

impl AssessmentService {
    /// Restores the session mirrored in `store` and builds the service around it.
    pub async fn load(
        store: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn NotificationSink>,
        settings: FlowSettings,
        focus_loss_threshold: u32,
    ) -> Result<Arc<Self>, StoreError> {
        let session = load_session(store.as_ref()).await?;
        if session.is_active() {
            info!(
                "Restored assessment for '{}' ({} mode, round index {})",
                session.job_role, session.mode, session.current_round_index
            );
        }

        Ok(Arc::new(Self {
            flow: tokio::sync::Mutex::new(AssessmentFlow::restore(session, settings)),
            proctor: Mutex::new(ProctorMonitor::new(focus_loss_threshold)),
            store,
            notifier,
            last_navigation: Arc::new(Mutex::new(None)),
            countdown: Mutex::new(None),
            redirect: Mutex::new(None),
        }))
    }

    pub async fn view(&self) -> AssessmentView {
        let flow = self.flow.lock().await;
        self.view_of(&flow)
    }

    pub async fn start(
        self: &Arc<Self>,
        role: &str,
        mode: AssessmentMode,
        target_path: Option<&str>,
    ) -> Result<TransitionOutcome, FlowError> {
        let mut flow = self.flow.lock().await;
        let effects = flow.start(role, mode, target_path)?;
        self.stop_redirect();
        locked(&self.proctor).reset();
        info!("Assessment started: role='{}' mode={mode}", flow.session().job_role);
        Ok(self.finish(&flow, effects).await)
    }

    pub async fn check_access(self: &Arc<Self>, path: &str) -> AccessCheck {
        let flow = self.flow.lock().await;
        let check = flow.check_access(path);
        if !check.allowed {
            debug!("Access to '{path}' denied");
        }
        self.apply(&check.effects);
        check
    }

    pub async fn complete(
        self: &Arc<Self>,
        round: Round,
        suggestions: Vec<String>,
    ) -> Result<TransitionOutcome, FlowError> {
        let mut flow = self.flow.lock().await;
        let effects = flow.complete_step(round, suggestions)?;
        locked(&self.proctor).reset();
        info!("Round completed: {}", round.id());
        Ok(self.finish(&flow, effects).await)
    }

    /// Enters the staged round ("skip timer" or a manual continue after review).
    pub async fn advance(self: &Arc<Self>) -> Result<TransitionOutcome, FlowError> {
        let mut flow = self.flow.lock().await;
        let effects = flow.advance()?;
        locked(&self.proctor).reset();
        info!(
            "Advanced to round index {}",
            flow.session().current_round_index
        );
        Ok(self.finish(&flow, effects).await)
    }

    pub async fn dismiss_prompt(self: &Arc<Self>) -> TransitionOutcome {
        let mut flow = self.flow.lock().await;
        let effects = flow.dismiss_prompt();
        self.finish(&flow, effects).await
    }

    pub async fn cancel(self: &Arc<Self>) -> TransitionOutcome {
        let mut flow = self.flow.lock().await;
        let effects = flow.cancel();
        self.stop_redirect();
        locked(&self.proctor).reset();
        info!("Assessment cancelled");

        self.apply(&effects);
        if let Err(e) = clear_session(self.store.as_ref()).await {
            warn!("Failed to clear persisted assessment: {e}");
        }
        TransitionOutcome {
            effects,
            assessment: self.view_of(&flow),
        }
    }

    /// Adds externally produced suggestions to the report. Returns how many were new.
    pub async fn record_suggestions(&self, suggestions: Vec<String>) -> usize {
        let mut flow = self.flow.lock().await;
        let added = flow.record_suggestions(suggestions);
        if added > 0 {
            self.persist(flow.session()).await;
        }
        added
    }

    /// Counts a focus loss. Reaching the threshold force-completes the round in
    /// progress: the current round in sequence mode, otherwise `round` (falling
    /// back to the current round). Without an active session nothing is submitted.
    pub async fn record_focus_loss(self: &Arc<Self>, round: Option<Round>) -> FocusLossOutcome {
        let mut flow = self.flow.lock().await;
        let status = locked(&self.proctor).record_focus_loss();

        if !status.violation {
            self.notifier.notify(
                &format!(
                    "Focus lost ({}/{}). The round ends automatically after {} focus losses.",
                    status.focus_losses, status.threshold, status.threshold
                ),
                Severity::Warning,
                None,
            );
            return FocusLossOutcome {
                status,
                forced_completion: None,
            };
        }

        let session = flow.session();
        let round = match session.mode {
            AssessmentMode::Sequence => session.current_round(),
            AssessmentMode::Standalone => round.unwrap_or_else(|| session.current_round()),
        };

        let suggestions = VIOLATION_SUGGESTIONS.iter().map(|s| s.to_string()).collect();
        let effects = match flow.complete_step(round, suggestions) {
            Ok(effects) => effects,
            Err(e) => {
                debug!("Focus-loss threshold reached with nothing to submit: {e}");
                return FocusLossOutcome {
                    status,
                    forced_completion: None,
                };
            }
        };

        warn!(
            "Focus-loss threshold reached, force-completed {}",
            round.id()
        );
        self.notifier.notify(
            &format!(
                "{} submitted automatically: too many focus losses.",
                round.label()
            ),
            Severity::Error,
            None,
        );
        let outcome = self.finish(&flow, effects).await;
        FocusLossOutcome {
            status,
            forced_completion: Some(outcome),
        }
    }

    /// Records the camera permission result. A denial is reported but never blocks the round.
    pub async fn record_camera(&self, granted: bool) -> ProctorStatus {
        let _flow = self.flow.lock().await;
        let mut proctor = locked(&self.proctor);
        proctor.record_camera(granted);
        if granted {
            debug!("Camera access granted");
        } else {
            self.notifier.notify(
                "Camera access denied. Proctoring will continue without video.",
                Severity::Warning,
                None,
            );
        }
        proctor.status()
    }

    /// Applies effects, persists the session and builds the response. Called with
    /// the flow lock held.
    async fn finish(self: &Arc<Self>, flow: &AssessmentFlow, effects: Vec<Effect>) -> TransitionOutcome {
        self.apply(&effects);
        self.persist(flow.session()).await;
        TransitionOutcome {
            effects,
            assessment: self.view_of(flow),
        }
    }

    async fn persist(&self, session: &AssessmentSession) {
        // The in-memory session stays authoritative; a failed write only leaves
        // the mirror one step behind.
        if let Err(e) = save_session(self.store.as_ref(), session).await {
            warn!("Failed to persist assessment session: {e}");
        }
    }

    fn apply(self: &Arc<Self>, effects: &[Effect]) {
        for effect in effects {
            match effect {
                Effect::Notify {
                    message,
                    severity,
                    duration_ms,
                } => self.notifier.notify(message, *severity, *duration_ms),
                Effect::Navigate { path } => {
                    self.stop_redirect();
                    *locked(&self.last_navigation) = Some(path.clone());
                }
                Effect::NavigateAfter { path, delay_ms } => {
                    self.stop_redirect();
                    let target = Arc::clone(&self.last_navigation);
                    let path = path.clone();
                    let delay = Duration::from_millis(*delay_ms);
                    let handle = tokio::spawn(async move {
                        tokio::time::sleep(delay).await;
                        *locked(&target) = Some(path);
                    });
                    *locked(&self.redirect) = Some(handle);
                }
                Effect::OpenPrompt { prompt } => {
                    self.stop_countdown();
                    if prompt.seconds_remaining.is_some() {
                        let handle = tokio::spawn(run_countdown(Arc::clone(self)));
                        *locked(&self.countdown) = Some(handle);
                    }
                }
                Effect::ClosePrompt => self.stop_countdown(),
            }
        }
    }

    fn stop_countdown(&self) {
        if let Some(handle) = locked(&self.countdown).take() {
            handle.abort();
        }
    }

    fn stop_redirect(&self) {
        if let Some(handle) = locked(&self.redirect).take() {
            handle.abort();
        }
    }

    fn view_of(&self, flow: &AssessmentFlow) -> AssessmentView {
        let session = flow.session().clone();
        let current_round = (session.is_active() && session.mode == AssessmentMode::Sequence)
            .then(|| session.current_round());
        AssessmentView {
            current_round,
            prompt: flow.prompt().cloned(),
            staged_next: flow.staged_next(),
            last_navigation: locked(&self.last_navigation).clone(),
            proctoring: locked(&self.proctor).status(),
            session,
        }
    }
}

/// Ticks the open prompt once per second until it advances or closes.
async fn run_countdown(service: Arc<AssessmentService>) {
    let mut interval = tokio::time::interval(Duration::from_secs(1));
    interval.tick().await; // first tick completes immediately

    loop {
        interval.tick().await;
        let mut flow = service.flow.lock().await;
        match flow.tick() {
            Tick::Counting(remaining) => debug!("Auto-advance in {remaining}s"),
            Tick::Idle => break,
            Tick::Advanced(effects) => {
                // Detach before applying so the ClosePrompt effect does not abort this task.
                drop(locked(&service.countdown).take());
                locked(&service.proctor).reset();
                info!(
                    "Countdown elapsed, advanced to round index {}",
                    flow.session().current_round_index
                );
                service.finish(&flow, effects).await;
                break;
            }
        }
    }
}

fn locked<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

//! Assessment progression state machine.
//!
//! Pure: every transition mutates the in-memory session and returns the effects
//! the caller must apply (notifications, navigation, prompt changes). Persisting
//! the session is a separate step owned by `AssessmentService`.
//!
//! Sequence mode walks `ROUNDS` in order and gates access by position.
//! Standalone mode allows any round directly and never stages a next round.

use serde::Serialize;
use thiserror::Error;

use crate::assessment::rounds::{Round, ROUNDS};
use crate::assessment::session::{AssessmentMode, AssessmentSession};
use crate::config::Config;
use crate::notify::Severity;

/// Navigation target for the final report view.
pub const REPORT_PATH: &str = "/report";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowSettings {
    pub countdown_secs: u32,
    pub report_redirect_delay_ms: u64,
}

impl Default for FlowSettings {
    fn default() -> Self {
        Self {
            countdown_secs: 30,
            report_redirect_delay_ms: 3000,
        }
    }
}

impl From<&Config> for FlowSettings {
    fn from(config: &Config) -> Self {
        Self {
            countdown_secs: config.advance_countdown_secs.max(1),
            report_redirect_delay_ms: config.report_redirect_delay_ms,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("A job role is required to start an assessment")]
    EmptyRole,

    #[error("No next round is staged; complete the current round first")]
    NothingStaged,

    #[error("No assessment is in progress")]
    NoActiveSession,

    #[error("{round} is locked; complete the {required} first")]
    RoundLocked { round: Round, required: Round },
}

/// The "round complete" prompt. `next` and `seconds_remaining` are set only in
/// sequence mode; standalone completion shows a plain acknowledgment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionPrompt {
    pub completed: Round,
    pub next: Option<Round>,
    pub seconds_remaining: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    Notify {
        message: String,
        severity: Severity,
        duration_ms: Option<u64>,
    },
    Navigate {
        path: String,
    },
    NavigateAfter {
        path: String,
        delay_ms: u64,
    },
    OpenPrompt {
        prompt: CompletionPrompt,
    },
    ClosePrompt,
}

impl Effect {
    fn notify(message: impl Into<String>, severity: Severity) -> Self {
        Effect::Notify {
            message: message.into(),
            severity,
            duration_ms: None,
        }
    }

    fn navigate(path: &str) -> Self {
        Effect::Navigate {
            path: path.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessCheck {
    pub allowed: bool,
    /// Round the candidate is redirected to when access is denied.
    pub required: Option<Round>,
    pub effects: Vec<Effect>,
}

/// Result of one countdown second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    /// No countdown is running.
    Idle,
    Counting(u32),
    /// The countdown reached zero and the staged round was entered.
    Advanced(Vec<Effect>),
}

#[derive(Debug, Clone)]
pub struct AssessmentFlow {
    session: AssessmentSession,
    settings: FlowSettings,
    staged_next: Option<Round>,
    prompt: Option<CompletionPrompt>,
}

impl AssessmentFlow {
    pub fn new(settings: FlowSettings) -> Self {
        Self::restore(AssessmentSession::default(), settings)
    }

    /// Rebuilds the flow from a persisted session. Prompts and staged rounds are
    /// not persisted, so a restored flow starts with neither.
    pub fn restore(session: AssessmentSession, settings: FlowSettings) -> Self {
        Self {
            session,
            settings,
            staged_next: None,
            prompt: None,
        }
    }

    pub fn session(&self) -> &AssessmentSession {
        &self.session
    }

    pub fn prompt(&self) -> Option<&CompletionPrompt> {
        self.prompt.as_ref()
    }

    pub fn staged_next(&self) -> Option<Round> {
        self.staged_next
    }

    pub fn start(
        &mut self,
        role: &str,
        mode: AssessmentMode,
        target_path: Option<&str>,
    ) -> Result<Vec<Effect>, FlowError> {
        let role = role.trim();
        if role.is_empty() {
            return Err(FlowError::EmptyRole);
        }

        let mut effects = self.close_prompt();
        self.staged_next = None;
        self.session.job_role = role.to_string();
        self.session.mode = mode;

        effects.push(Effect::notify(
            format!("Assessment started for {role} ({mode} mode)"),
            Severity::Success,
        ));

        match mode {
            AssessmentMode::Sequence => {
                self.session.current_round_index = 0;
                effects.push(Effect::navigate(ROUNDS[0].path()));
            }
            AssessmentMode::Standalone => {
                if let Some(path) = target_path.map(str::trim).filter(|p| !p.is_empty()) {
                    effects.push(Effect::navigate(path));
                }
            }
        }

        Ok(effects)
    }

    /// Decides whether `path` may be shown. Paths that are not rounds are never
    /// restricted; rounds are gated only by an active sequence-mode session.
    pub fn check_access(&self, path: &str) -> AccessCheck {
        let allowed = AccessCheck {
            allowed: true,
            required: None,
            effects: vec![],
        };

        let Some(round) = Round::from_path(path) else {
            return allowed;
        };
        if !self.session.is_active() || self.session.mode == AssessmentMode::Standalone {
            return allowed;
        }
        if round.ordinal() <= self.session.current_round_index {
            return allowed;
        }

        let required = self.session.current_round();
        AccessCheck {
            allowed: false,
            required: Some(required),
            effects: vec![
                Effect::notify(
                    format!(
                        "Complete the {} first. Rounds must be taken in order.",
                        required.label()
                    ),
                    Severity::Error,
                ),
                Effect::navigate(required.path()),
            ],
        }
    }

    /// Records a finished round. Suggestions are collected only the first time a
    /// round completes; the prompt/notification branch runs on every call.
    ///
    /// Requires an active session. In sequence mode only the current round or an
    /// earlier one may be completed, and only the current round stages the next.
    pub fn complete_step(
        &mut self,
        round: Round,
        suggestions: Vec<String>,
    ) -> Result<Vec<Effect>, FlowError> {
        if !self.session.is_active() {
            return Err(FlowError::NoActiveSession);
        }
        let index = self.session.current_round_index;
        if self.session.mode == AssessmentMode::Sequence && round.ordinal() > index {
            return Err(FlowError::RoundLocked {
                round,
                required: self.session.current_round(),
            });
        }

        if self.session.completed_round_ids.insert(round) {
            self.session.collect_suggestions(suggestions);
        }

        let mut effects = Vec::new();
        match (self.session.mode, round.next()) {
            (AssessmentMode::Sequence, Some(_)) if round.ordinal() < index => {
                // Revisited round: bookkeeping only, the sequence position is unchanged.
                effects.push(Effect::notify(
                    format!(
                        "{} was already passed. Continue with the {}.",
                        round.label(),
                        self.session.current_round().label()
                    ),
                    Severity::Info,
                ));
            }
            (AssessmentMode::Sequence, Some(next)) => {
                self.staged_next = Some(next);
                let prompt = CompletionPrompt {
                    completed: round,
                    next: Some(next),
                    seconds_remaining: Some(self.settings.countdown_secs),
                };
                self.prompt = Some(prompt.clone());
                effects.push(Effect::OpenPrompt { prompt });
            }
            (AssessmentMode::Standalone, _) => {
                self.staged_next = None;
                effects.push(Effect::notify(
                    format!("{} completed!", round.label()),
                    Severity::Success,
                ));
                let prompt = CompletionPrompt {
                    completed: round,
                    next: None,
                    seconds_remaining: None,
                };
                self.prompt = Some(prompt.clone());
                effects.push(Effect::OpenPrompt { prompt });
            }
            (AssessmentMode::Sequence, None) => {
                effects.extend(self.close_prompt());
                self.staged_next = None;
                effects.push(Effect::Notify {
                    message: "Congratulations! You have completed the entire assessment."
                        .to_string(),
                    severity: Severity::Success,
                    duration_ms: Some(5000),
                });
                effects.push(Effect::NavigateAfter {
                    path: REPORT_PATH.to_string(),
                    delay_ms: self.settings.report_redirect_delay_ms,
                });
            }
        }

        Ok(effects)
    }

    /// Enters the round staged by `complete_step`: one step forward, never past
    /// the last round.
    pub fn advance(&mut self) -> Result<Vec<Effect>, FlowError> {
        let next = self.staged_next.take().ok_or(FlowError::NothingStaged)?;
        let mut effects = self.close_prompt();
        self.session.current_round_index =
            (self.session.current_round_index + 1).min(ROUNDS.len() - 1);
        effects.push(Effect::navigate(next.path()));
        Ok(effects)
    }

    /// "Review results": closes the prompt but keeps the next round staged so the
    /// candidate can continue manually later.
    pub fn dismiss_prompt(&mut self) -> Vec<Effect> {
        self.close_prompt()
    }

    pub fn tick(&mut self) -> Tick {
        let remaining = match self
            .prompt
            .as_mut()
            .and_then(|p| p.seconds_remaining.as_mut())
        {
            Some(seconds) => {
                *seconds = seconds.saturating_sub(1);
                *seconds
            }
            None => return Tick::Idle,
        };

        if remaining > 0 {
            return Tick::Counting(remaining);
        }

        match self.advance() {
            Ok(effects) => Tick::Advanced(effects),
            Err(_) => {
                self.prompt = None;
                Tick::Idle
            }
        }
    }

    /// Ends the session. Collected suggestions survive so the report still shows them.
    pub fn cancel(&mut self) -> Vec<Effect> {
        let mut effects = self.close_prompt();
        self.staged_next = None;

        let collected_suggestions = std::mem::take(&mut self.session.collected_suggestions);
        self.session = AssessmentSession {
            collected_suggestions,
            ..AssessmentSession::default()
        };

        effects.push(Effect::notify(
            "Assessment cancelled. Your progress has been reset.",
            Severity::Info,
        ));
        effects.push(Effect::navigate(REPORT_PATH));
        effects
    }

    /// Adds suggestions produced outside the rounds (e.g. resume gaps) to the report.
    pub fn record_suggestions(&mut self, suggestions: Vec<String>) -> usize {
        self.session.collect_suggestions(suggestions)
    }

    fn close_prompt(&mut self) -> Vec<Effect> {
        match self.prompt.take() {
            Some(_) => vec![Effect::ClosePrompt],
            None => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(mode: AssessmentMode) -> AssessmentFlow {
        let mut flow = AssessmentFlow::new(FlowSettings::default());
        flow.start("Frontend Dev", mode, None).unwrap();
        flow
    }

    fn navigations(effects: &[Effect]) -> Vec<&str> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Navigate { path } => Some(path.as_str()),
                _ => None,
            })
            .collect()
    }

    fn notifications(effects: &[Effect]) -> Vec<(&str, Severity)> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Notify {
                    message, severity, ..
                } => Some((message.as_str(), *severity)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_start_rejects_empty_role_without_state_change() {
        let mut flow = AssessmentFlow::new(FlowSettings::default());
        assert_eq!(
            flow.start("   ", AssessmentMode::Sequence, None),
            Err(FlowError::EmptyRole)
        );
        assert_eq!(flow.session(), &AssessmentSession::default());
    }

    #[test]
    fn test_start_sequence_directs_to_first_round() {
        let mut flow = AssessmentFlow::new(FlowSettings::default());
        let effects = flow
            .start("Frontend Dev", AssessmentMode::Sequence, None)
            .unwrap();

        assert_eq!(flow.session().job_role, "Frontend Dev");
        assert_eq!(flow.session().current_round_index, 0);
        assert_eq!(navigations(&effects), vec!["/aptitude"]);
        assert_eq!(notifications(&effects)[0].1, Severity::Success);
    }

    #[test]
    fn test_start_standalone_navigates_to_target_only_when_given() {
        let mut flow = AssessmentFlow::new(FlowSettings::default());
        let effects = flow
            .start("Data Analyst", AssessmentMode::Standalone, Some("/hr"))
            .unwrap();
        assert_eq!(navigations(&effects), vec!["/hr"]);

        let effects = flow
            .start("Data Analyst", AssessmentMode::Standalone, None)
            .unwrap();
        assert!(navigations(&effects).is_empty());
        assert_eq!(flow.session().mode, AssessmentMode::Standalone);
    }

    #[test]
    fn test_sequence_denies_later_round_and_redirects() {
        let flow = started(AssessmentMode::Sequence);
        let check = flow.check_access("/technical");

        assert!(!check.allowed);
        assert_eq!(check.required, Some(Round::Aptitude));
        assert_eq!(navigations(&check.effects), vec!["/aptitude"]);
        let notes = notifications(&check.effects);
        assert_eq!(notes[0].1, Severity::Error);
        assert!(notes[0].0.contains("Aptitude Round"));
    }

    #[test]
    fn test_non_round_paths_are_always_allowed() {
        let mut flow = AssessmentFlow::new(FlowSettings::default());
        assert!(flow.check_access("/settings").allowed);
        flow.start("SRE", AssessmentMode::Sequence, None).unwrap();
        assert!(flow.check_access("/settings").allowed);
        flow.complete_step(Round::Aptitude, vec![]).unwrap();
        assert!(flow.check_access("/settings").allowed);
    }

    #[test]
    fn test_access_gating_formula_holds_for_every_state() {
        for mode in [AssessmentMode::Sequence, AssessmentMode::Standalone] {
            for index in 0..ROUNDS.len() {
                for active in [false, true] {
                    let session = AssessmentSession {
                        job_role: if active { "QA".to_string() } else { String::new() },
                        mode,
                        current_round_index: index,
                        ..AssessmentSession::default()
                    };
                    let flow = AssessmentFlow::restore(session, FlowSettings::default());
                    for round in ROUNDS {
                        let expected = !active
                            || mode == AssessmentMode::Standalone
                            || round.ordinal() <= index;
                        assert_eq!(
                            flow.check_access(round.path()).allowed,
                            expected,
                            "mode={mode} index={index} active={active} round={round:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_complete_step_opens_prompt_with_countdown() {
        let mut flow = started(AssessmentMode::Sequence);
        let effects = flow
            .complete_step(Round::Aptitude, vec!["Review X".to_string()])
            .unwrap();

        assert!(flow.session().is_completed(Round::Aptitude));
        assert_eq!(flow.session().collected_suggestions, vec!["Review X"]);
        assert_eq!(flow.staged_next(), Some(Round::Technical));

        let expected = CompletionPrompt {
            completed: Round::Aptitude,
            next: Some(Round::Technical),
            seconds_remaining: Some(30),
        };
        assert_eq!(flow.prompt(), Some(&expected));
        assert_eq!(effects, vec![Effect::OpenPrompt { prompt: expected }]);
    }

    #[test]
    fn test_complete_step_is_idempotent() {
        let mut flow = started(AssessmentMode::Sequence);
        flow.complete_step(Round::Aptitude, vec!["Review X".to_string()]).unwrap();
        flow.complete_step(Round::Aptitude, vec!["Review Y".to_string()]).unwrap();

        assert_eq!(flow.session().completed_round_ids.len(), 1);
        assert_eq!(flow.session().collected_suggestions, vec!["Review X"]);
    }

    #[test]
    fn test_countdown_reaching_zero_advances() {
        let mut flow = started(AssessmentMode::Sequence);
        flow.complete_step(Round::Aptitude, vec![]).unwrap();

        for expected in (1..30).rev() {
            assert_eq!(flow.tick(), Tick::Counting(expected));
        }
        match flow.tick() {
            Tick::Advanced(effects) => {
                assert_eq!(navigations(&effects), vec!["/technical"]);
                assert!(effects.contains(&Effect::ClosePrompt));
            }
            other => panic!("expected advance, got {other:?}"),
        }

        assert_eq!(flow.session().current_round_index, 1);
        assert!(flow.prompt().is_none());
        assert_eq!(flow.tick(), Tick::Idle);
    }

    #[test]
    fn test_countdown_resets_when_prompt_reopens() {
        let mut flow = started(AssessmentMode::Sequence);
        flow.complete_step(Round::Aptitude, vec![]).unwrap();
        flow.tick();
        flow.tick();
        flow.advance().unwrap();

        flow.complete_step(Round::Technical, vec![]).unwrap();
        assert_eq!(flow.prompt().and_then(|p| p.seconds_remaining), Some(30));
    }

    #[test]
    fn test_skip_timer_advances_immediately() {
        let mut flow = started(AssessmentMode::Sequence);
        flow.complete_step(Round::Aptitude, vec![]).unwrap();
        let effects = flow.advance().unwrap();

        assert_eq!(navigations(&effects), vec!["/technical"]);
        assert_eq!(flow.session().current_round_index, 1);
        assert!(flow.check_access("/technical").allowed);
        assert!(!flow.check_access("/group-discussion").allowed);
    }

    #[test]
    fn test_advance_without_staged_round_fails() {
        let mut flow = started(AssessmentMode::Sequence);
        assert_eq!(flow.advance(), Err(FlowError::NothingStaged));
        assert_eq!(flow.session().current_round_index, 0);
    }

    #[test]
    fn test_dismiss_parks_staged_round() {
        let mut flow = started(AssessmentMode::Sequence);
        flow.complete_step(Round::Aptitude, vec![]).unwrap();

        assert_eq!(flow.dismiss_prompt(), vec![Effect::ClosePrompt]);
        assert!(flow.prompt().is_none());
        assert_eq!(flow.tick(), Tick::Idle);
        assert_eq!(flow.session().current_round_index, 0);

        flow.advance().unwrap();
        assert_eq!(flow.session().current_round_index, 1);
    }

    #[test]
    fn test_standalone_completion_acknowledges_without_staging() {
        let mut flow = started(AssessmentMode::Standalone);
        let effects = flow.complete_step(Round::Technical, vec![]).unwrap();

        assert_eq!(flow.staged_next(), None);
        let prompt = flow.prompt().unwrap();
        assert_eq!(prompt.next, None);
        assert_eq!(prompt.seconds_remaining, None);
        assert_eq!(notifications(&effects)[0].1, Severity::Success);
        assert_eq!(flow.tick(), Tick::Idle);
        assert_eq!(flow.advance(), Err(FlowError::NothingStaged));
    }

    #[test]
    fn test_last_round_in_sequence_redirects_to_report() {
        let mut flow = started(AssessmentMode::Sequence);
        for round in &ROUNDS[..3] {
            flow.complete_step(*round, vec![]).unwrap();
            flow.advance().unwrap();
        }
        assert_eq!(flow.session().current_round_index, 3);

        let effects = flow.complete_step(Round::Hr, vec![]).unwrap();
        assert!(flow.prompt().is_none());
        assert_eq!(flow.staged_next(), None);
        assert!(notifications(&effects)[0].0.contains("entire assessment"));
        assert!(effects.contains(&Effect::NavigateAfter {
            path: REPORT_PATH.to_string(),
            delay_ms: 3000,
        }));
        assert_eq!(flow.session().current_round_index, 3);
    }

    #[test]
    fn test_index_is_monotonic_and_bounded() {
        let mut flow = started(AssessmentMode::Sequence);
        let order = [
            Round::Aptitude,
            Round::Aptitude,
            Round::Technical,
            Round::Aptitude,
            Round::GroupDiscussion,
            Round::Hr,
            Round::Hr,
            Round::Technical,
        ];
        let mut last = flow.session().current_round_index;
        for round in order {
            let _ = flow.complete_step(round, vec![]);
            let _ = flow.advance();
            let index = flow.session().current_round_index;
            assert!(index >= last);
            assert!(index < ROUNDS.len());
            last = index;
        }
    }

    #[test]
    fn test_cancel_resets_session_but_keeps_suggestions() {
        let mut flow = started(AssessmentMode::Standalone);
        flow.complete_step(Round::Aptitude, vec!["Practice ratios".to_string()]).unwrap();
        let effects = flow.cancel();

        let session = flow.session();
        assert!(!session.is_active());
        assert_eq!(session.mode, AssessmentMode::Sequence);
        assert_eq!(session.current_round_index, 0);
        assert!(session.completed_round_ids.is_empty());
        assert_eq!(session.collected_suggestions, vec!["Practice ratios"]);
        assert_eq!(navigations(&effects), vec![REPORT_PATH]);
        assert!(effects.contains(&Effect::ClosePrompt));

        for round in ROUNDS {
            assert!(flow.check_access(round.path()).allowed);
        }
    }

    #[test]
    fn test_record_suggestions_feeds_report() {
        let mut flow = AssessmentFlow::new(FlowSettings::default());
        let added = flow.record_suggestions(vec![
            "Add Docker to resume".to_string(),
            "Add Docker to resume".to_string(),
        ]);
        assert_eq!(added, 1);
        assert_eq!(flow.session().collected_suggestions.len(), 1);
    }

    #[test]
    fn test_sequence_rejects_completing_a_later_round() {
        let mut flow = started(AssessmentMode::Sequence);

        assert_eq!(
            flow.complete_step(Round::GroupDiscussion, vec!["Skip ahead".to_string()]),
            Err(FlowError::RoundLocked {
                round: Round::GroupDiscussion,
                required: Round::Aptitude,
            })
        );
        assert!(flow.session().completed_round_ids.is_empty());
        assert!(flow.session().collected_suggestions.is_empty());
        assert_eq!(flow.staged_next(), None);
        assert_eq!(flow.advance(), Err(FlowError::NothingStaged));
        assert_eq!(flow.session().current_round_index, 0);
        assert!(!flow.check_access("/hr").allowed);
    }

    #[test]
    fn test_last_round_cannot_finish_the_sequence_early() {
        let mut flow = started(AssessmentMode::Sequence);
        let result = flow.complete_step(Round::Hr, vec![]);
        assert!(matches!(result, Err(FlowError::RoundLocked { .. })));
        assert!(!flow.session().is_completed(Round::Hr));
    }

    #[test]
    fn test_advance_moves_exactly_one_round() {
        let mut flow = started(AssessmentMode::Sequence);
        flow.complete_step(Round::Aptitude, vec![]).unwrap();
        flow.advance().unwrap();
        assert_eq!(flow.session().current_round_index, 1);

        flow.complete_step(Round::Technical, vec![]).unwrap();
        let effects = flow.advance().unwrap();
        assert_eq!(flow.session().current_round_index, 2);
        assert_eq!(navigations(&effects), vec!["/group-discussion"]);
    }

    #[test]
    fn test_revisited_round_is_recorded_without_staging() {
        let mut flow = started(AssessmentMode::Sequence);
        flow.complete_step(Round::Aptitude, vec![]).unwrap();
        flow.advance().unwrap();

        let effects = flow
            .complete_step(Round::Aptitude, vec!["Late note".to_string()])
            .unwrap();
        assert_eq!(flow.staged_next(), None);
        assert!(flow.prompt().is_none());
        assert_eq!(notifications(&effects)[0].1, Severity::Info);
        assert_eq!(flow.advance(), Err(FlowError::NothingStaged));
        assert_eq!(flow.session().current_round_index, 1);
    }

    #[test]
    fn test_completion_without_session_is_rejected() {
        let mut flow = AssessmentFlow::new(FlowSettings::default());

        assert_eq!(
            flow.complete_step(Round::Aptitude, vec!["Phantom".to_string()]),
            Err(FlowError::NoActiveSession)
        );
        assert_eq!(
            flow.complete_step(Round::Hr, vec![]),
            Err(FlowError::NoActiveSession)
        );
        assert_eq!(flow.advance(), Err(FlowError::NothingStaged));
        assert_eq!(flow.session(), &AssessmentSession::default());
        assert!(flow.prompt().is_none());
    }

    #[test]
    fn test_completion_after_cancel_does_not_leak_into_next_session() {
        let mut flow = started(AssessmentMode::Standalone);
        flow.cancel();
        assert!(flow.complete_step(Round::Technical, vec![]).is_err());

        flow.start("Frontend Dev", AssessmentMode::Sequence, None).unwrap();
        assert!(flow.session().completed_round_ids.is_empty());
    }

    #[test]
    fn test_settings_from_config_clamps_countdown() {
        let config = Config {
            advance_countdown_secs: 0,
            ..Config::default()
        };
        assert_eq!(FlowSettings::from(&config).countdown_secs, 1);
    }
}

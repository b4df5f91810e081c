//! Notification sink: the toast collaborator.
//!
//! Notifications are fire-and-forget. The service logs each one and keeps the
//! most recent ones so the client can drain them.

use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const MAX_PENDING: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub severity: Severity,
    pub duration_ms: Option<u64>,
    pub created_at: DateTime<Utc>,
}

pub trait NotificationSink: Send + Sync {
    fn notify(&self, message: &str, severity: Severity, duration_ms: Option<u64>);
}

/// Bounded in-memory notification queue. Oldest entries are dropped first.
#[derive(Default)]
pub struct NotificationLog {
    pending: Mutex<VecDeque<Notification>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns every pending notification, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        match self.pending.lock() {
            Ok(mut pending) => pending.drain(..).collect(),
            Err(poisoned) => poisoned.into_inner().drain(..).collect(),
        }
    }
}

impl NotificationSink for NotificationLog {
    fn notify(&self, message: &str, severity: Severity, duration_ms: Option<u64>) {
        match severity {
            Severity::Error => tracing::warn!(severity = "error", "{message}"),
            Severity::Warning => tracing::warn!("{message}"),
            Severity::Success | Severity::Info => tracing::info!("{message}"),
        }

        let notification = Notification {
            id: Uuid::new_v4(),
            message: message.to_string(),
            severity,
            duration_ms,
            created_at: Utc::now(),
        };

        let mut pending = match self.pending.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if pending.len() == MAX_PENDING {
            pending.pop_front();
        }
        pending.push_back(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_returns_in_order_and_empties() {
        let log = NotificationLog::new();
        log.notify("first", Severity::Info, None);
        log.notify("second", Severity::Success, Some(2000));

        let drained = log.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].message, "first");
        assert_eq!(drained[1].severity, Severity::Success);
        assert_eq!(drained[1].duration_ms, Some(2000));
        assert!(log.drain().is_empty());
    }

    #[test]
    fn test_queue_is_bounded() {
        let log = NotificationLog::new();
        for i in 0..(MAX_PENDING + 5) {
            log.notify(&format!("n{i}"), Severity::Info, None);
        }
        let drained = log.drain();
        assert_eq!(drained.len(), MAX_PENDING);
        assert_eq!(drained[0].message, "n5");
    }
}

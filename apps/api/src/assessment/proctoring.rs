use serde::{Deserialize, Serialize};

/// Suggestions recorded when a round is force-completed for repeated focus loss.
pub const VIOLATION_SUGGESTIONS: [&str; 2] = [
    "Stay on the assessment window for the whole round; leaving it ends the round early.",
    "Close other tabs and notifications before starting a timed round.",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraStatus {
    #[default]
    NotRequested,
    Granted,
    Denied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProctorStatus {
    pub focus_losses: u32,
    pub threshold: u32,
    pub camera: CameraStatus,
    /// Set on the event that crossed the threshold.
    pub violation: bool,
}

/// Counts focus-loss events for the round in progress.
#[derive(Debug, Clone)]
pub struct ProctorMonitor {
    threshold: u32,
    focus_losses: u32,
    camera: CameraStatus,
}

impl ProctorMonitor {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold: threshold.max(1),
            focus_losses: 0,
            camera: CameraStatus::default(),
        }
    }

    /// Records one focus loss. Returns a status with `violation` set when the
    /// threshold is reached; the counter resets at that point.
    pub fn record_focus_loss(&mut self) -> ProctorStatus {
        self.focus_losses += 1;
        let violation = self.focus_losses >= self.threshold;
        let status = ProctorStatus {
            focus_losses: self.focus_losses,
            threshold: self.threshold,
            camera: self.camera,
            violation,
        };
        if violation {
            self.focus_losses = 0;
        }
        status
    }

    pub fn record_camera(&mut self, granted: bool) -> CameraStatus {
        self.camera = if granted {
            CameraStatus::Granted
        } else {
            CameraStatus::Denied
        };
        self.camera
    }

    /// Starts counting afresh for a new round. Camera permission is kept.
    pub fn reset(&mut self) {
        self.focus_losses = 0;
    }

    pub fn status(&self) -> ProctorStatus {
        ProctorStatus {
            focus_losses: self.focus_losses,
            threshold: self.threshold,
            camera: self.camera,
            violation: false,
        }
    }
}

//! Submission status banner

use serde::Serialize;
use std::sync::Arc;
use tokio::sync::watch;

pub const PENDING_MESSAGE: &str = "Sending message...";
pub const SUCCESS_MESSAGE: &str = "Success! Your message has been received.";
pub const FAILURE_PREFIX: &str = "Error: Failed to send message.";

/// What the status banner currently shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionStatus {
    pub message: String,
    pub visible: bool,
    pub is_success: bool,
}

impl Default for SubmissionStatus {
    fn default() -> Self {
        Self::idle()
    }
}

impl SubmissionStatus {
    pub fn idle() -> Self {
        Self {
            message: String::new(),
            visible: false,
            is_success: true,
        }
    }

    pub fn pending() -> Self {
        Self {
            message: PENDING_MESSAGE.to_string(),
            visible: true,
            is_success: false,
        }
    }

    pub fn success() -> Self {
        Self {
            message: SUCCESS_MESSAGE.to_string(),
            visible: true,
            is_success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            visible: true,
            is_success: false,
        }
    }

    pub fn phase(&self) -> StatusPhase {
        if !self.visible {
            StatusPhase::Idle
        } else if !self.is_success && self.message == PENDING_MESSAGE {
            StatusPhase::Pending
        } else {
            StatusPhase::Resolved {
                success: self.is_success,
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPhase {
    Idle,
    Pending,
    Resolved { success: bool },
}

impl StatusPhase {
    pub fn is_resolved(&self) -> bool {
        matches!(self, StatusPhase::Resolved { .. })
    }
}

/// Shared, observable holder of the active [`SubmissionStatus`]
#[derive(Debug, Clone)]
pub struct StatusBoard {
    tx: Arc<watch::Sender<SubmissionStatus>>,
}

impl Default for StatusBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusBoard {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(SubmissionStatus::idle());
        Self { tx: Arc::new(tx) }
    }

    pub fn current(&self) -> SubmissionStatus {
        self.tx.borrow().clone()
    }

    pub fn set(&self, status: SubmissionStatus) {
        self.tx.send_replace(status);
    }

    /// Hide the banner, keeping its message and outcome.
    pub fn hide(&self) {
        self.tx.send_modify(|status| status.visible = false);
    }

    pub fn subscribe(&self) -> watch::Receiver<SubmissionStatus> {
        self.tx.subscribe()
    }
}

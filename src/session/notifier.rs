use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tracing::info;

/// Transient on-screen message (toast)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Text shown to the user
    pub message: String,
    /// How long the message stays visible
    pub duration: Duration,
    /// Whether clicks are blocked while the message is visible
    pub forbid_click: bool,
}

/// Displays notifications to the user
pub trait Notifier: Send + Sync {
    /// Shows `notification`
    fn show(&self, notification: Notification);
}

/// Writes notifications to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn show(&self, notification: Notification) {
        info!(
            "Notification ({} ms): {}",
            notification.duration.as_millis(),
            notification.message
        );
    }
}

/// Keeps every notification shown, for headless runs and tests
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    shown: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    /// Creates an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications shown so far, oldest first
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Notifier for RecordingNotifier {
    fn show(&self, notification: Notification) {
        self.shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}

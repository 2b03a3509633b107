use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use business::domain::notification::model::{Notification, Severity};
use business::domain::notification::services::NotificationSink;

/// Notification sink for HTTP clients: every message is logged and queued
/// until a client drains the feed. Only the newest `capacity` are kept.
pub struct NotificationFeed {
    pending: Mutex<VecDeque<Notification>>,
    capacity: usize,
}

impl NotificationFeed {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            pending: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Takes every pending notification, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect()
    }
}

impl NotificationSink for NotificationFeed {
    fn notify(&self, message: &str, severity: Severity) {
        tracing::info!(target: "notifications", severity = %severity, "{}", message);

        let mut pending = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if pending.len() >= self.capacity {
            pending.pop_front();
        }
        pending.push_back(Notification::new(message, severity));
    }
}

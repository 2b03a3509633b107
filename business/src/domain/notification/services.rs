use super::model::Severity;

/// Fire-and-forget sink for user-facing messages.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, message: &str, severity: Severity);
}

use poem_openapi::Object;

use business::domain::notification::model::Notification;

#[derive(Debug, Clone, Object)]
pub struct NotificationResponse {
    /// Message to show to the shopper
    pub message: String,
    /// One of: info, success, warning, error
    pub severity: String,
}

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self {
            message: notification.message,
            severity: notification.severity.to_string(),
        }
    }
}

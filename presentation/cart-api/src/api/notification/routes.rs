use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use crate::api::notification::dto::NotificationResponse;
use crate::api::notification::feed::NotificationFeed;
use crate::api::tags::ApiTags;

pub struct NotificationApi {
    feed: Arc<NotificationFeed>,
}

impl NotificationApi {
    pub fn new(feed: Arc<NotificationFeed>) -> Self {
        Self { feed }
    }
}

/// Shopper notifications
#[OpenApi]
impl NotificationApi {
    /// Drain pending notifications
    ///
    /// Returns the messages raised by cart operations since the last call,
    /// oldest first, and clears them.
    #[oai(path = "/notifications", method = "get", tag = "ApiTags::Notifications")]
    async fn drain(&self) -> Json<Vec<NotificationResponse>> {
        Json(self.feed.drain().into_iter().map(Into::into).collect())
    }
}

use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use business::application::cart::controller::CartController;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
    /// Distinct products currently in the cart
    pub cart_size: u64,
}

pub struct HealthApi {
    controller: Arc<CartController>,
}

impl HealthApi {
    pub fn new(controller: Arc<CartController>) -> Self {
        Self { controller }
    }
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Liveness probe. Never touches the inventory API or the database.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            cart_size: self.controller.cart().len() as u64,
        })
    }
}

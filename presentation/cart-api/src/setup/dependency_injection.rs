use std::sync::Arc;

use inventory::client::InventoryClient;
use inventory::inventory_service::InventoryServiceHttp;
use logger::TracingLogger;
use persistence::storage::repository::KeyValueStoragePostgres;

use business::application::cart::controller::CartController;
use business::application::cart::state::CartState;

use crate::api::cart::routes::CartApi;
use crate::api::health::routes::HealthApi;
use crate::api::notification::feed::NotificationFeed;
use crate::api::notification::routes::NotificationApi;
use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub controller: Arc<CartController>,
    pub health_api: HealthApi,
    pub cart_api: CartApi,
    pub notification_api: NotificationApi,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::PgPool, config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let storage = Arc::new(KeyValueStoragePostgres::new(pool));
        let inventory = Arc::new(InventoryServiceHttp::new(InventoryClient::new(
            config.inventory.base_url.clone(),
            config.inventory.timeout,
        )));
        let feed = Arc::new(NotificationFeed::new(config.cart.notification_capacity));

        // The one cart controller shared by every endpoint
        let state = Arc::new(
            CartState::load(storage, config.cart.storage_key.clone(), logger.clone()).await,
        );
        let controller = Arc::new(CartController::new(
            state,
            inventory,
            feed.clone(),
            logger,
        ));

        Ok(Self {
            health_api: HealthApi::new(controller.clone()),
            cart_api: CartApi::new(controller.clone()),
            notification_api: NotificationApi::new(feed),
            controller,
        })
    }
}

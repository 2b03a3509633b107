use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use mockall::mock;
use serde_json::{Map, json};

use crate::application::cart::state::CartState;
use crate::domain::cart::model::{Cart, Product, ProductId};
use crate::domain::errors::StorageError;
use crate::domain::inventory::errors::InventoryError;
use crate::domain::inventory::model::{CatalogProduct, Stock};
use crate::domain::inventory::services::InventoryService;
use crate::domain::logger::Logger;
use crate::domain::notification::model::Severity;
use crate::domain::notification::services::NotificationSink;
use crate::domain::storage::{DEFAULT_CART_STORAGE_KEY, KeyValueStorage};

mock! {
    pub Inventory {}

    #[async_trait]
    impl InventoryService for Inventory {
        async fn get_stock(&self, product_id: ProductId) -> Result<Stock, InventoryError>;
        async fn get_product(&self, product_id: ProductId) -> Result<CatalogProduct, InventoryError>;
    }
}

mock! {
    pub Notifier {}

    impl NotificationSink for Notifier {
        fn notify(&self, message: &str, severity: Severity);
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

/// Key-value store kept in memory. `failing()` rejects every read and write;
/// `with_write_delay` makes every write sleep before it lands.
#[derive(Default)]
pub struct InMemoryStorage {
    entries: Mutex<HashMap<String, String>>,
    failing: bool,
    write_delay: Option<Duration>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        storage
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn with_write_delay(mut self, delay: Duration) -> Self {
        self.write_delay = Some(delay);
        self
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    /// The cart as it would be restored on the next start.
    pub fn persisted_cart(&self) -> Option<Cart> {
        self.raw(DEFAULT_CART_STORAGE_KEY)
            .map(|raw| serde_json::from_str(&raw).unwrap())
    }
}

#[async_trait]
impl KeyValueStorage for InMemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.failing {
            return Err(StorageError::Read);
        }
        Ok(self.raw(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.failing {
            return Err(StorageError::Write);
        }
        if let Some(delay) = self.write_delay {
            tokio::time::sleep(delay).await;
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub fn product(id: u64, amount: u32) -> Product {
    Product::from_catalog(catalog(id), amount)
}

pub fn catalog(id: u64) -> CatalogProduct {
    let mut attributes = Map::new();
    attributes.insert("title".to_string(), json!(format!("Tênis {}", id)));
    attributes.insert("price".to_string(), json!(179.9));
    attributes.insert(
        "image".to_string(),
        json!(format!("https://example.com/{}.jpg", id)),
    );
    CatalogProduct {
        id: ProductId::new(id),
        attributes,
    }
}

pub fn stock(id: u64, amount: u32) -> Stock {
    Stock {
        id: ProductId::new(id),
        amount,
    }
}

/// Cart state seeded with `products`, backed by a fresh in-memory store.
pub async fn state_with(products: Vec<Product>) -> (Arc<CartState>, Arc<InMemoryStorage>) {
    let cart = Cart::try_from(products).unwrap();
    let storage = Arc::new(InMemoryStorage::with_entry(
        DEFAULT_CART_STORAGE_KEY,
        &serde_json::to_string(&cart).unwrap(),
    ));
    let state = CartState::load(storage.clone(), DEFAULT_CART_STORAGE_KEY, mock_logger()).await;
    (Arc::new(state), storage)
}

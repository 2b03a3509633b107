use async_trait::async_trait;

use crate::domain::errors::StorageError;

/// Key under which the serialized cart is stored unless configured otherwise.
pub const DEFAULT_CART_STORAGE_KEY: &str = "@RocketShoes:cart";

/// Durable string store (get/set by key).
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

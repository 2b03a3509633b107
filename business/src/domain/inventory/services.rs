use async_trait::async_trait;

use crate::domain::cart::model::ProductId;

use super::errors::InventoryError;
use super::model::{CatalogProduct, Stock};

/// Service port for the remote inventory/product catalog.
///
/// Every call reaches the remote service; implementations must not cache
/// stock levels.
#[async_trait]
pub trait InventoryService: Send + Sync {
    async fn get_stock(&self, product_id: ProductId) -> Result<Stock, InventoryError>;
    async fn get_product(&self, product_id: ProductId) -> Result<CatalogProduct, InventoryError>;
}

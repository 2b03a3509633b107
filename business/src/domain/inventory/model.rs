use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::cart::model::ProductId;

/// Units available for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub id: ProductId,
    pub amount: u32,
}

/// Catalog record of a product. Attributes (title, price, image...) are
/// opaque to the cart and carried as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: ProductId,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

use poem_openapi::Object;

use business::domain::cart::model::{Cart, Product};

#[derive(Debug, Clone, Object)]
pub struct CartProductResponse {
    /// Catalog product identifier
    pub id: u64,
    /// Selected quantity (at least 1)
    pub amount: u32,
    /// Catalog attributes as returned by the inventory API (title, price, image...)
    pub attributes: serde_json::Value,
}

impl From<&Product> for CartProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.value(),
            amount: product.amount,
            attributes: serde_json::Value::Object(product.attributes.clone()),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    /// Products in insertion order
    pub products: Vec<CartProductResponse>,
    /// Number of distinct products
    pub size: u64,
    /// Sum of all amounts
    pub total_units: u64,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            products: cart.iter().map(CartProductResponse::from).collect(),
            size: cart.len() as u64,
            total_units: cart.total_units(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct UpdateAmountRequest {
    /// Absolute quantity; values below 1 are ignored
    pub amount: i64,
}

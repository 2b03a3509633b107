use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, ProductId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateProductAmountParams {
    pub product_id: ProductId,
    /// Absolute quantity requested. Values below 1 are ignored.
    pub amount: i64,
}

#[async_trait]
pub trait UpdateProductAmountUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductAmountParams) -> Result<Cart, CartError>;
}

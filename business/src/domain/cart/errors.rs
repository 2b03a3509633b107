use crate::domain::inventory::errors::InventoryError;
use crate::domain::notification::model::messages;

/// Outcome of a cart operation that did not commit.
#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.product_not_found")]
    NotFound,
    #[error("cart.product_already_in_cart")]
    AlreadyInCart,
    #[error("cart.stock_insufficient")]
    StockInsufficient { requested: i64, available: u32 },
    #[error("cart.invalid_amount")]
    InvalidAmount(i64),
    #[error("cart.invalid_snapshot")]
    InvalidSnapshot,
    #[error("inventory.failure")]
    Inventory(#[from] InventoryError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    AddProduct,
    RemoveProduct,
    UpdateProductAmount,
}

impl CartOperation {
    /// Generic message shown when the operation fails for any reason other
    /// than missing stock.
    pub fn failure_message(self) -> &'static str {
        match self {
            CartOperation::AddProduct => messages::ADD_PRODUCT_FAILED,
            CartOperation::RemoveProduct => messages::REMOVE_PRODUCT_FAILED,
            CartOperation::UpdateProductAmount => messages::UPDATE_AMOUNT_FAILED,
        }
    }
}

impl std::fmt::Display for CartOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartOperation::AddProduct => write!(f, "add_product"),
            CartOperation::RemoveProduct => write!(f, "remove_product"),
            CartOperation::UpdateProductAmount => write!(f, "update_product_amount"),
        }
    }
}

impl CartError {
    pub fn user_message(&self, operation: CartOperation) -> &'static str {
        match self {
            CartError::StockInsufficient { .. } => messages::QUANTITY_UNAVAILABLE,
            _ => operation.failure_message(),
        }
    }
}

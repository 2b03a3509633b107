#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("inventory.unavailable")]
    Unavailable,
    #[error("inventory.unexpected_status")]
    UnexpectedStatus(u16),
    #[error("inventory.malformed_response")]
    MalformedResponse,
}

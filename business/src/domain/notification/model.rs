/// User-facing messages. Kept verbatim for compatibility with existing
/// storefront clients.
pub mod messages {
    pub const QUANTITY_UNAVAILABLE: &str = "Quantidade solicitada fora de estoque";
    pub const ADD_PRODUCT_FAILED: &str = "Erro na adição do produto";
    pub const REMOVE_PRODUCT_FAILED: &str = "Erro na remoção do produto";
    pub const UPDATE_AMOUNT_FAILED: &str = "Erro na alteração de quantidade do produto";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Info,
    Success,
    Warning,
    #[default]
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Success => write!(f, "success"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A message surfaced to the shopper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }
}

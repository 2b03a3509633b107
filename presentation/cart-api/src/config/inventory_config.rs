use std::env;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://localhost:3333";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Inventory API configuration
#[derive(Debug, Clone)]
pub struct InventoryConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl InventoryConfig {
    /// Environment variables:
    /// - INVENTORY_API_URL: Base URL of the stock/catalog API (default: "http://localhost:3333")
    /// - INVENTORY_TIMEOUT_SECS: Request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = var("INVENTORY_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout_secs = var("INVENTORY_TIMEOUT_SECS")
            .and_then(|secs| secs.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_defaults_when_unset() {
        let config = InventoryConfig::from_vars(|_| None);

        assert_eq!(config.base_url, "http://localhost:3333");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn should_read_url_and_timeout() {
        let config = InventoryConfig::from_vars(|name| match name {
            "INVENTORY_API_URL" => Some("https://inventory.internal".to_string()),
            "INVENTORY_TIMEOUT_SECS" => Some("5".to_string()),
            _ => None,
        });

        assert_eq!(config.base_url, "https://inventory.internal");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn should_ignore_zero_timeout() {
        let config = InventoryConfig::from_vars(|name| match name {
            "INVENTORY_TIMEOUT_SECS" => Some("0".to_string()),
            _ => None,
        });

        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}

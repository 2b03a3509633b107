use std::env;

use business::domain::storage::DEFAULT_CART_STORAGE_KEY;

const DEFAULT_NOTIFICATION_CAPACITY: usize = 50;

/// Cart state and notification feed configuration
#[derive(Debug, Clone)]
pub struct CartConfig {
    pub storage_key: String,
    pub notification_capacity: usize,
}

impl CartConfig {
    /// Environment variables:
    /// - CART_STORAGE_KEY: Storage key of the persisted cart (default: "@RocketShoes:cart")
    /// - NOTIFICATION_FEED_CAPACITY: Pending notifications kept for clients (default: 50)
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let storage_key = var("CART_STORAGE_KEY")
            .filter(|key| !key.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CART_STORAGE_KEY.to_string());
        let notification_capacity = var("NOTIFICATION_FEED_CAPACITY")
            .and_then(|capacity| capacity.trim().parse::<usize>().ok())
            .filter(|capacity| *capacity > 0)
            .unwrap_or(DEFAULT_NOTIFICATION_CAPACITY);

        Self {
            storage_key,
            notification_capacity,
        }
    }
}

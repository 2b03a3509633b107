use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard, watch};

use crate::domain::cart::model::Cart;
use crate::domain::logger::Logger;
use crate::domain::storage::KeyValueStorage;

/// In-memory cart, its persisted copy and the snapshot published to readers.
///
/// Mutating use cases hold [`CartState::lock`] from the moment they look the
/// cart up until [`CartState::commit`] returns, so operations never interleave.
/// Readers go through [`CartState::snapshot`], which only changes once a commit
/// has written to storage.
pub struct CartState {
    cart: Mutex<Cart>,
    published: watch::Sender<Cart>,
    storage: Arc<dyn KeyValueStorage>,
    storage_key: String,
    logger: Arc<dyn Logger>,
}

impl CartState {
    /// Restores the cart saved under `storage_key`. Missing, unreadable or
    /// invalid data yields an empty cart.
    pub async fn load(
        storage: Arc<dyn KeyValueStorage>,
        storage_key: impl Into<String>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let storage_key = storage_key.into();

        let cart = match storage.get(&storage_key).await {
            Ok(Some(raw)) => serde_json::from_str::<Cart>(&raw).unwrap_or_else(|e| {
                logger.warn(&format!(
                    "Discarding unreadable cart stored under {}: {}",
                    storage_key, e
                ));
                Cart::new()
            }),
            Ok(None) => Cart::new(),
            Err(e) => {
                logger.warn(&format!("Could not read stored cart: {}", e));
                Cart::new()
            }
        };

        logger.info(&format!("Cart loaded with {} products", cart.len()));

        let (published, _) = watch::channel(cart.clone());
        Self {
            cart: Mutex::new(cart),
            published,
            storage,
            storage_key,
            logger,
        }
    }

    pub fn snapshot(&self) -> Cart {
        self.published.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.published.subscribe()
    }

    pub async fn lock(&self) -> MutexGuard<'_, Cart> {
        self.cart.lock().await
    }

    /// Writes `next` through to storage, then replaces `current` and publishes
    /// it. A failed write is logged; the commit still stands.
    ///
    /// Dropping the returned future before the write finishes leaves both the
    /// in-memory and the published cart unchanged.
    pub async fn commit(&self, current: &mut Cart, next: Cart) -> Cart {
        self.persist(&next).await;
        *current = next.clone();
        self.published.send_replace(next.clone());
        next
    }

    async fn persist(&self, cart: &Cart) {
        let raw = match serde_json::to_string(cart) {
            Ok(raw) => raw,
            Err(e) => {
                self.logger
                    .error(&format!("Could not serialize cart: {}", e));
                return;
            }
        };

        if let Err(e) = self.storage.set(&self.storage_key, &raw).await {
            self.logger
                .warn(&format!("Could not persist cart: {}", e));
        }
    }
}

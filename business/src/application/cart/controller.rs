use std::sync::Arc;

use tokio::sync::watch;

use crate::application::cart::add_product::AddProductUseCaseImpl;
use crate::application::cart::remove_product::RemoveProductUseCaseImpl;
use crate::application::cart::state::CartState;
use crate::application::cart::update_amount::UpdateProductAmountUseCaseImpl;
use crate::domain::cart::errors::{CartError, CartOperation};
use crate::domain::cart::model::{Cart, ProductId};
use crate::domain::cart::use_cases::add_product::{AddProductParams, AddProductUseCase};
use crate::domain::cart::use_cases::remove_product::{RemoveProductParams, RemoveProductUseCase};
use crate::domain::cart::use_cases::update_amount::{
    UpdateProductAmountParams, UpdateProductAmountUseCase,
};
use crate::domain::inventory::services::InventoryService;
use crate::domain::logger::Logger;
use crate::domain::notification::model::Severity;
use crate::domain::notification::services::NotificationSink;

/// Single entry point to the shopper's cart.
///
/// Construct one per application and hand out `Arc<CartController>` to every
/// consumer. Mutators never return errors: a failed operation leaves the cart
/// untouched and is reported through the [`NotificationSink`].
pub struct CartController {
    state: Arc<CartState>,
    add_product_use_case: Arc<dyn AddProductUseCase>,
    remove_product_use_case: Arc<dyn RemoveProductUseCase>,
    update_amount_use_case: Arc<dyn UpdateProductAmountUseCase>,
    notifier: Arc<dyn NotificationSink>,
    logger: Arc<dyn Logger>,
}

impl CartController {
    pub fn new(
        state: Arc<CartState>,
        inventory: Arc<dyn InventoryService>,
        notifier: Arc<dyn NotificationSink>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let add_product_use_case = Arc::new(AddProductUseCaseImpl {
            state: state.clone(),
            inventory: inventory.clone(),
            logger: logger.clone(),
        });
        let remove_product_use_case = Arc::new(RemoveProductUseCaseImpl {
            state: state.clone(),
            logger: logger.clone(),
        });
        let update_amount_use_case = Arc::new(UpdateProductAmountUseCaseImpl {
            state: state.clone(),
            inventory,
            logger: logger.clone(),
        });

        Self {
            state,
            add_product_use_case,
            remove_product_use_case,
            update_amount_use_case,
            notifier,
            logger,
        }
    }

    pub fn cart(&self) -> Cart {
        self.state.snapshot()
    }

    /// Receives every committed cart.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.state.subscribe()
    }

    pub async fn add_product(&self, product_id: ProductId) {
        let outcome = self
            .add_product_use_case
            .execute(AddProductParams { product_id })
            .await;
        self.settle(CartOperation::AddProduct, product_id, outcome);
    }

    pub async fn remove_product(&self, product_id: ProductId) {
        let outcome = self
            .remove_product_use_case
            .execute(RemoveProductParams { product_id })
            .await;
        self.settle(CartOperation::RemoveProduct, product_id, outcome);
    }

    pub async fn update_product_amount(&self, params: UpdateProductAmountParams) {
        let product_id = params.product_id;
        let outcome = self.update_amount_use_case.execute(params).await;
        self.settle(CartOperation::UpdateProductAmount, product_id, outcome);
    }

    fn settle(
        &self,
        operation: CartOperation,
        product_id: ProductId,
        outcome: Result<Cart, CartError>,
    ) {
        match outcome {
            Ok(cart) => self.logger.debug(&format!(
                "{} for product {} done, cart holds {} products",
                operation,
                product_id,
                cart.len()
            )),
            Err(err) => {
                match &err {
                    CartError::StockInsufficient {
                        requested,
                        available,
                    } => self.logger.info(&format!(
                        "{} for product {} refused: requested {}, available {}",
                        operation, product_id, requested, available
                    )),
                    other => self.logger.warn(&format!(
                        "{} for product {} failed: {}",
                        operation, product_id, other
                    )),
                }
                self.notifier
                    .notify(err.user_message(operation), Severity::Error);
            }
        }
    }
}

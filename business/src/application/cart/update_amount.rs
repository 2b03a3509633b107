use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::state::CartState;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::update_amount::{
    UpdateProductAmountParams, UpdateProductAmountUseCase,
};
use crate::domain::inventory::services::InventoryService;
use crate::domain::logger::Logger;

pub struct UpdateProductAmountUseCaseImpl {
    pub state: Arc<CartState>,
    pub inventory: Arc<dyn InventoryService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductAmountUseCase for UpdateProductAmountUseCaseImpl {
    async fn execute(&self, params: UpdateProductAmountParams) -> Result<Cart, CartError> {
        let UpdateProductAmountParams { product_id, amount } = params;

        if amount < 1 {
            self.logger.debug(&format!(
                "Ignoring amount {} for product {}",
                amount, product_id
            ));
            return Ok(self.state.snapshot());
        }

        self.logger.info(&format!(
            "Setting amount of product {} to {}",
            product_id, amount
        ));

        let mut cart = self.state.lock().await;

        let stock = self.inventory.get_stock(product_id).await?;
        if amount > i64::from(stock.amount) {
            return Err(CartError::StockInsufficient {
                requested: amount,
                available: stock.amount,
            });
        }

        let amount = u32::try_from(amount).map_err(|_| CartError::InvalidAmount(amount))?;
        let next = cart.with_amount(product_id, amount)?;
        let committed = self.state.commit(&mut cart, next).await;

        self.logger
            .info(&format!("Amount of product {} updated", product_id));
        Ok(committed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::cart::test_support::{
        MockInventory, mock_logger, product, state_with, stock,
    };
    use crate::domain::cart::model::ProductId;
    use crate::domain::inventory::errors::InventoryError;

    fn use_case(state: Arc<CartState>, inventory: MockInventory) -> UpdateProductAmountUseCaseImpl {
        UpdateProductAmountUseCaseImpl {
            state,
            inventory: Arc::new(inventory),
            logger: mock_logger(),
        }
    }

    fn params(id: u64, amount: i64) -> UpdateProductAmountParams {
        UpdateProductAmountParams {
            product_id: ProductId::new(id),
            amount,
        }
    }

    #[tokio::test]
    async fn should_set_exact_amount_and_keep_order() {
        let (state, storage) = state_with(vec![product(1, 1), product(2, 2), product(3, 1)]).await;
        let mut inventory = MockInventory::new();
        inventory
            .expect_get_stock()
            .returning(|id| Ok(stock(id.value(), 5)));

        let result = use_case(state, inventory).execute(params(2, 5)).await;

        let cart = result.unwrap();
        let ids: Vec<u64> = cart.iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(cart.products()[1].amount, 5);
        assert_eq!(cart.products()[0], product(1, 1));
        assert_eq!(cart.products()[2], product(3, 1));
        assert_eq!(storage.persisted_cart(), Some(cart));
    }

    #[tokio::test]
    async fn should_ignore_zero_amount_without_querying_stock() {
        let (state, _storage) = state_with(vec![product(1, 2)]).await;
        let mut inventory = MockInventory::new();
        inventory.expect_get_stock().never();

        let result = use_case(state.clone(), inventory).execute(params(1, 0)).await;

        assert_eq!(result.unwrap(), state.snapshot());
        assert_eq!(state.snapshot().products()[0].amount, 2);
    }

    #[tokio::test]
    async fn should_ignore_negative_amount() {
        let (state, _storage) = state_with(vec![product(1, 2)]).await;
        let mut inventory = MockInventory::new();
        inventory.expect_get_stock().never();

        let result = use_case(state.clone(), inventory).execute(params(1, -3)).await;

        assert!(result.is_ok());
        assert_eq!(state.snapshot().products()[0].amount, 2);
    }

    #[tokio::test]
    async fn should_reject_amount_above_stock() {
        let (state, _storage) = state_with(vec![product(1, 2)]).await;
        let mut inventory = MockInventory::new();
        inventory
            .expect_get_stock()
            .returning(|id| Ok(stock(id.value(), 3)));

        let result = use_case(state.clone(), inventory).execute(params(1, 4)).await;

        assert!(matches!(
            result,
            Err(CartError::StockInsufficient {
                requested: 4,
                available: 3
            })
        ));
        assert_eq!(state.snapshot().products()[0].amount, 2);
    }

    #[tokio::test]
    async fn should_accept_amount_equal_to_stock() {
        let (state, _storage) = state_with(vec![product(1, 1)]).await;
        let mut inventory = MockInventory::new();
        inventory
            .expect_get_stock()
            .returning(|id| Ok(stock(id.value(), 3)));

        let result = use_case(state, inventory).execute(params(1, 3)).await;

        assert_eq!(result.unwrap().products()[0].amount, 3);
    }

    #[tokio::test]
    async fn should_check_stock_before_cart_membership() {
        let (state, _storage) = state_with(vec![]).await;
        let mut inventory = MockInventory::new();
        inventory
            .expect_get_stock()
            .times(1)
            .returning(|id| Ok(stock(id.value(), 1)));

        let result = use_case(state, inventory).execute(params(7, 2)).await;

        assert!(matches!(result, Err(CartError::StockInsufficient { .. })));
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_is_absent() {
        let (state, _storage) = state_with(vec![product(1, 1)]).await;
        let mut inventory = MockInventory::new();
        inventory
            .expect_get_stock()
            .returning(|id| Ok(stock(id.value(), 10)));

        let result = use_case(state.clone(), inventory).execute(params(7, 2)).await;

        assert!(matches!(result, Err(CartError::NotFound)));
        assert_eq!(state.snapshot().len(), 1);
    }

    #[tokio::test]
    async fn should_not_commit_when_stock_lookup_fails() {
        let (state, _storage) = state_with(vec![product(1, 1)]).await;
        let mut inventory = MockInventory::new();
        inventory
            .expect_get_stock()
            .returning(|_| Err(InventoryError::UnexpectedStatus(503)));

        let result = use_case(state.clone(), inventory).execute(params(1, 2)).await;

        assert!(matches!(
            result,
            Err(CartError::Inventory(InventoryError::UnexpectedStatus(503)))
        ));
        assert_eq!(state.snapshot().products()[0].amount, 1);
    }
}

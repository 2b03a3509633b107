use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::state::CartState;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, Product};
use crate::domain::cart::use_cases::add_product::{AddProductParams, AddProductUseCase};
use crate::domain::inventory::services::InventoryService;
use crate::domain::logger::Logger;

pub struct AddProductUseCaseImpl {
    pub state: Arc<CartState>,
    pub inventory: Arc<dyn InventoryService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddProductUseCase for AddProductUseCaseImpl {
    async fn execute(&self, params: AddProductParams) -> Result<Cart, CartError> {
        let product_id = params.product_id;
        self.logger
            .info(&format!("Adding product {} to cart", product_id));

        let mut cart = self.state.lock().await;
        let amount_in_cart = cart.find(product_id).map(|product| product.amount);

        let stock = self.inventory.get_stock(product_id).await?;

        let next = match amount_in_cart {
            Some(current) => {
                if stock.amount <= current {
                    return Err(CartError::StockInsufficient {
                        requested: i64::from(current) + 1,
                        available: stock.amount,
                    });
                }
                cart.with_amount(product_id, current + 1)?
            }
            None => {
                if stock.amount < 1 {
                    return Err(CartError::StockInsufficient {
                        requested: 1,
                        available: stock.amount,
                    });
                }
                let catalog = self.inventory.get_product(product_id).await?;
                cart.with_product(Product::from_catalog(catalog, 1))?
            }
        };

        let committed = self.state.commit(&mut cart, next).await;
        self.logger
            .info(&format!("Product {} added to cart", product_id));
        Ok(committed)
    }
}

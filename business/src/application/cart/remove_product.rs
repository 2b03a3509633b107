use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::state::CartState;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::remove_product::{RemoveProductParams, RemoveProductUseCase};
use crate::domain::logger::Logger;

pub struct RemoveProductUseCaseImpl {
    pub state: Arc<CartState>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveProductUseCase for RemoveProductUseCaseImpl {
    async fn execute(&self, params: RemoveProductParams) -> Result<Cart, CartError> {
        self.logger
            .info(&format!("Removing product {} from cart", params.product_id));

        let mut cart = self.state.lock().await;
        let next = cart.without(params.product_id)?;
        let committed = self.state.commit(&mut cart, next).await;

        self.logger
            .info(&format!("Product {} removed from cart", params.product_id));
        Ok(committed)
    }
}

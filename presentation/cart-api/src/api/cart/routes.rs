use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::application::cart::controller::CartController;
use business::domain::cart::model::ProductId;
use business::domain::cart::use_cases::update_amount::UpdateProductAmountParams;

use crate::api::cart::dto::{CartResponse, UpdateAmountRequest};
use crate::api::tags::ApiTags;

pub struct CartApi {
    controller: Arc<CartController>,
}

impl CartApi {
    pub fn new(controller: Arc<CartController>) -> Self {
        Self { controller }
    }

    fn snapshot(&self) -> Json<CartResponse> {
        Json(self.controller.cart().into())
    }
}

/// Shopping cart API
///
/// Every mutation answers with the cart as it stands afterwards. Refused or
/// failed operations leave the cart unchanged and queue a message on
/// `/notifications`.
#[OpenApi]
impl CartApi {
    /// Get the cart
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self) -> Json<CartResponse> {
        self.snapshot()
    }

    /// Add a product
    ///
    /// Adds one unit of the product, appending it when it is not in the cart yet.
    #[oai(path = "/cart/products/:id", method = "post", tag = "ApiTags::Cart")]
    async fn add_product(&self, id: Path<u64>) -> Json<CartResponse> {
        self.controller.add_product(ProductId::new(id.0)).await;
        self.snapshot()
    }

    /// Remove a product
    #[oai(path = "/cart/products/:id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove_product(&self, id: Path<u64>) -> Json<CartResponse> {
        self.controller.remove_product(ProductId::new(id.0)).await;
        self.snapshot()
    }

    /// Set the amount of a product
    #[oai(path = "/cart/products/:id/amount", method = "put", tag = "ApiTags::Cart")]
    async fn update_amount(
        &self,
        id: Path<u64>,
        body: Json<UpdateAmountRequest>,
    ) -> Json<CartResponse> {
        self.controller
            .update_product_amount(UpdateProductAmountParams {
                product_id: ProductId::new(id.0),
                amount: body.0.amount,
            })
            .await;
        self.snapshot()
    }
}

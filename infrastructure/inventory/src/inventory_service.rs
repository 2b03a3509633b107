use async_trait::async_trait;

use business::domain::cart::model::ProductId;
use business::domain::inventory::errors::InventoryError;
use business::domain::inventory::model::{CatalogProduct, Stock};
use business::domain::inventory::services::InventoryService;

use crate::client::InventoryClient;

pub struct InventoryServiceHttp {
    client: InventoryClient,
}

impl InventoryServiceHttp {
    pub fn new(client: InventoryClient) -> Self {
        Self { client }
    }

    async fn fetch(&self, url: String) -> Result<String, InventoryError> {
        let response = self
            .client
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|_| InventoryError::Unavailable)?;

        if !response.status().is_success() {
            return Err(InventoryError::UnexpectedStatus(response.status().as_u16()));
        }

        response
            .text()
            .await
            .map_err(|_| InventoryError::Unavailable)
    }

    fn parse_stock(body: &str, product_id: ProductId) -> Result<Stock, InventoryError> {
        let stock: Stock =
            serde_json::from_str(body).map_err(|_| InventoryError::MalformedResponse)?;

        if stock.id != product_id {
            return Err(InventoryError::MalformedResponse);
        }
        Ok(stock)
    }

    fn parse_product(body: &str, product_id: ProductId) -> Result<CatalogProduct, InventoryError> {
        let product: CatalogProduct =
            serde_json::from_str(body).map_err(|_| InventoryError::MalformedResponse)?;

        if product.id != product_id {
            return Err(InventoryError::MalformedResponse);
        }
        Ok(product)
    }
}

#[async_trait]
impl InventoryService for InventoryServiceHttp {
    async fn get_stock(&self, product_id: ProductId) -> Result<Stock, InventoryError> {
        let body = self.fetch(self.client.stock_url(product_id)).await?;
        Self::parse_stock(&body, product_id)
    }

    async fn get_product(&self, product_id: ProductId) -> Result<CatalogProduct, InventoryError> {
        let body = self.fetch(self.client.product_url(product_id)).await?;
        Self::parse_product(&body, product_id)
    }
}

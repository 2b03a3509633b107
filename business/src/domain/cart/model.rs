use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::CartError;
use crate::domain::inventory::model::CatalogProduct;

/// Catalog identifier of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A cart line item: the catalog record plus the selected quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
    pub amount: u32,
}

impl Product {
    pub fn from_catalog(catalog: CatalogProduct, amount: u32) -> Self {
        let mut attributes = catalog.attributes;
        // The catalog owns `id`; `amount` is ours.
        attributes.remove("id");
        attributes.remove("amount");

        Self {
            id: catalog.id,
            attributes,
            amount,
        }
    }
}

/// Ordered, duplicate-free sequence of products with `amount >= 1`.
///
/// A `Cart` is an immutable snapshot: every mutation returns a new value so a
/// failed operation never leaves a half-updated cart behind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<Product>", try_from = "Vec<Product>")]
pub struct Cart {
    products: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.find(id).is_some()
    }

    /// Sum of the amounts of every product.
    pub fn total_units(&self) -> u64 {
        self.products.iter().map(|p| u64::from(p.amount)).sum()
    }

    /// Appends `product` at the end of the cart.
    pub fn with_product(&self, product: Product) -> Result<Cart, CartError> {
        if product.amount < 1 {
            return Err(CartError::InvalidAmount(i64::from(product.amount)));
        }
        if self.contains(product.id) {
            return Err(CartError::AlreadyInCart);
        }

        let mut products = self.products.clone();
        products.push(product);
        Ok(Cart { products })
    }

    /// Sets the amount of `id` to exactly `amount`.
    pub fn with_amount(&self, id: ProductId, amount: u32) -> Result<Cart, CartError> {
        if amount < 1 {
            return Err(CartError::InvalidAmount(i64::from(amount)));
        }
        if !self.contains(id) {
            return Err(CartError::NotFound);
        }

        let products = self
            .products
            .iter()
            .map(|product| {
                if product.id == id {
                    Product {
                        amount,
                        ..product.clone()
                    }
                } else {
                    product.clone()
                }
            })
            .collect();
        Ok(Cart { products })
    }

    pub fn without(&self, id: ProductId) -> Result<Cart, CartError> {
        if !self.contains(id) {
            return Err(CartError::NotFound);
        }

        let products = self
            .products
            .iter()
            .filter(|product| product.id != id)
            .cloned()
            .collect();
        Ok(Cart { products })
    }
}

impl TryFrom<Vec<Product>> for Cart {
    type Error = CartError;

    fn try_from(products: Vec<Product>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if product.amount < 1 || !seen.insert(product.id) {
                return Err(CartError::InvalidSnapshot);
            }
        }
        Ok(Cart { products })
    }
}

impl From<Cart> for Vec<Product> {
    fn from(cart: Cart) -> Self {
        cart.products
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product(id: u64, amount: u32) -> Product {
        let mut attributes = Map::new();
        attributes.insert("title".to_string(), json!(format!("Product {}", id)));
        attributes.insert("price".to_string(), json!(139.9));
        Product {
            id: ProductId::new(id),
            attributes,
            amount,
        }
    }

    fn cart_of(products: Vec<Product>) -> Cart {
        Cart::try_from(products).unwrap()
    }

    #[test]
    fn should_append_product_at_the_end() {
        let cart = cart_of(vec![product(1, 1), product(2, 3)]);

        let updated = cart.with_product(product(5, 1)).unwrap();

        let ids: Vec<u64> = updated.iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 5]);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn should_reject_appending_a_product_already_in_cart() {
        let cart = cart_of(vec![product(1, 1)]);

        let result = cart.with_product(product(1, 1));

        assert!(matches!(result, Err(CartError::AlreadyInCart)));
    }

    #[test]
    fn should_set_amount_without_touching_other_products() {
        let cart = cart_of(vec![product(1, 1), product(2, 3), product(3, 2)]);

        let updated = cart.with_amount(ProductId::new(2), 7).unwrap();

        assert_eq!(updated.products()[0], cart.products()[0]);
        assert_eq!(updated.products()[1].amount, 7);
        assert_eq!(
            updated.products()[1].attributes,
            cart.products()[1].attributes
        );
        assert_eq!(updated.products()[2], cart.products()[2]);
    }

    #[test]
    fn should_reject_zero_amount() {
        let cart = cart_of(vec![product(1, 1)]);

        let result = cart.with_amount(ProductId::new(1), 0);

        assert!(matches!(result, Err(CartError::InvalidAmount(0))));
    }

    #[test]
    fn should_return_not_found_when_setting_amount_of_missing_product() {
        let cart = cart_of(vec![product(1, 1)]);

        let result = cart.with_amount(ProductId::new(9), 2);

        assert!(matches!(result, Err(CartError::NotFound)));
    }

    #[test]
    fn should_remove_product_and_keep_order() {
        let cart = cart_of(vec![product(1, 1), product(2, 1), product(3, 1)]);

        let updated = cart.without(ProductId::new(2)).unwrap();

        let ids: Vec<u64> = updated.iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn should_return_not_found_when_removing_missing_product() {
        let cart = Cart::new();

        assert!(matches!(
            cart.without(ProductId::new(1)),
            Err(CartError::NotFound)
        ));
    }

    #[test]
    fn should_sum_total_units() {
        let cart = cart_of(vec![product(1, 2), product(2, 3)]);

        assert_eq!(cart.total_units(), 5);
    }

    #[test]
    fn should_serialize_as_flat_product_records() {
        let cart = cart_of(vec![product(1, 2)]);

        let value = serde_json::to_value(&cart).unwrap();

        assert_eq!(
            value,
            json!([{ "id": 1, "title": "Product 1", "price": 139.9, "amount": 2 }])
        );
    }

    #[test]
    fn should_read_back_what_it_wrote() {
        let cart = cart_of(vec![product(4, 1), product(2, 5)]);

        let raw = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&raw).unwrap();

        assert_eq!(restored, cart);
    }

    #[test]
    fn should_reject_snapshot_with_duplicate_ids() {
        let raw = r#"[{"id":1,"amount":1},{"id":1,"amount":2}]"#;

        assert!(serde_json::from_str::<Cart>(raw).is_err());
    }

    #[test]
    fn should_reject_snapshot_with_zero_amount() {
        let raw = r#"[{"id":1,"title":"Tênis","amount":0}]"#;

        assert!(serde_json::from_str::<Cart>(raw).is_err());
    }

    #[test]
    fn should_drop_catalog_amount_when_building_from_catalog() {
        let catalog: CatalogProduct =
            serde_json::from_str(r#"{"id":7,"title":"Tênis","amount":40}"#).unwrap();

        let product = Product::from_catalog(catalog, 1);

        assert_eq!(product.amount, 1);
        assert!(!product.attributes.contains_key("amount"));
        assert_eq!(
            serde_json::to_value(&product).unwrap(),
            json!({ "id": 7, "title": "Tênis", "amount": 1 })
        );
    }
}

//! Store

use rust_decimal::Decimal;
use slotmap::SlotMap;
use thiserror::Error;

use crate::products::{Product, ProductError, ProductKey};

/// Errors related to store bookkeeping and order fulfilment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The product key does not belong to a product in this store.
    #[error("Product not found in store")]
    NotFound(ProductKey),

    /// A line item could not be bought. Earlier line items in the same order stay applied.
    #[error("Line item {index} failed: {source}")]
    LineItem {
        /// Position of the failing line item in the order
        index: usize,
        /// Product the line item referred to
        product: ProductKey,
        /// Underlying purchase failure
        source: ProductError,
    },

    /// The order total overflowed.
    #[error("Order total overflowed")]
    TotalOverflow,
}

/// A single order line: a product in the store and the number of units requested.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LineItem {
    product: ProductKey,
    quantity: i64,
}

impl LineItem {
    /// Create a new line item
    pub fn new(product: ProductKey, quantity: i64) -> Self {
        Self { product, quantity }
    }

    /// Product being ordered
    pub fn product(&self) -> ProductKey {
        self.product
    }

    /// Units requested
    pub fn quantity(&self) -> i64 {
        self.quantity
    }
}

/// Store
///
/// Owns every product it stocks. Products are addressed by the [`ProductKey`] handed out
/// when they are added, and keep their insertion order for listings.
#[derive(Debug, Default)]
pub struct Store {
    products: SlotMap<ProductKey, Product>,
    catalog: Vec<ProductKey>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store stocking the given products, in order.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut store = Self::new();

        for product in products {
            store.add_product(product);
        }

        store
    }

    /// Add a product to the end of the catalog, returning its key.
    ///
    /// No deduplication takes place: two products with identical fields get distinct keys.
    pub fn add_product(&mut self, product: Product) -> ProductKey {
        let key = self.products.insert(product);
        self.catalog.push(key);

        key
    }

    /// Remove a product from the store, handing it back to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the key is not in the store, including keys of
    /// products that were already removed.
    pub fn remove_product(&mut self, key: ProductKey) -> Result<Product, StoreError> {
        let product = self.products.remove(key).ok_or(StoreError::NotFound(key))?;

        self.catalog.retain(|existing| *existing != key);

        Ok(product)
    }

    /// Look up a product.
    pub fn product(&self, key: ProductKey) -> Option<&Product> {
        self.products.get(key)
    }

    /// Look up a product for mutation (restocking, activation).
    pub fn product_mut(&mut self, key: ProductKey) -> Option<&mut Product> {
        self.products.get_mut(key)
    }

    /// Keys of every product, active or not, in catalog order.
    pub fn keys(&self) -> impl Iterator<Item = ProductKey> {
        self.catalog.iter().copied()
    }

    /// Every product, active or not, in catalog order.
    pub fn products(&self) -> impl Iterator<Item = (ProductKey, &Product)> {
        self.catalog
            .iter()
            .filter_map(|key| self.products.get(*key).map(|product| (*key, product)))
    }

    /// Active products in catalog order. Inactive products are left out entirely.
    pub fn active_products(&self) -> Vec<(ProductKey, &Product)> {
        self.products().filter(|(_, product)| product.is_active()).collect()
    }

    /// Sum of the stock of every product, including inactive ones.
    ///
    /// Summed as `u128`: per-product stock fits in `i64`, so the total cannot overflow.
    pub fn total_quantity(&self) -> u128 {
        self.products
            .values()
            .map(|product| u128::from(product.quantity()))
            .sum()
    }

    /// Number of products in the store, active or not.
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Check if the store has no products.
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Fulfil an order, returning the total price.
    ///
    /// Line items are bought one after another. The first failure aborts the order; line
    /// items before it stay bought. A product listed twice sees the stock left by its
    /// earlier line.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`]: a line item names a product that is not in the store.
    /// - [`StoreError::LineItem`]: a purchase was rejected by the product.
    /// - [`StoreError::TotalOverflow`]: the running total cannot be represented.
    pub fn order(&mut self, line_items: &[LineItem]) -> Result<Decimal, StoreError> {
        line_items
            .iter()
            .enumerate()
            .try_fold(Decimal::ZERO, |total, (index, line_item)| {
                let product = self
                    .products
                    .get_mut(line_item.product)
                    .ok_or(StoreError::NotFound(line_item.product))?;

                let price = product
                    .buy(line_item.quantity)
                    .map_err(|source| StoreError::LineItem {
                        index,
                        product: line_item.product,
                        source,
                    })?;

                total.checked_add(price).ok_or(StoreError::TotalOverflow)
            })
    }
}

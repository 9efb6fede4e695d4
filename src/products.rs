//! Products

use rust_decimal::Decimal;
use slotmap::new_key_type;
use thiserror::Error;

new_key_type! {
    /// Product Key
    pub struct ProductKey;
}

/// Errors raised by product construction and stock mutation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProductError {
    /// The product name was empty.
    #[error("Product name cannot be empty")]
    EmptyName,

    /// The product price was below zero.
    #[error("Product price cannot be negative, got {0}")]
    NegativePrice(Decimal),

    /// A stock quantity below zero was supplied.
    #[error("Product quantity cannot be negative, got {0}")]
    NegativeQuantity(i64),

    /// A purchase asked for zero or fewer units.
    #[error("Quantity must be positive, got {0}")]
    InvalidPurchaseQuantity(i64),

    /// A purchase was attempted on a deactivated product (product name).
    #[error("Cannot buy inactive product {0}")]
    Inactive(String),

    /// A purchase asked for more units than are in stock.
    #[error("Not enough stock available, requested {requested}, available {available}")]
    OutOfStock {
        /// Units requested
        requested: u64,
        /// Units in stock
        available: u64,
    },

    /// Price arithmetic overflowed.
    #[error("Price calculation overflowed")]
    PriceOverflow,
}

/// Product
///
/// A catalog entry with a unit price, a stock level and an active flag. A product that runs
/// out of stock is deactivated automatically; restocking never reactivates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    name: String,
    price: Decimal,
    quantity: u64,
    active: bool,
}

impl Product {
    /// Create a new, active product.
    ///
    /// # Errors
    ///
    /// - [`ProductError::EmptyName`]: `name` is empty.
    /// - [`ProductError::NegativePrice`]: `price` is below zero.
    /// - [`ProductError::NegativeQuantity`]: `quantity` is below zero.
    pub fn new(
        name: impl Into<String>,
        price: Decimal,
        quantity: i64,
    ) -> Result<Self, ProductError> {
        let name = name.into();

        if name.is_empty() {
            return Err(ProductError::EmptyName);
        }

        if price < Decimal::ZERO {
            return Err(ProductError::NegativePrice(price));
        }

        let quantity =
            u64::try_from(quantity).map_err(|_err| ProductError::NegativeQuantity(quantity))?;

        Ok(Self {
            name,
            price,
            quantity,
            active: true,
        })
    }

    /// Product name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Units in stock
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Whether the product can be listed and bought.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Mark the product as active.
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Mark the product as inactive.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Replace the stock level.
    ///
    /// Setting the quantity to zero deactivates the product. Any other value leaves the
    /// active flag untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::NegativeQuantity`] if `quantity` is below zero, leaving the
    /// product unchanged.
    pub fn set_quantity(&mut self, quantity: i64) -> Result<(), ProductError> {
        self.quantity =
            u64::try_from(quantity).map_err(|_err| ProductError::NegativeQuantity(quantity))?;

        if self.quantity == 0 {
            self.deactivate();
        }

        Ok(())
    }

    /// Buy `quantity` units, returning the price paid.
    ///
    /// Checks run in order: positive quantity, active product, sufficient stock. The product
    /// is only mutated once every check has passed.
    ///
    /// # Errors
    ///
    /// - [`ProductError::InvalidPurchaseQuantity`]: `quantity` is zero or negative.
    /// - [`ProductError::Inactive`]: the product is deactivated.
    /// - [`ProductError::OutOfStock`]: `quantity` exceeds the stock level.
    /// - [`ProductError::PriceOverflow`]: the line price cannot be represented.
    pub fn buy(&mut self, quantity: i64) -> Result<Decimal, ProductError> {
        let requested = u64::try_from(quantity)
            .ok()
            .filter(|requested| *requested > 0)
            .ok_or(ProductError::InvalidPurchaseQuantity(quantity))?;

        if !self.active {
            return Err(ProductError::Inactive(self.name.clone()));
        }

        if requested > self.quantity {
            return Err(ProductError::OutOfStock {
                requested,
                available: self.quantity,
            });
        }

        let total = self
            .price
            .checked_mul(Decimal::from(requested))
            .ok_or(ProductError::PriceOverflow)?;

        self.quantity -= requested;

        if self.quantity == 0 {
            self.deactivate();
        }

        Ok(total)
    }
}

//! Fixtures
//!
//! Catalogs are YAML documents listing products in catalog order. A default catalog with
//! three sample products is compiled into the crate.

use std::{fs, path::Path};

use thiserror::Error;

use crate::{
    products::{Product, ProductError},
    store::Store,
};

pub mod products;

const DEFAULT_CATALOG_YAML: &str = include_str!("../../fixtures/catalog/default.yml");

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// A catalog entry failed product validation
    #[error("Invalid product: {0}")]
    InvalidProduct(#[from] ProductError),
}

/// Build a store from a YAML catalog document.
///
/// # Errors
///
/// Returns an error if the YAML cannot be parsed or an entry is not a valid product.
pub fn parse_catalog(yaml: &str) -> Result<Store, FixtureError> {
    let fixture: products::CatalogFixture = serde_norway::from_str(yaml)?;

    let products = fixture
        .products
        .into_iter()
        .map(Product::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Store::with_products(products))
}

/// Build a store from a YAML catalog file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or an entry is not a valid product.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Store, FixtureError> {
    let contents = fs::read_to_string(path)?;

    parse_catalog(&contents)
}

/// Build a store stocking the built-in sample catalog.
///
/// # Errors
///
/// Returns an error if the built-in catalog fails to parse.
pub fn default_catalog() -> Result<Store, FixtureError> {
    parse_catalog(DEFAULT_CATALOG_YAML)
}

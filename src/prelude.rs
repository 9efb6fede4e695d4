//! Stockroom prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::write_catalog,
    fixtures::{FixtureError, default_catalog, load_catalog, parse_catalog},
    products::{Product, ProductError, ProductKey},
    session::{Session, SessionError},
    store::{LineItem, Store, StoreError},
};

//! Stockroom
//!
//! Stockroom is a small in-memory inventory and order manager: a catalog of products with
//! prices, stock levels and an active flag, and a store that fulfils orders by drawing down
//! stock.

pub mod catalog;
pub mod config;
pub mod fixtures;
pub mod observability;
pub mod prelude;
pub mod products;
pub mod session;
pub mod store;

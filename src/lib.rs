//! Storefront
//!
//! The core of a small electronics storefront: catalog search and sorting, a
//! cart ledger with observable state, and the catalog data source behind them.

pub mod cart;
pub mod catalog;
pub mod discounts;
pub mod fixtures;
pub mod logging;
pub mod prelude;
pub mod products;
pub mod repository;
pub mod session;
pub mod summary;
pub mod utils;

//! Tally
//!
//! Tally is a grocery checkout pricing engine: it prices baskets of named items against a catalog
//! of unit prices and bulk-purchase offers, and renders an itemised receipt with per-line charges
//! and savings.

pub mod basket;
pub mod catalog;
pub mod fixtures;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod receipt;

//! Tally prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    basket::{Basket, BasketLine},
    catalog::{Catalog, CatalogError},
    fixtures::{FixtureError, grocery_catalog},
    pricing::{PricingError, line_charge, price_basket},
    products::{BulkOffer, Product},
    receipt::{Receipt, ReceiptError, ReceiptLine},
};

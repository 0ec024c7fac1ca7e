//! Fixtures

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, USD},
};
use thiserror::Error;

use crate::{
    catalog::{Catalog, CatalogError},
    products::{BulkOffer, Product},
};

/// Errors that can occur while building fixture catalogs.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// A price string could not be parsed into minor units.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// Wrapped catalog construction error.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Parse a decimal price string (e.g., "3.97") into money in the given
/// currency.
///
/// # Errors
///
/// Returns [`FixtureError::InvalidPrice`] if the string is not a decimal
/// amount representable in minor units.
pub fn parse_price<'a>(
    s: &str,
    currency: &'a Currency,
) -> Result<Money<'a, Currency>, FixtureError> {
    let amount = s
        .trim()
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    let minor_units = amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    Ok(Money::from_minor(minor_units, currency))
}

/// Build the grocery catalog used by the checkout binary.
///
/// Prices are in US dollars. Milk and bread carry multi-unit offers while
/// bananas and apples are discounted on every unit.
///
/// # Errors
///
/// Returns a [`FixtureError`] if a seed price fails to parse or the catalog
/// rejects the products.
pub fn grocery_catalog() -> Result<Catalog<'static>, FixtureError> {
    let products = [
        Product::with_offer(
            "milk",
            parse_price("3.97", USD)?,
            BulkOffer::new(3, parse_price("5.00", USD)?),
        ),
        Product::with_offer(
            "bread",
            parse_price("2.17", USD)?,
            BulkOffer::new(4, parse_price("6.00", USD)?),
        ),
        Product::with_offer(
            "banana",
            parse_price("0.99", USD)?,
            BulkOffer::new(1, parse_price("0.55", USD)?),
        ),
        Product::with_offer(
            "apple",
            parse_price("0.89", USD)?,
            BulkOffer::new(1, parse_price("0.55", USD)?),
        ),
    ];

    Ok(Catalog::from_products(products, USD)?)
}

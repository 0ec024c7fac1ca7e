//! Pricing

use rusty_money::{Money, MoneyError, iso::Currency};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    basket::Basket,
    catalog::{Catalog, CatalogError},
    products::Product,
    receipt::{Receipt, ReceiptLine},
};

/// Errors that can occur while pricing a basket.
#[derive(Debug, Error)]
pub enum PricingError {
    /// Wrapped catalog error, such as an unknown product name.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// Extending a price to a quantity left the minor unit range.
    #[error("{minor_units} minor units times {quantity} overflows")]
    AmountOverflow {
        /// Price in minor units that was being extended
        minor_units: i64,
        /// Quantity the price was multiplied by
        quantity: u32,
    },
}

/// Price a basket against a catalog and produce a receipt.
///
/// Lines are priced in the order their products were first seen in the
/// basket. An unknown product name fails the whole basket, so no partial
/// receipt is ever produced. An empty basket prices to an empty receipt
/// with zero totals in the catalog currency.
///
/// # Errors
///
/// - [`PricingError::Catalog`]: a basket name has no catalog entry.
/// - [`PricingError::Money`]: a money operation failed.
/// - [`PricingError::AmountOverflow`]: a line amount left the minor unit range.
pub fn price_basket<'a>(
    basket: &Basket,
    catalog: &Catalog<'a>,
) -> Result<Receipt<'a>, PricingError> {
    let currency = catalog.currency();

    let mut lines: SmallVec<[ReceiptLine<'a>; 8]> = SmallVec::new();
    let mut subtotal = Money::from_minor(0, currency);
    let mut total = Money::from_minor(0, currency);

    for basket_line in basket.iter() {
        let product = catalog.lookup(basket_line.name())?;
        let quantity = basket_line.quantity();

        let undiscounted = times(product.unit_price(), quantity)?;
        let charged = line_charge(product, quantity)?;

        subtotal = subtotal.add(undiscounted)?;
        total = total.add(charged)?;

        lines.push(ReceiptLine::new(
            basket_line.name(),
            quantity,
            undiscounted,
            charged,
        ));
    }

    Ok(Receipt::new(lines, subtotal, total, currency))
}

/// Calculate the amount charged for a line of `quantity` units of a product.
///
/// Without an offer the line costs the unit price times the quantity. With
/// an offer, every full group of [`items_count`] units is charged at the
/// sale price and leftover units are charged at the unit price.
///
/// [`items_count`]: crate::products::BulkOffer::items_count
///
/// # Errors
///
/// - [`PricingError::Money`]: a money operation failed.
/// - [`PricingError::AmountOverflow`]: a line amount left the minor unit range.
pub fn line_charge<'a>(
    product: &Product<'a>,
    quantity: u32,
) -> Result<Money<'a, Currency>, PricingError> {
    debug_assert!(quantity >= 1, "basket lines always hold at least one unit");

    let Some(offer) = product.offer() else {
        return times(product.unit_price(), quantity);
    };

    let group = offer.items_count();

    // Catalog construction rejects zero-count offers.
    debug_assert!(group >= 1, "offer group size of zero reached pricing");

    if quantity % group == 0 {
        return times(offer.sale_price(), quantity / group);
    }

    if quantity < group {
        return times(product.unit_price(), quantity);
    }

    let grouped = times(offer.sale_price(), quantity / group)?;
    let leftover = times(product.unit_price(), quantity % group)?;

    Ok(grouped.add(leftover)?)
}

/// Extend a price to `quantity` units, exactly, in minor units.
fn times<'a>(
    price: &Money<'a, Currency>,
    quantity: u32,
) -> Result<Money<'a, Currency>, PricingError> {
    let minor = price.to_minor_units();

    let Some(extended) = minor.checked_mul(i64::from(quantity)) else {
        return Err(PricingError::AmountOverflow {
            minor_units: minor,
            quantity,
        });
    };

    Ok(Money::from_minor(extended, price.currency()))
}

//! Products

use rusty_money::{Money, iso::Currency};

/// A bulk-purchase offer: every `items_count` units bought together cost
/// `sale_price` instead of `items_count` times the unit price.
///
/// An `items_count` of 1 is an ordinary offer, not a special case; it prices
/// every unit at `sale_price` (a flat discounted unit price).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulkOffer<'a> {
    items_count: u32,
    sale_price: Money<'a, Currency>,
}

impl<'a> BulkOffer<'a> {
    /// Create a new bulk offer.
    ///
    /// `items_count` must be at least 1; [`Catalog`](crate::catalog::Catalog)
    /// construction rejects zero-count offers.
    pub fn new(items_count: u32, sale_price: Money<'a, Currency>) -> Self {
        Self {
            items_count,
            sale_price,
        }
    }

    /// Number of units one application of the offer covers.
    pub const fn items_count(&self) -> u32 {
        self.items_count
    }

    /// Price for one full application of the offer.
    pub fn sale_price(&self) -> &Money<'a, Currency> {
        &self.sale_price
    }
}

/// A catalog entry: a named product with a unit price and an optional
/// bulk-purchase offer.
#[derive(Debug, Clone, PartialEq)]
pub struct Product<'a> {
    name: String,
    unit_price: Money<'a, Currency>,
    offer: Option<BulkOffer<'a>>,
}

impl<'a> Product<'a> {
    /// Create a product priced per unit with no offer.
    pub fn new(name: impl Into<String>, unit_price: Money<'a, Currency>) -> Self {
        Self {
            name: name.into(),
            unit_price,
            offer: None,
        }
    }

    /// Create a product with a bulk-purchase offer.
    pub fn with_offer(
        name: impl Into<String>,
        unit_price: Money<'a, Currency>,
        offer: BulkOffer<'a>,
    ) -> Self {
        Self {
            name: name.into(),
            unit_price,
            offer: Some(offer),
        }
    }

    /// Returns the product name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the per-unit price.
    pub fn unit_price(&self) -> &Money<'a, Currency> {
        &self.unit_price
    }

    /// Returns the bulk offer, if the product has one.
    pub const fn offer(&self) -> Option<&BulkOffer<'a>> {
        self.offer.as_ref()
    }

    /// Returns true if the product has a bulk offer.
    pub const fn has_offer(&self) -> bool {
        self.offer.is_some()
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;

    use super::*;

    #[test]
    fn product_without_offer() {
        let product = Product::new("milk", Money::from_minor(397, USD));

        assert_eq!(product.name(), "milk");
        assert_eq!(product.unit_price(), &Money::from_minor(397, USD));
        assert!(!product.has_offer());
        assert!(product.offer().is_none());
    }

    #[test]
    fn product_with_offer() {
        let offer = BulkOffer::new(3, Money::from_minor(500, USD));
        let product = Product::with_offer("milk", Money::from_minor(397, USD), offer);

        assert!(product.has_offer());
        assert_eq!(product.offer(), Some(&offer));
    }

    #[test]
    fn offer_accessors_return_constructor_values() {
        let offer = BulkOffer::new(4, Money::from_minor(600, USD));

        assert_eq!(offer.items_count(), 4);
        assert_eq!(offer.sale_price(), &Money::from_minor(600, USD));
    }

    #[test]
    fn single_unit_offer_is_representable() {
        let offer = BulkOffer::new(1, Money::from_minor(55, USD));

        assert_eq!(offer.items_count(), 1);
    }
}

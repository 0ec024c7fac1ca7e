//! Catalog

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use thiserror::Error;

use crate::products::Product;

/// Errors related to catalog construction or lookups.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    /// A purchased name has no catalog entry.
    #[error("no product named {0:?} in the catalog")]
    UnknownProduct(String),

    /// Two products normalize to the same catalog key.
    #[error("duplicate product {0:?} in the catalog")]
    DuplicateProduct(String),

    /// A bulk offer covers zero items and could never apply.
    #[error("product {0:?} has a bulk offer covering zero items")]
    ZeroCountOffer(String),

    /// A product price differs from the catalog currency (name, price currency, catalog currency).
    #[error("product {0:?} is priced in {1}, but the catalog uses {2}")]
    CurrencyMismatch(String, &'static str, &'static str),
}

/// Immutable lookup table mapping a product name to its pricing rule.
///
/// Keys are normalized names (lower-cased, all whitespace removed). A catalog
/// is built once, validated up front, and only read afterwards, so it can be
/// shared freely across any number of pricing calls.
#[derive(Debug, Clone)]
pub struct Catalog<'a> {
    products: FxHashMap<String, Product<'a>>,
    currency: &'a Currency,
}

impl<'a> Catalog<'a> {
    /// Build a catalog from products, validating every entry.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::DuplicateProduct`]: two products normalize to the same key.
    /// - [`CatalogError::ZeroCountOffer`]: a bulk offer has an `items_count` of zero.
    /// - [`CatalogError::CurrencyMismatch`]: a unit or sale price uses a different
    ///   currency than the catalog.
    pub fn from_products(
        products: impl IntoIterator<Item = Product<'a>>,
        currency: &'a Currency,
    ) -> Result<Self, CatalogError> {
        let mut map = FxHashMap::default();

        for product in products {
            let key = normalize_name(product.name());

            check_currency(&product, currency)?;

            if let Some(offer) = product.offer()
                && offer.items_count() == 0
            {
                return Err(CatalogError::ZeroCountOffer(key));
            }

            if map.contains_key(&key) {
                return Err(CatalogError::DuplicateProduct(key));
            }

            map.insert(key, product);
        }

        Ok(Catalog {
            products: map,
            currency,
        })
    }

    /// Look up the pricing rule for a normalized product name.
    ///
    /// The caller is expected to pass an already-normalized name (as produced
    /// by basket tokenizing); no folding happens here.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownProduct`] when the name has no entry.
    pub fn lookup(&self, name: &str) -> Result<&Product<'a>, CatalogError> {
        self.products
            .get(name)
            .ok_or_else(|| CatalogError::UnknownProduct(name.to_string()))
    }

    /// Returns true if the named product exists and carries a bulk offer.
    pub fn has_offer(&self, name: &str) -> bool {
        self.products.get(name).is_some_and(Product::has_offer)
    }

    /// Iterate over the catalog's products, in no particular order.
    pub fn products(&self) -> impl Iterator<Item = &Product<'a>> {
        self.products.values()
    }

    /// Get the currency every price in the catalog uses.
    pub fn currency(&self) -> &'a Currency {
        self.currency
    }

    /// Get the number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Normalizes a raw product name into its key form: lower-cased with all
/// whitespace removed.
pub(crate) fn normalize_name(raw: &str) -> String {
    raw.chars()
        .filter(|ch| !ch.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

fn check_currency(product: &Product<'_>, currency: &Currency) -> Result<(), CatalogError> {
    let unit_currency = product.unit_price().currency();

    if unit_currency != currency {
        return Err(CatalogError::CurrencyMismatch(
            product.name().to_string(),
            unit_currency.iso_alpha_code,
            currency.iso_alpha_code,
        ));
    }

    if let Some(offer) = product.offer() {
        let sale_currency = offer.sale_price().currency();

        if sale_currency != currency {
            return Err(CatalogError::CurrencyMismatch(
                product.name().to_string(),
                sale_currency.iso_alpha_code,
                currency.iso_alpha_code,
            ));
        }
    }

    Ok(())
}

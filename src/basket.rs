//! Basket

use rustc_hash::FxHashMap;

use crate::catalog::normalize_name;

/// One distinct purchased product and how many units of it were bought.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasketLine {
    name: String,
    quantity: u32,
}

impl BasketLine {
    /// Returns the normalized product name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns how many units were purchased. Always at least 1.
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// The purchased items of one checkout, counted as a multiset.
///
/// Names are normalized on entry (lower-cased, all whitespace removed), and
/// distinct names keep the order they were first seen in. Every counted name
/// has a quantity of at least 1; a zero quantity cannot be constructed.
#[derive(Debug, Clone, Default)]
pub struct Basket {
    lines: Vec<BasketLine>,
    index: FxHashMap<String, usize>,
    total_items: usize,
}

impl Basket {
    /// Create an empty basket.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize a raw comma-separated list of purchased item names.
    ///
    /// Each token is normalized like [`Basket::add`]; tokens that normalize
    /// to the empty string (blank entries, stray commas) are skipped.
    pub fn from_input(input: &str) -> Self {
        let mut basket = Basket::new();

        for token in input.split(',') {
            basket.add(token);
        }

        basket
    }

    /// Count one unit of the named product.
    ///
    /// The name is normalized first; a name that normalizes to the empty
    /// string is ignored.
    pub fn add(&mut self, raw: &str) {
        let name = normalize_name(raw);

        if name.is_empty() {
            return;
        }

        if let Some(&idx) = self.index.get(&name) {
            if let Some(line) = self.lines.get_mut(idx) {
                line.quantity += 1;
            }
        } else {
            self.index.insert(name.clone(), self.lines.len());
            self.lines.push(BasketLine { name, quantity: 1 });
        }

        self.total_items += 1;
    }

    /// Iterate over the distinct purchased products in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &BasketLine> {
        self.lines.iter()
    }

    /// Returns how many units of the named product were purchased, if any.
    ///
    /// The name is normalized before the lookup.
    pub fn quantity(&self, raw: &str) -> Option<u32> {
        let name = normalize_name(raw);

        self.index
            .get(&name)
            .and_then(|&idx| self.lines.get(idx))
            .map(BasketLine::quantity)
    }

    /// Get the number of distinct product names in the basket.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Get the total number of units across all products.
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Check if the basket is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

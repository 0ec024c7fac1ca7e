//! Receipt

use std::io;

use rusty_money::{Money, MoneyError, iso::Currency};
use smallvec::SmallVec;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

/// Errors that can occur when totalling or writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// IO error
    #[error("IO error")]
    IO,
}

/// One distinct purchased product on the final receipt.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLine<'a> {
    name: String,
    quantity: u32,
    undiscounted: Money<'a, Currency>,
    charged: Money<'a, Currency>,
}

impl<'a> ReceiptLine<'a> {
    /// Create a new receipt line.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        quantity: u32,
        undiscounted: Money<'a, Currency>,
        charged: Money<'a, Currency>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            undiscounted,
            charged,
        }
    }

    /// Returns the normalized product name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns how many units of the product were purchased.
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Cost of the line at the plain unit price, with no offer applied.
    #[must_use]
    pub fn undiscounted(&self) -> Money<'a, Currency> {
        self.undiscounted
    }

    /// Amount actually charged for the line.
    #[must_use]
    pub fn charged(&self) -> Money<'a, Currency> {
        self.charged
    }

    /// Calculate the amount the offer saved on this line.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the subtraction operation fails.
    pub fn savings(&self) -> Result<Money<'a, Currency>, MoneyError> {
        self.undiscounted.sub(self.charged)
    }
}

/// Final receipt for a priced basket.
///
/// Lines appear in the order their products were first seen in the basket.
#[derive(Debug, Clone)]
pub struct Receipt<'a> {
    /// One line per distinct purchased product
    lines: SmallVec<[ReceiptLine<'a>; 8]>,

    /// Total cost before any offer applications
    subtotal: Money<'a, Currency>,

    /// Total amount charged after any offer applications
    total: Money<'a, Currency>,

    /// Currency used for all monetary values
    currency: &'a Currency,
}

impl<'a> Receipt<'a> {
    /// Create a new receipt with the given details.
    #[must_use]
    pub fn new(
        lines: SmallVec<[ReceiptLine<'a>; 8]>,
        subtotal: Money<'a, Currency>,
        total: Money<'a, Currency>,
        currency: &'a Currency,
    ) -> Self {
        Self {
            lines,
            subtotal,
            total,
            currency,
        }
    }

    /// The receipt lines, in first-seen order.
    #[must_use]
    pub fn lines(&self) -> &[ReceiptLine<'a>] {
        &self.lines
    }

    /// Total cost before any offer applications
    #[must_use]
    pub fn subtotal(&self) -> Money<'a, Currency> {
        self.subtotal
    }

    /// Total amount charged for all items
    #[must_use]
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// Calculate the savings made by the applied offers.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the subtraction operation fails.
    pub fn savings(&self) -> Result<Money<'a, Currency>, MoneyError> {
        self.subtotal.sub(self.total)
    }

    /// Currency used for all monetary values.
    #[must_use]
    pub fn currency(&self) -> &'a Currency {
        self.currency
    }

    /// Writes the receipt as a table followed by the totals.
    ///
    /// One row per line with the display name, quantity and charged amount,
    /// then the total charged and the total saved. Amounts are formatted by
    /// the money type, so rounding exists only at this boundary.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] if the totals cannot be calculated or the
    /// output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["Item", "Quantity", "Price"]);

        for line in &self.lines {
            builder.push_record([
                display_name(line.name()),
                line.quantity().to_string(),
                line.charged().to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(1..3), Alignment::right());

        writeln!(out, "{table}").map_err(|_err| ReceiptError::IO)?;
        writeln!(out, "Total price: {}", self.total()).map_err(|_err| ReceiptError::IO)?;

        writeln!(out, "You saved {} today", self.savings()?).map_err(|_err| ReceiptError::IO)?;

        Ok(())
    }
}

/// Capitalizes the first letter of a normalized name for display.
fn display_name(name: &str) -> String {
    let mut chars = name.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

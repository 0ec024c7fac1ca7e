//! Checkout
//!
//! Prices a comma-separated list of grocery items against the seeded catalog
//! and prints an itemised receipt with the total charged and total saved.
//!
//! Use `-i` to pass the items on the command line instead of stdin.

use std::io;

use anyhow::Result;
use clap::Parser;
use tally::{
    basket::Basket,
    catalog::CatalogError,
    fixtures::grocery_catalog,
    pricing::{PricingError, price_basket},
};

/// Arguments for the checkout binary
#[derive(Debug, Parser)]
struct Args {
    /// Comma-separated item names to price; read from stdin when omitted
    #[clap(short, long)]
    items: Option<String>,
}

/// Checkout
#[expect(clippy::print_stdout, reason = "CLI output")]
fn main() -> Result<()> {
    let args = Args::parse();

    let input = match args.items {
        Some(items) => items,
        None => {
            println!("Please enter all the items purchased separated by a comma");
            read_items()?
        }
    };

    let catalog = grocery_catalog()?;
    let basket = Basket::from_input(&input);

    match price_basket(&basket, &catalog) {
        Ok(receipt) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();

            receipt.write_to(&mut handle)?;
        }
        Err(PricingError::Catalog(CatalogError::UnknownProduct(_))) => {
            println!("\n No item matches");
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

/// Read one line of item names from stdin.
fn read_items() -> Result<String> {
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    Ok(line)
}

//! Integration tests for basket checkout against the seeded grocery catalog.
//!
//! Seed prices in minor units: milk 397 with 3 for 500, bread 217 with
//! 4 for 600, banana 99 with 1 for 55, apple 89 with 1 for 55.
//!
//! Worked expectations:
//!
//! 1. Three milk fill one offer group exactly: charged 500, full price
//!    3 x 397 = 1191, saving 691.
//! 2. Two milk fall short of the group of three: charged 2 x 397 = 794,
//!    saving 0.
//! 3. Six bread make one group of four plus two loose loaves:
//!    600 + 2 x 217 = 1034 charged, full price 1302, saving 268.
//! 4. Two bananas with a group size of one discount every unit:
//!    2 x 55 = 110 charged, full price 198, saving 88.
//! 5. Kiwi has no catalog entry: pricing fails and no receipt exists.

use rusty_money::{Money, iso::USD};
use testresult::TestResult;

use tally::{
    basket::Basket,
    catalog::CatalogError,
    fixtures::grocery_catalog,
    pricing::{PricingError, price_basket},
    receipt::ReceiptLine,
};

#[test]
fn three_milk_charge_one_sale_price() -> TestResult {
    let catalog = grocery_catalog()?;
    let basket = Basket::from_input("milk,milk,milk");

    let receipt = price_basket(&basket, &catalog)?;

    assert_eq!(receipt.total(), Money::from_minor(500, USD));
    assert_eq!(receipt.subtotal(), Money::from_minor(1191, USD));
    assert_eq!(receipt.savings()?, Money::from_minor(691, USD));

    Ok(())
}

#[test]
fn two_milk_pay_full_unit_price() -> TestResult {
    let catalog = grocery_catalog()?;
    let basket = Basket::from_input("milk,milk");

    let receipt = price_basket(&basket, &catalog)?;

    assert_eq!(receipt.total(), Money::from_minor(794, USD));
    assert_eq!(receipt.savings()?, Money::from_minor(0, USD));

    Ok(())
}

#[test]
fn six_bread_charge_one_group_plus_two_loose() -> TestResult {
    let catalog = grocery_catalog()?;
    let basket = Basket::from_input("bread,bread,bread,bread,bread,bread");

    let receipt = price_basket(&basket, &catalog)?;

    assert_eq!(receipt.total(), Money::from_minor(1034, USD));
    assert_eq!(receipt.savings()?, Money::from_minor(268, USD));

    let lines = receipt.lines();
    assert_eq!(lines.len(), 1);

    let Some(line) = lines.first() else {
        panic!("expected a bread line");
    };

    assert_eq!(line.quantity(), 6);
    assert_eq!(line.charged(), Money::from_minor(1034, USD));
    assert_eq!(line.savings()?, Money::from_minor(268, USD));

    Ok(())
}

#[test]
fn two_bananas_discount_every_unit() -> TestResult {
    let catalog = grocery_catalog()?;
    let basket = Basket::from_input("banana,banana");

    let receipt = price_basket(&basket, &catalog)?;

    assert_eq!(receipt.total(), Money::from_minor(110, USD));
    assert_eq!(receipt.savings()?, Money::from_minor(88, USD));

    Ok(())
}

#[test]
fn unknown_item_fails_the_whole_basket() -> TestResult {
    let catalog = grocery_catalog()?;
    let basket = Basket::from_input("milk,kiwi");

    match price_basket(&basket, &catalog) {
        Err(PricingError::Catalog(CatalogError::UnknownProduct(name))) => {
            assert_eq!(name, "kiwi");
        }
        other => panic!("expected UnknownProduct, got {other:?}"),
    }

    Ok(())
}

#[test]
fn mixed_basket_aggregates_lines_in_first_seen_order() -> TestResult {
    // milk x3 charge 500 (full 1191), bread x5 charge 600 + 217 = 817
    // (full 1085), apple x1 charge 55 (full 89), banana x1 charge 55
    // (full 99). Total 1427, subtotal 2464, saving 1037.
    let catalog = grocery_catalog()?;
    let basket = Basket::from_input("Milk, Bread,milk,  Apple,bread,MILK,bread, bread,Banana,bread");

    let receipt = price_basket(&basket, &catalog)?;

    let names: Vec<&str> = receipt.lines().iter().map(ReceiptLine::name).collect();
    assert_eq!(names, ["milk", "bread", "apple", "banana"]);

    let quantities: Vec<u32> = receipt
        .lines()
        .iter()
        .map(ReceiptLine::quantity)
        .collect();
    assert_eq!(quantities, [3, 5, 1, 1]);

    assert_eq!(receipt.total(), Money::from_minor(1427, USD));
    assert_eq!(receipt.subtotal(), Money::from_minor(2464, USD));
    assert_eq!(receipt.savings()?, Money::from_minor(1037, USD));

    Ok(())
}

#[test]
fn empty_input_prices_to_zero_totals() -> TestResult {
    let catalog = grocery_catalog()?;
    let basket = Basket::from_input("");

    let receipt = price_basket(&basket, &catalog)?;

    assert!(receipt.lines().is_empty());
    assert_eq!(receipt.total(), Money::from_minor(0, USD));
    assert_eq!(receipt.savings()?, Money::from_minor(0, USD));

    Ok(())
}

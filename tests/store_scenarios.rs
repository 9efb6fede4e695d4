//! Integration tests for the sample catalog: purchases, depletion and listings.
//!
//! The store is stocked from the built-in catalog:
//!
//! 1. MacBook Air M2 - 1450 x 100
//! 2. Bose QuietComfort Earbuds - 250 x 500
//! 3. Google Pixel 7 - 500 x 250
//!
//! Total stock: 850 units.

use rust_decimal::Decimal;
use testresult::TestResult;

use stockroom::prelude::*;

fn stocked_store() -> TestResult<(Store, ProductKey, ProductKey, ProductKey)> {
    let store = default_catalog()?;

    let keys: Vec<ProductKey> = store.keys().collect();

    let mac = *keys.first().ok_or("missing MacBook")?;
    let bose = *keys.get(1).ok_or("missing Bose")?;
    let pixel = *keys.get(2).ok_or("missing Pixel")?;

    Ok((store, mac, bose, pixel))
}

fn quantity(store: &Store, key: ProductKey) -> TestResult<u64> {
    Ok(store.product(key).ok_or("missing product")?.quantity())
}

fn active_names(store: &Store) -> Vec<String> {
    store
        .active_products()
        .iter()
        .map(|(_, product)| product.name().to_string())
        .collect()
}

#[test]
fn partial_purchase_keeps_product_active() -> TestResult {
    let (mut store, _, bose, _) = stocked_store()?;

    let total = store.order(&[LineItem::new(bose, 50)])?;

    assert_eq!(total, Decimal::from(12_500));
    assert_eq!(quantity(&store, bose)?, 450);
    assert!(store.product(bose).ok_or("missing product")?.is_active());

    Ok(())
}

#[test]
fn buying_out_stock_deactivates_and_blocks_further_orders() -> TestResult {
    let (mut store, mac, _, _) = stocked_store()?;

    assert_eq!(store.order(&[LineItem::new(mac, 100)])?, Decimal::from(145_000));
    assert_eq!(quantity(&store, mac)?, 0);

    let result = store.order(&[LineItem::new(mac, 1)]);

    assert_eq!(
        result,
        Err(StoreError::LineItem {
            index: 0,
            product: mac,
            source: ProductError::Inactive("MacBook Air M2".to_string()),
        })
    );
    assert_eq!(
        active_names(&store),
        ["Bose QuietComfort Earbuds", "Google Pixel 7"]
    );

    Ok(())
}

#[test]
fn deactivation_hides_product_but_keeps_its_stock() -> TestResult {
    let (mut store, mac, _, _) = stocked_store()?;

    assert_eq!(store.total_quantity(), 850);

    store.product_mut(mac).ok_or("missing product")?.deactivate();

    assert_eq!(
        active_names(&store),
        ["Bose QuietComfort Earbuds", "Google Pixel 7"]
    );
    assert_eq!(store.total_quantity(), 850);

    Ok(())
}

#[test]
fn two_product_order_totals_both_lines() -> TestResult {
    let (mut store, mac, _, pixel) = stocked_store()?;

    let total = store.order(&[LineItem::new(mac, 2), LineItem::new(pixel, 3)])?;

    assert_eq!(total, Decimal::from(1450 * 2 + 500 * 3));
    assert_eq!(quantity(&store, mac)?, 98);
    assert_eq!(quantity(&store, pixel)?, 247);

    Ok(())
}

#[test]
fn failed_line_leaves_earlier_lines_applied() -> TestResult {
    let (mut store, mac, bose, pixel) = stocked_store()?;

    let result = store.order(&[
        LineItem::new(mac, 5),
        LineItem::new(bose, 0),
        LineItem::new(pixel, 5),
    ]);

    assert!(matches!(
        result,
        Err(StoreError::LineItem {
            index: 1,
            source: ProductError::InvalidPurchaseQuantity(0),
            ..
        })
    ));
    assert_eq!(quantity(&store, mac)?, 95);
    assert_eq!(quantity(&store, bose)?, 500);
    assert_eq!(quantity(&store, pixel)?, 250);

    Ok(())
}

#[test]
fn restocking_does_not_reactivate() -> TestResult {
    let (mut store, _, _, pixel) = stocked_store()?;

    let product = store.product_mut(pixel).ok_or("missing product")?;
    product.set_quantity(0)?;
    product.set_quantity(40)?;

    assert!(!active_names(&store).contains(&"Google Pixel 7".to_string()));
    assert_eq!(store.total_quantity(), 640);

    store.product_mut(pixel).ok_or("missing product")?.activate();

    assert_eq!(
        active_names(&store),
        ["MacBook Air M2", "Bose QuietComfort Earbuds", "Google Pixel 7"]
    );

    Ok(())
}

#[test]
fn removed_product_cannot_be_ordered_or_removed_again() -> TestResult {
    let (mut store, _, bose, _) = stocked_store()?;

    let removed = store.remove_product(bose)?;

    assert_eq!(removed.quantity(), 500);
    assert_eq!(store.total_quantity(), 350);
    assert_eq!(store.order(&[LineItem::new(bose, 1)]), Err(StoreError::NotFound(bose)));
    assert_eq!(store.remove_product(bose), Err(StoreError::NotFound(bose)));

    Ok(())
}

#[test]
fn added_products_are_listed_last() -> TestResult {
    let (mut store, _, _, _) = stocked_store()?;

    let key = store.add_product(Product::new("Kindle", Decimal::new(9_999, 2), 30)?);

    assert_eq!(active_names(&store).last().map(String::as_str), Some("Kindle"));
    assert_eq!(store.order(&[LineItem::new(key, 2)])?, Decimal::new(19_998, 2));

    Ok(())
}

//! End-to-end checkout flows: registration, cart mutation and totals
//! across promotions and coupons, using exact decimal arithmetic
//! throughout.

use testresult::TestResult;

use tillroll::prelude::*;

/// A small shop: three promoted items, one plain item, two coupons.
fn shop() -> TestResult<Inventory> {
    let mut inventory = Inventory::new();

    inventory.register(
        "Beer",
        "1.20".parse()?,
        Some(&PromotionConfig::package(6, 10u32)),
    )?;
    inventory.register(
        "Olives",
        "2.30".parse()?,
        Some(&PromotionConfig::one_free(3)),
    )?;
    inventory.register(
        "Cheese",
        "10.00".parse()?,
        Some(&PromotionConfig::threshold(3, 20u32)),
    )?;
    inventory.register("Pen", "1.00".parse()?, None)?;

    inventory.register_coupon("SUMMER", &CouponConfig::percent(10u32))?;
    inventory.register_coupon("TENNER", &CouponConfig::amount(10u32))?;

    Ok(inventory)
}

#[test]
fn plain_cart_totals_to_gross() -> TestResult {
    let inventory = shop()?;
    let mut cart = inventory.new_cart();

    cart.add("Pen", 5)?;

    assert_eq!(cart.total(), "5.00".parse()?);

    Ok(())
}

#[test]
fn promotions_apply_per_line() -> TestResult {
    let inventory = shop()?;
    let mut cart = inventory.new_cart();

    cart.add("Beer", 12)?;
    cart.add("Olives", 7)?;
    cart.add("Cheese", 5)?;

    // 14.40 - 1.44, 16.10 - 4.60, 50.00 - 4.00.
    assert_eq!(cart.gross(), "80.50".parse()?);
    assert_eq!(cart.promotion_discount(), "-10.04".parse()?);
    assert_eq!(cart.total(), "70.46".parse()?);

    Ok(())
}

#[test]
fn percent_coupon_applies_to_the_promoted_subtotal() -> TestResult {
    let inventory = shop()?;
    let mut cart = inventory.new_cart();

    cart.add("Beer", 12)?;
    cart.add("Olives", 7)?;
    cart.add("Cheese", 5)?;
    cart.use_coupon("SUMMER")?;

    // The exact total keeps its third decimal place; only display
    // rounds: 70.46 - 7.046.
    assert_eq!(cart.coupon_discount(), "-7.046".parse()?);
    assert_eq!(cart.total(), "63.414".parse()?);
    assert_eq!(cart.total().to_string(), "63.41");

    Ok(())
}

#[test]
fn amount_coupon_comes_off_after_promotions() -> TestResult {
    let inventory = shop()?;
    let mut cart = inventory.new_cart();

    cart.add("Beer", 12)?;
    cart.use_coupon("TENNER")?;

    // 14.40 - 1.44 - 10.00.
    assert_eq!(cart.total(), "2.96".parse()?);

    Ok(())
}

#[test]
fn amount_coupon_caps_at_the_subtotal() -> TestResult {
    let inventory = shop()?;
    let mut cart = inventory.new_cart();

    cart.add("Pen", 3)?;
    cart.use_coupon("TENNER")?;

    assert_eq!(cart.total(), "0.00".parse()?);

    Ok(())
}

#[test]
fn quantities_accumulate_across_adds() -> TestResult {
    let inventory = shop()?;
    let mut cart = inventory.new_cart();

    cart.add("Olives", 3)?;
    cart.add("Olives", 4)?;

    // Seven olives qualify for two free units, which a single add of
    // three or four would not.
    assert_eq!(cart.promotion_discount(), "-4.60".parse()?);

    Ok(())
}

#[test]
fn registration_errors_leave_the_inventory_usable() -> TestResult {
    let mut inventory = shop()?;

    assert!(matches!(
        inventory.register("Pen", "2.00".parse()?, None),
        Err(InventoryError::DuplicateItem(_))
    ));
    assert!(matches!(
        inventory.register("Bulk", "1000.00".parse()?, None),
        Err(InventoryError::InvalidParameter { .. })
    ));

    let mut cart = inventory.new_cart();
    cart.add("Pen", 1)?;

    assert_eq!(cart.total(), "1.00".parse()?);

    Ok(())
}

#[test]
fn the_first_coupon_sticks() -> TestResult {
    let inventory = shop()?;
    let mut cart = inventory.new_cart();

    cart.add("Pen", 10)?;
    cart.use_coupon("TENNER")?;
    cart.use_coupon("SUMMER")?;

    // Still the amount coupon: 10.00 - 10.00, not 10% off.
    assert_eq!(cart.total(), "0.00".parse()?);

    Ok(())
}

#[test]
fn totals_are_stable_across_repeated_calls() -> TestResult {
    let inventory = shop()?;
    let mut cart = inventory.new_cart();

    cart.add("Cheese", 5)?;
    cart.use_coupon("SUMMER")?;

    let first = cart.total();
    let second = cart.total();

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn two_carts_share_one_inventory() -> TestResult {
    let inventory = shop()?;

    let mut first = inventory.new_cart();
    let mut second = inventory.new_cart();

    first.add("Pen", 2)?;
    second.add("Cheese", 1)?;

    assert_eq!(first.total(), "2.00".parse()?);
    assert_eq!(second.total(), "10.00".parse()?);

    Ok(())
}

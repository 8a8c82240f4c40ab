//! Inventory
//!
//! The registry of stock items and coupons. An inventory is built once
//! by repeated registration calls, validated at the point of each call,
//! and treated as read-only by every cart issued from it.

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{
    cart::Cart,
    coupons::{Coupon, CouponConfig, CouponConfigError},
    money::Money,
    promotions::{Promotion, PromotionConfig, PromotionConfigError},
};

/// Longest accepted stock item name, in characters.
pub const MAX_NAME_LEN: usize = 40;

/// Lowest accepted unit price.
fn min_unit_price() -> Decimal {
    Decimal::new(1, 2)
}

/// Highest accepted unit price.
fn max_unit_price() -> Decimal {
    Decimal::new(99_999, 2)
}

/// Errors raised at registration time.
///
/// All of these are caller-input validation failures surfaced
/// synchronously; a failing call leaves the inventory unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// Unit price outside 0.01..=999.99, or name longer than 40 characters.
    #[error("invalid parameters for item {name:?} at price {price}")]
    InvalidParameter {
        /// Name passed to registration.
        name: String,
        /// Unit price passed to registration.
        price: Money,
    },

    /// An item with this name is already registered.
    #[error("item {0:?} is already registered")]
    DuplicateItem(String),

    /// A coupon with this name is already registered.
    #[error("coupon {0:?} is already registered")]
    DuplicateCoupon(String),

    /// The promotion descriptor did not decode to a single valid rule.
    #[error("invalid promotion: {0}")]
    InvalidPromotion(#[from] PromotionConfigError),

    /// The coupon descriptor did not decode to a supported coupon type.
    #[error("unsupported coupon: {0}")]
    UnsupportedCouponType(#[from] CouponConfigError),
}

/// A catalog entry: name, unit price and optional promotion, all fixed
/// at registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockItem {
    name: String,
    price: Money,
    promotion: Option<Promotion>,
}

impl StockItem {
    fn new(name: String, price: Money, promotion: Option<Promotion>) -> Self {
        Self {
            name,
            price,
            promotion,
        }
    }

    /// The item's registered name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The item's unit price.
    #[must_use]
    pub fn price(&self) -> Money {
        self.price
    }

    /// The item's promotion, if one was registered.
    #[must_use]
    pub fn promotion(&self) -> Option<&Promotion> {
        self.promotion.as_ref()
    }
}

/// Inventory
#[derive(Debug, Default)]
pub struct Inventory {
    items: FxHashMap<String, StockItem>,
    coupons: FxHashMap<String, Coupon>,
}

impl Inventory {
    /// Create an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stock item, decoding its optional promotion descriptor.
    ///
    /// # Errors
    ///
    /// - [`InventoryError::InvalidParameter`]: price outside
    ///   0.01..=999.99 or name longer than [`MAX_NAME_LEN`] characters.
    /// - [`InventoryError::DuplicateItem`]: the name is already taken.
    /// - [`InventoryError::InvalidPromotion`]: the promotion descriptor
    ///   did not decode.
    pub fn register(
        &mut self,
        name: &str,
        price: Money,
        promotion: Option<&PromotionConfig>,
    ) -> Result<(), InventoryError> {
        if price.amount() < min_unit_price()
            || price.amount() > max_unit_price()
            || name.chars().count() > MAX_NAME_LEN
        {
            return Err(InventoryError::InvalidParameter {
                name: name.to_owned(),
                price,
            });
        }

        if self.items.contains_key(name) {
            return Err(InventoryError::DuplicateItem(name.to_owned()));
        }

        let promotion = promotion.map(Promotion::from_config).transpose()?;

        self.items.insert(
            name.to_owned(),
            StockItem::new(name.to_owned(), price, promotion),
        );

        Ok(())
    }

    /// Register a coupon, decoding its descriptor.
    ///
    /// # Errors
    ///
    /// - [`InventoryError::DuplicateCoupon`]: the name is already taken.
    /// - [`InventoryError::UnsupportedCouponType`]: the descriptor did
    ///   not decode.
    pub fn register_coupon(
        &mut self,
        name: &str,
        config: &CouponConfig,
    ) -> Result<(), InventoryError> {
        if self.coupons.contains_key(name) {
            return Err(InventoryError::DuplicateCoupon(name.to_owned()));
        }

        let coupon = Coupon::from_config(name, config)?;
        self.coupons.insert(name.to_owned(), coupon);

        Ok(())
    }

    /// Look up a stock item by name.
    #[must_use]
    pub fn item(&self, name: &str) -> Option<&StockItem> {
        self.items.get(name)
    }

    /// Look up a coupon by name.
    #[must_use]
    pub fn coupon(&self, name: &str) -> Option<&Coupon> {
        self.coupons.get(name)
    }

    /// Number of registered stock items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no stock items are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Open a new, empty cart bound to this inventory.
    #[must_use]
    pub fn new_cart(&self) -> Cart<'_> {
        Cart::new(self)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn register_then_lookup() -> TestResult {
        let mut inventory = Inventory::new();
        inventory.register("Pen", "1.00".parse()?, None)?;

        let item = inventory.item("Pen").ok_or("item missing")?;

        assert_eq!(item.name(), "Pen");
        assert_eq!(item.price(), "1.00".parse()?);
        assert!(item.promotion().is_none());

        Ok(())
    }

    #[test]
    fn register_rejects_prices_outside_range() -> TestResult {
        let mut inventory = Inventory::new();

        let too_low = inventory.register("X", "0.00".parse()?, None);
        let too_high = inventory.register("X", "1000.00".parse()?, None);

        assert!(matches!(
            too_low,
            Err(InventoryError::InvalidParameter { .. })
        ));
        assert!(matches!(
            too_high,
            Err(InventoryError::InvalidParameter { .. })
        ));
        assert!(inventory.is_empty());

        Ok(())
    }

    #[test]
    fn register_accepts_boundary_prices() -> TestResult {
        let mut inventory = Inventory::new();

        inventory.register("Cheapest", "0.01".parse()?, None)?;
        inventory.register("Dearest", "999.99".parse()?, None)?;

        assert_eq!(inventory.len(), 2);

        Ok(())
    }

    #[test]
    fn register_rejects_overlong_names() -> TestResult {
        let mut inventory = Inventory::new();
        let name = "x".repeat(MAX_NAME_LEN + 1);

        let result = inventory.register(&name, "1.00".parse()?, None);

        assert!(matches!(
            result,
            Err(InventoryError::InvalidParameter { .. })
        ));

        Ok(())
    }

    #[test]
    fn register_accepts_forty_character_names() -> TestResult {
        let mut inventory = Inventory::new();
        let name = "x".repeat(MAX_NAME_LEN);

        inventory.register(&name, "1.00".parse()?, None)?;

        assert!(inventory.item(&name).is_some());

        Ok(())
    }

    #[test]
    fn duplicate_item_is_rejected() -> TestResult {
        let mut inventory = Inventory::new();
        inventory.register("Pen", "1.00".parse()?, None)?;

        let result = inventory.register("Pen", "2.00".parse()?, None);

        assert_eq!(result, Err(InventoryError::DuplicateItem("Pen".into())));

        Ok(())
    }

    #[test]
    fn invalid_promotion_descriptor_rejects_registration() -> TestResult {
        let mut inventory = Inventory::new();

        let result = inventory.register("Pen", "1.00".parse()?, Some(&PromotionConfig::default()));

        assert!(matches!(result, Err(InventoryError::InvalidPromotion(_))));
        assert!(inventory.item("Pen").is_none());

        Ok(())
    }

    #[test]
    fn register_decodes_promotion() -> TestResult {
        let mut inventory = Inventory::new();
        inventory.register("Beer", "1.20".parse()?, Some(&PromotionConfig::package(6, 10u32)))?;

        let item = inventory.item("Beer").ok_or("item missing")?;

        assert!(matches!(
            item.promotion(),
            Some(Promotion::PackageDiscount(_))
        ));

        Ok(())
    }

    #[test]
    fn duplicate_coupon_is_rejected() -> TestResult {
        let mut inventory = Inventory::new();
        inventory.register_coupon("SUMMER", &CouponConfig::percent(10u32))?;

        let result = inventory.register_coupon("SUMMER", &CouponConfig::amount(5u32));

        assert_eq!(
            result,
            Err(InventoryError::DuplicateCoupon("SUMMER".into()))
        );

        Ok(())
    }

    #[test]
    fn unsupported_coupon_descriptor_rejects_registration() -> TestResult {
        let mut inventory = Inventory::new();

        let result = inventory.register_coupon("MYSTERY", &CouponConfig::default());

        assert!(matches!(
            result,
            Err(InventoryError::UnsupportedCouponType(_))
        ));
        assert!(inventory.coupon("MYSTERY").is_none());

        Ok(())
    }

    #[test]
    fn lookups_return_none_for_unknown_names() {
        let inventory = Inventory::new();

        assert!(inventory.item("Ghost").is_none());
        assert!(inventory.coupon("GHOST").is_none());
    }
}

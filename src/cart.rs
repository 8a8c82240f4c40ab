//! Cart
//!
//! A mutable basket bound to one read-only inventory. Lines accumulate
//! per item in insertion order; at most one coupon applies per cart.

use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    coupons::Coupon,
    inventory::{Inventory, StockItem},
    invoice,
    money::Money,
};

/// Largest quantity accepted by a single [`Cart::add`] call.
pub const MAX_LINE_QUANTITY: i32 = 99;

/// Errors raised while mutating a cart.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    /// The quantity argument was outside 0..=99.
    ///
    /// Only the incremental argument is checked; quantities accumulated
    /// over repeated calls are not re-validated.
    #[error("quantity {0} is outside the accepted range 0..={MAX_LINE_QUANTITY}")]
    QuantityOutOfRange(i32),

    /// The named item is not registered in the bound inventory.
    #[error("item {0:?} is not in the inventory")]
    ItemNotFound(String),

    /// The named coupon is not registered in the bound inventory.
    #[error("coupon {0:?} is not registered")]
    CouponNotFound(String),
}

/// One (item, quantity) pair in a cart.
#[derive(Debug, Clone, Copy)]
pub struct CartLine<'a> {
    item: &'a StockItem,
    quantity: u32,
}

impl<'a> CartLine<'a> {
    /// The stock item this line refers to.
    #[must_use]
    pub fn item(&self) -> &'a StockItem {
        self.item
    }

    /// Accumulated quantity requested for the item.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Full-price value of the line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.item.price() * self.quantity
    }

    /// Promotion delta for the line, if the item carries a promotion.
    ///
    /// Zero or negative when present.
    #[must_use]
    pub fn promotion_discount(&self) -> Option<Money> {
        self.item
            .promotion()
            .map(|promotion| promotion.discount(self.quantity, self.item.price()))
    }
}

/// Cart
#[derive(Debug)]
pub struct Cart<'a> {
    inventory: &'a Inventory,
    lines: SmallVec<[CartLine<'a>; 10]>,
    coupon: Option<&'a Coupon>,
}

impl<'a> Cart<'a> {
    pub(crate) fn new(inventory: &'a Inventory) -> Self {
        Self {
            inventory,
            lines: SmallVec::new(),
            coupon: None,
        }
    }

    /// Add a quantity of a named item, accumulating with any quantity
    /// already in the cart for that item.
    ///
    /// The quantity range is checked before the item lookup, so an
    /// out-of-range quantity for an unknown item reports the quantity.
    ///
    /// # Errors
    ///
    /// - [`CartError::QuantityOutOfRange`]: quantity outside 0..=99.
    /// - [`CartError::ItemNotFound`]: the name is not registered.
    pub fn add(&mut self, name: &str, quantity: i32) -> Result<(), CartError> {
        if !(0..=MAX_LINE_QUANTITY).contains(&quantity) {
            return Err(CartError::QuantityOutOfRange(quantity));
        }

        let quantity =
            u32::try_from(quantity).map_err(|_| CartError::QuantityOutOfRange(quantity))?;

        let item = self
            .inventory
            .item(name)
            .ok_or_else(|| CartError::ItemNotFound(name.to_owned()))?;

        if let Some(line) = self.lines.iter_mut().find(|line| line.item.name() == name) {
            line.quantity += quantity;
        } else {
            self.lines.push(CartLine { item, quantity });
        }

        Ok(())
    }

    /// Add a single unit of a named item.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ItemNotFound`] when the name is not registered.
    pub fn add_one(&mut self, name: &str) -> Result<(), CartError> {
        self.add(name, 1)
    }

    /// Apply a named coupon to the cart.
    ///
    /// The first successful call fixes the cart's coupon; later calls
    /// are no-ops, though an unknown name still fails.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::CouponNotFound`] when the name is not registered.
    pub fn use_coupon(&mut self, name: &str) -> Result<(), CartError> {
        let coupon = self
            .inventory
            .coupon(name)
            .ok_or_else(|| CartError::CouponNotFound(name.to_owned()))?;

        if self.coupon.is_none() {
            self.coupon = Some(coupon);
        }

        Ok(())
    }

    /// The applied coupon, if any.
    #[must_use]
    pub fn coupon(&self) -> Option<&'a Coupon> {
        self.coupon
    }

    /// Iterate over the cart lines in insertion order.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine<'a>> {
        self.lines.iter()
    }

    /// Number of distinct lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Full-price value of all lines, before any discount.
    #[must_use]
    pub fn gross(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::ZERO, |acc, line| acc + line.line_total())
    }

    /// Sum of all per-item promotion deltas. Zero or negative.
    #[must_use]
    pub fn promotion_discount(&self) -> Money {
        self.lines
            .iter()
            .filter_map(CartLine::promotion_discount)
            .fold(Money::ZERO, |acc, delta| acc + delta)
    }

    /// Cart value after promotions, before the coupon.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.gross() + self.promotion_discount()
    }

    /// Coupon delta against the subtotal, zero when no coupon applies.
    #[must_use]
    pub fn coupon_discount(&self) -> Money {
        self.coupon
            .map_or(Money::ZERO, |coupon| coupon.discount(self.subtotal()))
    }

    /// Total payable: gross, plus promotion deltas, plus the coupon delta.
    ///
    /// Pure and idempotent; calling it repeatedly without mutation
    /// returns the identical value.
    #[must_use]
    pub fn total(&self) -> Money {
        self.subtotal() + self.coupon_discount()
    }

    /// Render the cart as a fixed-width invoice.
    #[must_use]
    pub fn invoice(&self) -> String {
        invoice::render(self)
    }
}

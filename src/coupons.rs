//! Coupons
//!
//! Cart-level discount rules. A coupon is registered in an inventory
//! under a unique name and applied at most once per cart, to the
//! subtotal left after per-item promotions.

use std::fmt;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::money::{Money, percent_of};

/// Error decoding a [`CouponConfig`] descriptor.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CouponConfigError {
    /// A descriptor must set exactly one of `percent` or `amount`.
    #[error("a coupon must be configured with either a percent or an amount")]
    UnsupportedType,
}

/// Loose coupon descriptor, as written in catalog files.
///
/// Exactly one of the two fields must be present:
///
/// ```yaml
/// coupons:
///   - name: TENNER
///     amount: 10.00
/// ```
#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct CouponConfig {
    /// Percent off the cart subtotal.
    #[serde(default)]
    pub percent: Option<Decimal>,

    /// Flat amount off the cart subtotal, capped at the subtotal.
    #[serde(default)]
    pub amount: Option<Decimal>,
}

impl CouponConfig {
    /// Descriptor for a percent coupon.
    #[must_use]
    pub fn percent(percent: impl Into<Decimal>) -> Self {
        Self {
            percent: Some(percent.into()),
            amount: None,
        }
    }

    /// Descriptor for a flat amount coupon.
    #[must_use]
    pub fn amount(amount: impl Into<Decimal>) -> Self {
        Self {
            percent: None,
            amount: Some(amount.into()),
        }
    }
}

/// Coupon enum
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Coupon {
    /// Percent off the cart subtotal.
    Percent(PercentCoupon),

    /// Flat amount off the cart subtotal.
    Amount(AmountCoupon),
}

impl Coupon {
    /// Decode a loose descriptor into a named coupon.
    ///
    /// # Errors
    ///
    /// Returns [`CouponConfigError::UnsupportedType`] unless the
    /// descriptor sets exactly one of `percent` or `amount`.
    pub fn from_config(name: &str, config: &CouponConfig) -> Result<Self, CouponConfigError> {
        match (config.percent, config.amount) {
            (Some(percent), None) => Ok(Coupon::Percent(PercentCoupon::new(name, percent))),
            (None, Some(amount)) => Ok(Coupon::Amount(AmountCoupon::new(name, amount.into()))),
            _ => Err(CouponConfigError::UnsupportedType),
        }
    }

    /// The coupon's registered name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Coupon::Percent(percent) => percent.name(),
            Coupon::Amount(amount) => amount.name(),
        }
    }

    /// Discount delta for a cart subtotal. Always zero or negative.
    #[must_use]
    pub fn discount(&self, subtotal: Money) -> Money {
        match self {
            Coupon::Percent(percent) => percent.discount(subtotal),
            Coupon::Amount(amount) => amount.discount(subtotal),
        }
    }
}

impl fmt::Display for Coupon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coupon::Percent(percent) => percent.fmt(f),
            Coupon::Amount(amount) => amount.fmt(f),
        }
    }
}

/// A percentage off the cart subtotal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PercentCoupon {
    name: String,
    percent: Decimal,
}

impl PercentCoupon {
    /// Create a new percent coupon.
    #[must_use]
    pub fn new(name: impl Into<String>, percent: Decimal) -> Self {
        Self {
            name: name.into(),
            percent,
        }
    }

    /// The coupon's registered name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Percentage taken off the subtotal.
    #[must_use]
    pub fn percent(&self) -> Decimal {
        self.percent
    }

    /// Discount delta: `-percent × subtotal / 100`, exact.
    #[must_use]
    pub fn discount(&self, subtotal: Money) -> Money {
        Money::new(-percent_of(self.percent, subtotal.amount()))
    }
}

impl fmt::Display for PercentCoupon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}% off", self.name, self.percent.normalize())
    }
}

/// A flat amount off the cart subtotal, capped at the subtotal so the
/// coupon step alone can never drive a total negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountCoupon {
    name: String,
    amount: Money,
}

impl AmountCoupon {
    /// Create a new flat amount coupon.
    #[must_use]
    pub fn new(name: impl Into<String>, amount: Money) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }

    /// The coupon's registered name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Flat amount taken off the subtotal.
    #[must_use]
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Discount delta: the full amount, or the whole subtotal when the
    /// subtotal is smaller.
    #[must_use]
    pub fn discount(&self, subtotal: Money) -> Money {
        if subtotal < self.amount {
            -subtotal
        } else {
            -self.amount
        }
    }
}

impl fmt::Display for AmountCoupon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} off", self.name, self.amount.tabular())
    }
}

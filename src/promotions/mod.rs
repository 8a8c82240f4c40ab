//! Promotions
//!
//! Per-item discount rules. A stock item carries at most one promotion,
//! fixed at registration; the promotion is applied to the purchased
//! quantity of that item when a cart is totalled.

use std::{fmt, num::NonZeroU32};

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

use crate::money::Money;

pub mod one_free;
pub mod package_discount;
pub mod threshold_discount;

pub use one_free::OneFreePromotion;
pub use package_discount::PackageDiscountPromotion;
pub use threshold_discount::ThresholdDiscountPromotion;

/// Errors decoding a [`PromotionConfig`] descriptor.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PromotionConfigError {
    /// A descriptor must set exactly one of its rules.
    #[error("a promotion must be configured with exactly one rule")]
    RuleRequired,

    /// `package` and `threshold` tables must hold a single `n: percent` pair.
    #[error("expected a single `n: percent` pair")]
    MalformedRule,

    /// Group sizes of zero cannot cover any units.
    #[error("promotion group size must be at least 1")]
    ZeroGroupSize,
}

/// Loose promotion descriptor, as written in catalog files.
///
/// Exactly one of the three rules must be present:
///
/// ```yaml
/// promotion:
///   package: {3: 10}
/// ```
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PromotionConfig {
    /// Every n-th unit free.
    #[serde(default)]
    pub get_one_free: Option<u32>,

    /// `{n: percent}`: percent off every complete group of n units.
    #[serde(default)]
    pub package: Option<FxHashMap<u32, Decimal>>,

    /// `{n: percent}`: percent off every unit beyond the n-th.
    #[serde(default)]
    pub threshold: Option<FxHashMap<u32, Decimal>>,
}

impl PromotionConfig {
    /// Descriptor for a one-free promotion.
    #[must_use]
    pub fn one_free(every: u32) -> Self {
        Self {
            get_one_free: Some(every),
            ..Self::default()
        }
    }

    /// Descriptor for a package discount promotion.
    #[must_use]
    pub fn package(group: u32, percent: impl Into<Decimal>) -> Self {
        Self {
            package: Some(FxHashMap::from_iter([(group, percent.into())])),
            ..Self::default()
        }
    }

    /// Descriptor for a threshold discount promotion.
    #[must_use]
    pub fn threshold(after: u32, percent: impl Into<Decimal>) -> Self {
        Self {
            threshold: Some(FxHashMap::from_iter([(after, percent.into())])),
            ..Self::default()
        }
    }
}

/// Promotion enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Promotion {
    /// Every n-th unit free.
    OneFree(OneFreePromotion),

    /// Percent off every complete group of n units.
    PackageDiscount(PackageDiscountPromotion),

    /// Percent off every unit beyond the n-th.
    ThresholdDiscount(ThresholdDiscountPromotion),
}

impl Promotion {
    /// Decode a loose descriptor into a promotion.
    ///
    /// # Errors
    ///
    /// Returns a [`PromotionConfigError`] if the descriptor does not set
    /// exactly one rule, holds a malformed `n: percent` table, or names a
    /// group size of zero.
    pub fn from_config(config: &PromotionConfig) -> Result<Self, PromotionConfigError> {
        match (&config.get_one_free, &config.package, &config.threshold) {
            (Some(every), None, None) => {
                let every = NonZeroU32::new(*every).ok_or(PromotionConfigError::ZeroGroupSize)?;

                Ok(Promotion::OneFree(OneFreePromotion::new(every)))
            }
            (None, Some(rule), None) => {
                let (group, percent) = single_pair(rule)?;
                let group = NonZeroU32::new(group).ok_or(PromotionConfigError::ZeroGroupSize)?;

                Ok(Promotion::PackageDiscount(PackageDiscountPromotion::new(
                    group, percent,
                )))
            }
            (None, None, Some(rule)) => {
                let (after, percent) = single_pair(rule)?;

                Ok(Promotion::ThresholdDiscount(
                    ThresholdDiscountPromotion::new(after, percent),
                ))
            }
            _ => Err(PromotionConfigError::RuleRequired),
        }
    }

    /// Discount delta for a purchased quantity at a unit price.
    ///
    /// Always zero or negative.
    #[must_use]
    pub fn discount(&self, quantity: u32, unit_price: Money) -> Money {
        match self {
            Promotion::OneFree(one_free) => one_free.discount(quantity, unit_price),
            Promotion::PackageDiscount(package) => package.discount(quantity, unit_price),
            Promotion::ThresholdDiscount(threshold) => threshold.discount(quantity, unit_price),
        }
    }
}

impl fmt::Display for Promotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Promotion::OneFree(one_free) => one_free.fmt(f),
            Promotion::PackageDiscount(package) => package.fmt(f),
            Promotion::ThresholdDiscount(threshold) => threshold.fmt(f),
        }
    }
}

/// Extract the single `n: percent` pair from a rule table.
fn single_pair(rule: &FxHashMap<u32, Decimal>) -> Result<(u32, Decimal), PromotionConfigError> {
    let mut entries = rule.iter();

    match (entries.next(), entries.next()) {
        (Some((&n, &percent)), None) => Ok((n, percent)),
        _ => Err(PromotionConfigError::MalformedRule),
    }
}

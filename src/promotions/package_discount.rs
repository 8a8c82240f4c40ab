//! Package Discount
//!
//! A percentage off every unit that belongs to a complete group.

use std::{fmt, num::NonZeroU32};

use rust_decimal::Decimal;

use crate::money::{Money, percent_of};

/// "Get P% off for every N": units are covered by the discount in
/// complete groups of `group`; any remainder is charged at full price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageDiscountPromotion {
    group: NonZeroU32,
    percent: Decimal,
}

impl PackageDiscountPromotion {
    /// Create a new package discount promotion.
    #[must_use]
    pub fn new(group: NonZeroU32, percent: Decimal) -> Self {
        Self { group, percent }
    }

    /// Group size required for units to qualify.
    #[must_use]
    pub fn group(&self) -> NonZeroU32 {
        self.group
    }

    /// Percentage taken off each covered unit.
    #[must_use]
    pub fn percent(&self) -> Decimal {
        self.percent
    }

    /// Discount delta for a purchased quantity at a unit price.
    ///
    /// Always zero or negative: the percentage applies to
    /// `⌊quantity / group⌋ × group` units.
    #[must_use]
    pub fn discount(&self, quantity: u32, unit_price: Money) -> Money {
        let covered = (quantity / self.group.get()) * self.group.get();
        let covered_value = unit_price.amount() * Decimal::from(covered);

        Money::new(-percent_of(self.percent, covered_value))
    }
}

impl fmt::Display for PackageDiscountPromotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(get {}% off for every {})",
            self.percent.normalize(),
            self.group.get()
        )
    }
}

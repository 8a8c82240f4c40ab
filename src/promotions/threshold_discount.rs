//! Threshold Discount
//!
//! A percentage off every unit purchased beyond a threshold.

use std::fmt;

use rust_decimal::Decimal;

use crate::money::{Money, percent_of};

/// "P% off of every after the Nth": the first `after` units are charged
/// at full price, every unit beyond them is discounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdDiscountPromotion {
    after: u32,
    percent: Decimal,
}

impl ThresholdDiscountPromotion {
    /// Create a new threshold discount promotion.
    #[must_use]
    pub fn new(after: u32, percent: Decimal) -> Self {
        Self { after, percent }
    }

    /// Number of units charged at full price.
    #[must_use]
    pub fn after(&self) -> u32 {
        self.after
    }

    /// Percentage taken off each unit beyond the threshold.
    #[must_use]
    pub fn percent(&self) -> Decimal {
        self.percent
    }

    /// Discount delta for a purchased quantity at a unit price.
    ///
    /// Always zero or negative; zero when the quantity does not exceed
    /// the threshold.
    #[must_use]
    pub fn discount(&self, quantity: u32, unit_price: Money) -> Money {
        let beyond = quantity.saturating_sub(self.after);
        let discounted_value = unit_price.amount() * Decimal::from(beyond);

        Money::new(-percent_of(self.percent, discounted_value))
    }
}

impl fmt::Display for ThresholdDiscountPromotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}% off of every after the {})",
            self.percent.normalize(),
            ordinal(self.after)
        )
    }
}

/// English ordinal suffix as printed on invoices.
///
/// The `rd` case tests `n % 100`, not `n % 10`: 3 and 103 read "3rd" and
/// "103rd", while 13, 23 and 33 all read "th", and 11 reads "11st". This
/// wording is part of the fixed invoice format contract.
fn ordinal(n: u32) -> String {
    let suffix = if n % 10 == 1 {
        "st"
    } else if n % 10 == 2 {
        "nd"
    } else if n % 100 == 3 {
        "rd"
    } else {
        "th"
    };

    format!("{n}{suffix}")
}

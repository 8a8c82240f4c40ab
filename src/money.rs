//! Money
//!
//! Exact decimal monetary values. Amounts are stored exactly and only
//! rounded to two decimal places for display, so promotion and coupon
//! chains never accumulate rounding drift.

use std::{
    fmt,
    ops::{Add, AddAssign, Mul, Neg, Sub},
    str::FromStr,
};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A monetary amount backed by an exact decimal.
///
/// Positive amounts are prices and totals; discount deltas carry a
/// negative sign by convention.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero amount.
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Create a money value from an exact decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Return the exact decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether the amount is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Whether the amount is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// The amount rounded to two decimal places, away from zero on
    /// midpoints. This is the value every display path uses.
    ///
    /// Negated zero deltas lose their sign here, so a zero discount
    /// renders as `0.00` rather than `-0.00`.
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        if rounded.is_zero() { Decimal::ZERO } else { rounded }
    }

    /// Render the amount for a tabular cell: two decimal places, right
    /// aligned in a minimum width of five characters (`%5.2f`). Wider
    /// amounts are not truncated.
    #[must_use]
    pub fn tabular(&self) -> String {
        format!("{self:>5}")
    }
}

/// Exact percentage of an amount: `percent × amount / 100`.
pub(crate) fn percent_of(percent: Decimal, amount: Decimal) -> Decimal {
    percent * amount / Decimal::ONE_HUNDRED
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s).map(Money)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{:.2}", self.rounded()))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

/// Multiplication by a purchased quantity.
impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        Money(self.0 * Decimal::from(quantity))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn new_keeps_exact_amount() -> TestResult {
        let money = Money::new("1.005".parse()?);

        assert_eq!(money.amount(), "1.005".parse::<Decimal>()?);

        Ok(())
    }

    #[test]
    fn rounded_uses_midpoint_away_from_zero() -> TestResult {
        let up: Money = "1.005".parse()?;
        let down: Money = "-7.046".parse()?;

        assert_eq!(up.rounded(), "1.01".parse::<Decimal>()?);
        assert_eq!(down.rounded(), "-7.05".parse::<Decimal>()?);

        Ok(())
    }

    #[test]
    fn display_is_two_decimal_places() -> TestResult {
        assert_eq!("5".parse::<Money>()?.to_string(), "5.00");
        assert_eq!("10.5".parse::<Money>()?.to_string(), "10.50");
        assert_eq!("-6".parse::<Money>()?.to_string(), "-6.00");

        Ok(())
    }

    #[test]
    fn tabular_pads_to_five_characters() -> TestResult {
        assert_eq!("5".parse::<Money>()?.tabular(), " 5.00");
        assert_eq!("20".parse::<Money>()?.tabular(), "20.00");

        Ok(())
    }

    #[test]
    fn tabular_never_truncates_wide_amounts() -> TestResult {
        assert_eq!("123.45".parse::<Money>()?.tabular(), "123.45");
        assert_eq!("-10".parse::<Money>()?.tabular(), "-10.00");

        Ok(())
    }

    #[test]
    fn arithmetic_is_exact() -> TestResult {
        let a: Money = "0.10".parse()?;
        let b: Money = "0.20".parse()?;

        assert_eq!(a + b, "0.30".parse()?);
        assert_eq!(b - a, "0.10".parse()?);
        assert_eq!(-(a + b), "-0.30".parse()?);

        Ok(())
    }

    #[test]
    fn quantity_multiplication() -> TestResult {
        let unit: Money = "1.20".parse()?;

        assert_eq!(unit * 12, "14.40".parse()?);
        assert_eq!(unit * 0, Money::ZERO);

        Ok(())
    }

    #[test]
    fn percent_of_is_exact() -> TestResult {
        let amount: Decimal = "70.46".parse()?;

        assert_eq!(
            percent_of(Decimal::from(10), amount),
            "7.046".parse::<Decimal>()?
        );

        Ok(())
    }

    #[test]
    fn negated_zero_displays_without_a_sign() {
        assert_eq!((-Money::ZERO).to_string(), "0.00");
        assert!(!(-Money::ZERO).is_negative());
    }

    #[test]
    fn is_negative_and_is_zero() -> TestResult {
        assert!("-0.01".parse::<Money>()?.is_negative());
        assert!(!Money::ZERO.is_negative());
        assert!(Money::ZERO.is_zero());

        Ok(())
    }
}

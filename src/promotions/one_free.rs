//! One Free
//!
//! Every n-th unit of a promoted item is free.

use std::{fmt, num::NonZeroU32};

use crate::money::Money;

/// "Buy n-1, get 1 free": every complete group of `every` units contains
/// one free unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OneFreePromotion {
    every: NonZeroU32,
}

impl OneFreePromotion {
    /// Create a new one-free promotion.
    #[must_use]
    pub fn new(every: NonZeroU32) -> Self {
        Self { every }
    }

    /// Group size: one unit in every group of this many is free.
    #[must_use]
    pub fn every(&self) -> NonZeroU32 {
        self.every
    }

    /// Discount delta for a purchased quantity at a unit price.
    ///
    /// Always zero or negative: one unit price off per complete group.
    #[must_use]
    pub fn discount(&self, quantity: u32, unit_price: Money) -> Money {
        let free_units = quantity / self.every.get();

        -(unit_price * free_units)
    }
}

impl fmt::Display for OneFreePromotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(buy {}, get 1 free)", self.every.get() - 1)
    }
}

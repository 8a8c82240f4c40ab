//! Tillroll
//!
//! Tillroll is a deterministic retail pricing engine: an inventory of
//! stock items with per-item promotions, carts that accumulate
//! quantities and accept a single cart-level coupon, and byte-exact
//! fixed-width invoice rendering.
//!
//! All price arithmetic is exact decimal; amounts are only rounded to
//! two decimal places at the display boundary.

pub mod cart;
pub mod catalog;
pub mod coupons;
pub mod inventory;
pub mod invoice;
pub mod money;
pub mod prelude;
pub mod promotions;

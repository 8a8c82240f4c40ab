//! Tillroll prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, CartLine, MAX_LINE_QUANTITY},
    catalog::{CatalogError, load_catalog, parse_catalog},
    coupons::{AmountCoupon, Coupon, CouponConfig, CouponConfigError, PercentCoupon},
    inventory::{Inventory, InventoryError, MAX_NAME_LEN, StockItem},
    invoice,
    money::Money,
    promotions::{
        OneFreePromotion, PackageDiscountPromotion, Promotion, PromotionConfig,
        PromotionConfigError, ThresholdDiscountPromotion,
    },
};

//! Catalog
//!
//! YAML catalog documents. External callers describe an inventory as
//! data; every entry is funnelled through the same registration
//! validation as programmatic calls.
//!
//! ```yaml
//! items:
//!   - name: Beer
//!     price: 1.20
//!     promotion:
//!       package: {6: 10}
//! coupons:
//!   - name: SUMMER
//!     percent: 10
//! ```

use std::{fs, path::Path};

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    coupons::CouponConfig,
    inventory::{Inventory, InventoryError},
    money::Money,
    promotions::PromotionConfig,
};

/// Errors loading a catalog document.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid YAML for the catalog shape.
    #[error("failed to parse catalog: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// An entry failed registration validation.
    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

/// Top-level catalog document.
#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    items: Vec<CatalogItem>,

    #[serde(default)]
    coupons: Vec<CatalogCoupon>,
}

/// One stock item entry.
#[derive(Debug, Deserialize)]
struct CatalogItem {
    name: String,
    price: Decimal,

    #[serde(default)]
    promotion: Option<PromotionConfig>,
}

/// One coupon entry; the discount rule fields sit beside the name.
#[derive(Debug, Deserialize)]
struct CatalogCoupon {
    name: String,

    #[serde(flatten)]
    config: CouponConfig,
}

/// Parse a catalog document into a registered inventory.
///
/// # Errors
///
/// Returns a [`CatalogError`] if the YAML does not parse or any entry
/// fails registration validation.
pub fn parse_catalog(document: &str) -> Result<Inventory, CatalogError> {
    let catalog: CatalogFile = serde_norway::from_str(document)?;
    let mut inventory = Inventory::new();

    for item in &catalog.items {
        inventory.register(&item.name, Money::new(item.price), item.promotion.as_ref())?;
    }

    for coupon in &catalog.coupons {
        inventory.register_coupon(&coupon.name, &coupon.config)?;
    }

    Ok(inventory)
}

/// Read and parse a catalog file into a registered inventory.
///
/// # Errors
///
/// Returns a [`CatalogError`] if the file cannot be read, the YAML does
/// not parse, or any entry fails registration validation.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Inventory, CatalogError> {
    let document = fs::read_to_string(path)?;

    parse_catalog(&document)
}

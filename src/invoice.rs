//! Invoice
//!
//! Fixed-width text rendering of a priced cart. The layout is a
//! byte-exact external contract: two cells per row, a 50-character left
//! cell holding name and quantity and a 10-character right cell holding
//! the amount, with `+`/`-` border lines matching the cell widths.

use crate::cart::Cart;

/// Total width of the left cell, border characters included.
const LEFT_CELL_WIDTH: usize = 50;

/// Total width of the amount cell, border characters excluded on the left.
const AMOUNT_CELL_WIDTH: usize = 10;

/// Interior width of the left cell: the row prefix `"| "` and suffix
/// `" |"` take four characters.
const LEFT_INTERIOR: usize = LEFT_CELL_WIDTH - 4;

/// Interior width available to an amount before its trailing space.
const AMOUNT_INTERIOR: usize = AMOUNT_CELL_WIDTH - 1;

/// Render a cart as a fixed-width invoice.
///
/// Lines appear in cart insertion order; a promotion sub-row follows
/// each promoted line, a coupon row follows the items when a coupon is
/// applied, and a bordered TOTAL row closes the table.
#[must_use]
pub fn render(cart: &Cart<'_>) -> String {
    let mut out = String::new();

    out.push_str(&border());
    out.push_str(&row("Name", "qty", "price"));
    out.push_str(&border());

    for line in cart.lines() {
        let item = line.item();

        out.push_str(&row(
            item.name(),
            &line.quantity().to_string(),
            &line.line_total().tabular(),
        ));

        if let (Some(promotion), Some(delta)) = (item.promotion(), line.promotion_discount()) {
            out.push_str(&row(&format!("  {promotion}"), "", &delta.tabular()));
        }
    }

    if let Some(coupon) = cart.coupon() {
        let delta = coupon.discount(cart.subtotal());

        out.push_str(&row(&format!("Coupon {coupon}"), "", &delta.tabular()));
    }

    out.push_str(&border());
    out.push_str(&row("TOTAL", "", &cart.total().tabular()));
    out.push_str(&border());

    out
}

/// Horizontal border line.
fn border() -> String {
    format!(
        "+{}+{}+\n",
        "-".repeat(LEFT_CELL_WIDTH - 2),
        "-".repeat(AMOUNT_CELL_WIDTH)
    )
}

/// One table row: `left` left-aligned and `right` right-aligned inside
/// the left cell, `rightest` right-aligned inside the amount cell.
fn row(left: &str, right: &str, rightest: &str) -> String {
    let left_pad = LEFT_INTERIOR.saturating_sub(left.chars().count() + right.chars().count());
    let amount_pad = AMOUNT_INTERIOR.saturating_sub(rightest.chars().count());

    format!(
        "| {left}{}{right} |{}{rightest} |\n",
        " ".repeat(left_pad),
        " ".repeat(amount_pad)
    )
}

//! Text tables for cart contents.

use tindahan_core::Money;

use crate::cart::CartLine;

pub const EMPTY_CART: &str = "Your cart is empty.";

const COMPACT_HEADER: &str = "Product ID      Name      Price    Quantity";
const RULE_WIDTH: usize = 62;

/// Render `lines` as a table. The full form adds a subtotal column and a
/// trailing total; the compact form is used inside order listings.
pub fn lines_table(lines: &[CartLine], total: Money, compact: bool) -> String {
    if lines.is_empty() {
        return format!("{EMPTY_CART}\n");
    }

    let mut out = String::new();
    if compact {
        out.push_str(COMPACT_HEADER);
        out.push('\n');
    } else {
        out.push_str(&format!(
            "{:<15}{:<15}{:<10}{:<10}{:<12}\n",
            "Product ID", "Name", "Price", "Quantity", "Subtotal"
        ));
        out.push_str(&"-".repeat(RULE_WIDTH));
        out.push('\n');
    }

    for line in lines {
        let item = line.item();
        if compact {
            out.push_str(&format!(
                "{:<15}{:<15}{:<10}{:<10}\n",
                item.code(),
                item.name(),
                item.unit_price(),
                line.quantity()
            ));
        } else {
            out.push_str(&format!(
                "{:<15}{:<15}{:<10}{:<10}{:<12}\n",
                item.code(),
                item.name(),
                item.unit_price(),
                line.quantity(),
                line.subtotal()
            ));
        }
    }

    if !compact {
        out.push_str(&format!("\nTotal Amount: {}\n", total.labelled()));
    }
    out
}

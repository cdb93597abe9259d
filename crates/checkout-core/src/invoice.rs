//! # Invoice Rendering
//!
//! Formats a cart into the fixed-width plain-text report.
//!
//! ## Layout
//! ```text
//! +------------------------------------------------+----------+
//! | Name                                       qty |    price |
//! +------------------------------------------------+----------+
//! | Shampoo                                      3 |    30.00 |
//! |   (buy 2, get 1 free)                          |   -10.00 |
//! | Coupon TEA-TIME - 20% off                      |    -4.00 |
//! +------------------------------------------------+----------+
//! | TOTAL                                          |    16.00 |
//! +------------------------------------------------+----------+
//! ```
//!
//! Column widths are part of the external contract (golden-output tests
//! exist downstream): name 40 left-justified, qty 4 right-justified, price 8
//! right-justified; promotion sub-rows indent the message into a 44-wide
//! cell. Product rows show the undiscounted line price; promotion and
//! coupon rows show their discount negated; only the TOTAL row is net.
//!
//! The renderer is a pure read-only view over a [`Cart`] - it holds nothing
//! but the cart reference and never mutates it.

use std::fmt;

use crate::cart::Cart;

/// Horizontal border. The first cell spans name + qty (48 columns inside
/// the `+` corners), the second spans the price column (10 columns).
const BORDER: &str = "+------------------------------------------------+----------+\n";

// =============================================================================
// Invoice
// =============================================================================

/// A printable invoice for one cart. Rendered via [`fmt::Display`].
#[derive(Debug)]
pub struct Invoice<'a, 'inv> {
    cart: &'a Cart<'inv>,
}

impl<'a, 'inv> Invoice<'a, 'inv> {
    /// Creates an invoice view over `cart`.
    pub fn new(cart: &'a Cart<'inv>) -> Self {
        Invoice { cart }
    }

    fn write_row(f: &mut fmt::Formatter<'_>, name: &str, qty: &str, price: &str) -> fmt::Result {
        writeln!(f, "| {:<40}  {:>4} | {:>8} |", name, qty, price)
    }

    fn write_promotion_row(
        f: &mut fmt::Formatter<'_>,
        message: &str,
        discount: &str,
    ) -> fmt::Result {
        writeln!(f, "|   {:<44} | {:>8} |", message, discount)
    }
}

impl fmt::Display for Invoice<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(BORDER)?;
        Self::write_row(f, "Name", "qty", "price")?;
        f.write_str(BORDER)?;

        for item in self.cart.items() {
            Self::write_row(
                f,
                item.name(),
                &item.count().to_string(),
                &item.line_total().to_string(),
            )?;
            let message = item.message();
            if !message.is_empty() {
                Self::write_promotion_row(f, &message, &(-item.discount()).to_string())?;
            }
        }

        if let Some(coupon) = self.cart.coupon() {
            // The coupon discounts the pre-coupon products total.
            let discount = coupon.discount(self.cart.products_total());
            Self::write_row(f, &coupon.message(), "", &(-discount).to_string())?;
        }

        f.write_str(BORDER)?;
        Self::write_row(f, "TOTAL", "", &self.cart.total().to_string())?;
        f.write_str(BORDER)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::Inventory;
    use crate::types::PromotionSpec;

    #[test]
    fn test_border_geometry() {
        let line = BORDER.trim_end();
        assert_eq!(line.len(), 61);
        assert_eq!(line.matches('-').count(), 58);
        assert_eq!(&line[0..1], "+");
        assert_eq!(&line[49..50], "+");
        assert_eq!(&line[60..61], "+");
    }

    #[test]
    fn test_every_line_is_uniform_width() {
        let mut inventory = Inventory::new();
        inventory
            .register("Milk", "2.50".parse().unwrap(), PromotionSpec::None)
            .unwrap();
        inventory
            .register(
                "Shampoo",
                "10.00".parse().unwrap(),
                PromotionSpec::BuyNGetOneFree { nth: 3 },
            )
            .unwrap();

        let mut cart = inventory.new_cart();
        cart.add("Milk", 2).unwrap();
        cart.add("Shampoo", 3).unwrap();

        for line in cart.invoice().lines() {
            assert_eq!(line.len(), 61, "ragged line: {:?}", line);
        }
    }

    #[test]
    fn test_plain_item_has_no_promotion_sub_row() {
        let mut inventory = Inventory::new();
        inventory
            .register("Milk", "2.50".parse().unwrap(), PromotionSpec::None)
            .unwrap();

        let mut cart = inventory.new_cart();
        cart.add("Milk", 2).unwrap();

        let invoice = cart.invoice();
        assert!(invoice.contains("| Milk                                         2 |     5.00 |\n"));
        // No promotion sub-row (those are the only lines indented after `|`)
        assert!(invoice.lines().all(|line| !line.starts_with("|   ")));
    }
}

//! # Cart
//!
//! A shopping cart bound to one inventory.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Operations                                   │
//! │                                                                         │
//! │  Caller Action              Check                    State Change       │
//! │  ─────────────              ─────                    ────────────       │
//! │                                                                         │
//! │  add("Milk", 2) ──────────► registered?       ────►  item.count += 2    │
//! │                             1 ≤ new count ≤ 99                          │
//! │                                                                         │
//! │  add("Milk", -1) ─────────► same checks       ────►  item.count -= 1    │
//! │                             (never to 0 or below)                       │
//! │                                                                         │
//! │  use_coupon("TEA-TIME") ──► none applied yet? ────►  coupon = lookup    │
//! │                                                                         │
//! │  products_total() ────────► (read only)                                 │
//! │  total() ─────────────────► (read only)                                 │
//! │  invoice() ───────────────► (read only)                                 │
//! │                                                                         │
//! │  Line items keep insertion order; the invoice renders rows in the      │
//! │  order products first entered the cart.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! The cart borrows its inventory (`&'inv Inventory`) and each line item
//! borrows its inventory entry. No product data is copied into the cart,
//! and the borrow checker guarantees the inventory cannot change while the
//! cart is open - the "read-mostly registry, session-scoped cart" model
//! without any locking.

use tracing::debug;

use crate::coupon::Coupon;
use crate::error::{CoreError, CoreResult};
use crate::inventory::Inventory;
use crate::invoice::Invoice;
use crate::money::Money;
use crate::promotion::PricedProduct;
use crate::validation::validate_new_count;
use crate::MAX_ITEM_COUNT;

// =============================================================================
// Cart Item
// =============================================================================

/// A line item: one inventory entry plus a unit count.
///
/// References the registered `PricedProduct` by identity (not a copy) and
/// accumulates its count across repeated adds.
#[derive(Debug, Clone)]
pub struct CartItem<'inv> {
    entry: &'inv PricedProduct,
    count: i64,
}

impl<'inv> CartItem<'inv> {
    /// The product name.
    #[inline]
    pub fn name(&self) -> &str {
        self.entry.name()
    }

    /// Units of this product currently in the cart (1..=99).
    #[inline]
    pub fn count(&self) -> i64 {
        self.count
    }

    /// Undiscounted total for this line (unit price × count).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.entry.line_total(self.count)
    }

    /// Promotion discount for this line.
    #[inline]
    pub fn discount(&self) -> Money {
        self.entry.discount(self.count)
    }

    /// Discounted total for this line.
    #[inline]
    pub fn promoted_price(&self) -> Money {
        self.entry.promoted_price(self.count)
    }

    /// The promotion message (empty when the product has no promotion).
    #[inline]
    pub fn message(&self) -> String {
        self.entry.message()
    }
}

// =============================================================================
// Cart
// =============================================================================

/// A shopping cart: ordered line items plus at most one coupon.
#[derive(Debug, Clone)]
pub struct Cart<'inv> {
    inventory: &'inv Inventory,
    items: Vec<CartItem<'inv>>,
    coupon: Option<&'inv Coupon>,
}

impl<'inv> Cart<'inv> {
    /// Creates an empty cart bound to `inventory`.
    /// Usually reached through [`Inventory::new_cart`].
    pub fn new(inventory: &'inv Inventory) -> Self {
        Cart {
            inventory,
            items: Vec::new(),
            coupon: None,
        }
    }

    /// Adds `more` units of a registered product.
    ///
    /// The line item is created on first add and accumulates afterwards:
    /// `add(p, 2)` then `add(p, 3)` equals a single `add(p, 5)`. A negative
    /// `more` reduces an existing count - this doubles as removal down to a
    /// count of 1, but never to 0 (dropping a line entirely is not a cart
    /// operation).
    ///
    /// ## Errors
    /// - [`CoreError::UndefinedProduct`] - name was never registered
    /// - [`CoreError::TooManyUnits`] - new count would exceed 99
    /// - [`CoreError::InvalidCount`] - new count would be 0 or below
    ///
    /// All checks run first; a failed add leaves the cart untouched (no
    /// empty line item is left behind).
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::inventory::Inventory;
    /// use checkout_core::money::Money;
    /// use checkout_core::types::PromotionSpec;
    ///
    /// let mut inventory = Inventory::new();
    /// inventory.register("Milk", "2.50".parse().unwrap(), PromotionSpec::None).unwrap();
    ///
    /// let mut cart = inventory.new_cart();
    /// cart.add("Milk", 2).unwrap();
    /// assert_eq!(cart.total(), Money::from_cents(500));
    /// ```
    pub fn add(&mut self, name: &str, more: i64) -> CoreResult<()> {
        let inventory: &'inv Inventory = self.inventory;
        let entry = inventory
            .product(name)
            .ok_or_else(|| CoreError::UndefinedProduct {
                name: name.to_string(),
            })?;

        let position = self.items.iter().position(|item| item.name() == name);
        let current = position.map_or(0, |idx| self.items[idx].count);
        // An overflowing add already broke a count boundary, in the
        // direction the sign of `more` points
        let new_count = match current.checked_add(more) {
            Some(count) => count,
            None if more > 0 => {
                return Err(CoreError::TooManyUnits {
                    name: name.to_string(),
                    requested: more,
                    max: MAX_ITEM_COUNT,
                })
            }
            None => {
                return Err(CoreError::InvalidCount {
                    name: name.to_string(),
                    requested: more,
                })
            }
        };
        validate_new_count(name, new_count)?;

        debug!(product = %name, more, count = new_count, "Updated cart line");

        match position {
            Some(idx) => self.items[idx].count = new_count,
            None => self.items.push(CartItem {
                entry,
                count: new_count,
            }),
        }
        Ok(())
    }

    /// Adds a single unit of a registered product.
    pub fn add_one(&mut self, name: &str) -> CoreResult<()> {
        self.add(name, 1)
    }

    /// Applies a coupon by name, at most once per cart.
    ///
    /// An unknown coupon name is NOT an error: the lookup result is stored
    /// as-is, so a misspelled name silently yields "no discount applied".
    /// Deliberate and load-bearing for compatibility - see the note on
    /// `Cart.use` in DESIGN.md before "fixing" this.
    ///
    /// ## Errors
    /// - [`CoreError::CouponAlreadyUsed`] - a coupon was already applied
    pub fn use_coupon(&mut self, name: &str) -> CoreResult<()> {
        if self.coupon.is_some() {
            return Err(CoreError::CouponAlreadyUsed);
        }

        let inventory: &'inv Inventory = self.inventory;
        self.coupon = inventory.coupon(name);

        debug!(coupon = %name, found = self.coupon.is_some(), "Applied coupon");
        Ok(())
    }

    /// Sum of promoted line prices, before any coupon.
    pub fn products_total(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(), |sum, item| sum + item.promoted_price())
    }

    /// The amount to pay: products total minus the coupon discount, if any.
    pub fn total(&self) -> Money {
        let products_total = self.products_total();
        match self.coupon {
            Some(coupon) => products_total - coupon.discount(products_total),
            None => products_total,
        }
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[CartItem<'inv>] {
        &self.items
    }

    /// The applied coupon, if a known one was used.
    pub fn coupon(&self) -> Option<&'inv Coupon> {
        self.coupon
    }

    /// Renders the printable invoice for the cart's current state.
    pub fn invoice(&self) -> String {
        Invoice::new(self).to_string()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Coupons
//!
//! Cart-level discounts applied once against the products total.
//!
//! ## Coupon Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Coupon Variants                                  │
//! │                                                                         │
//! │  Percent   discount(from) = from × percent / 100                        │
//! │                                                                         │
//! │  Amount    discount(from) = min(amount, from)                           │
//! │                                                                         │
//! │  Invariant: discount(from) ≤ from for both variants - a coupon can     │
//! │  bring a cart to 0.00, never below.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::{Money, Percent};
use crate::types::CouponSpec;

// =============================================================================
// Coupon
// =============================================================================

/// A named cart-level discount.
///
/// Percentages are validated at registration (≤ 100%), and `discount`
/// additionally caps its result at the amount it is applied to, so a
/// hand-built coupon cannot break the invariant either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Coupon {
    /// Takes a percentage off the amount.
    Percent { name: String, percent: Percent },

    /// Takes a fixed amount off, capped at the amount itself.
    Amount { name: String, amount: Money },
}

impl Coupon {
    /// Builds a coupon from its registration spec.
    pub fn from_spec(name: impl Into<String>, spec: CouponSpec) -> Self {
        let name = name.into();
        match spec {
            CouponSpec::Percent { percent } => Coupon::Percent { name, percent },
            CouponSpec::Amount { amount } => Coupon::Amount { name, amount },
        }
    }

    /// The coupon name (inventory key).
    pub fn name(&self) -> &str {
        match self {
            Coupon::Percent { name, .. } => name,
            Coupon::Amount { name, .. } => name,
        }
    }

    /// Computes the discount against `from`.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::coupon::Coupon;
    /// use checkout_core::money::Money;
    ///
    /// let coupon = Coupon::Amount {
    ///     name: "WELCOME".to_string(),
    ///     amount: Money::from_cents(10_000),
    /// };
    /// // Capped: never discounts more than the base
    /// assert_eq!(coupon.discount(Money::from_cents(4000)), Money::from_cents(4000));
    /// ```
    pub fn discount(&self, from: Money) -> Money {
        match *self {
            Coupon::Percent { percent, .. } => from.percent_of(percent).min(from),
            Coupon::Amount { amount, .. } => amount.min(from),
        }
    }

    /// Human-readable description, rendered verbatim on the invoice's
    /// coupon row.
    pub fn message(&self) -> String {
        match self {
            Coupon::Percent { name, percent } => {
                format!("Coupon {} - {}% off", name, percent)
            }
            Coupon::Amount { name, amount } => {
                format!("Coupon {} - {} off", name, amount)
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

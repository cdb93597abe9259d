//! # Promotions
//!
//! Quantity-based discount rules attached to a product at registration.
//!
//! ## Discount Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Promotion Variants                                 │
//! │                                                                         │
//! │  None             discount = 0                                          │
//! │                                                                         │
//! │  BuyNGetOneFree   every nth unit is free                                │
//! │                   discount = unit_price × (count / nth)                 │
//! │                                                                         │
//! │  Package          every complete group of `size` units is discounted    │
//! │                   discount = pct × unit_price × (count / size × size)   │
//! │                                                                         │
//! │  Threshold        units beyond `threshold` are discounted               │
//! │                   discount = pct × unit_price × (count − threshold)     │
//! │                                                                         │
//! │  Invariant: 0 ≤ discount(count) ≤ unit_price × count for every         │
//! │  variant - a promotion can make a line free, never negative.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why a Closed Enum?
//! The promotion set is fixed and exhaustive: `match` forces every new
//! variant to define its discount AND its invoice message, so the two can
//! never drift apart.

use serde::{Deserialize, Serialize};

use crate::money::{Money, Percent};
use crate::types::{Product, PromotionSpec};

// =============================================================================
// Promotion
// =============================================================================

/// A quantity-based discount rule.
///
/// Parameters are validated by the inventory at registration
/// (`nth ≥ 1`, `size ≥ 1`, `threshold ≥ 0`, percentages ≤ 100), so the
/// computations here are infallible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum Promotion {
    /// Plain pricing, no discount, no invoice message.
    #[default]
    None,

    /// Every `nth` unit purchased is free.
    BuyNGetOneFree { nth: i64 },

    /// Every complete group of `size` units gets `percent_off` off.
    Package { size: i64, percent_off: Percent },

    /// Units beyond `threshold` get `percent_off` off.
    Threshold { threshold: i64, percent_off: Percent },
}

impl Promotion {
    /// Builds a promotion from its registration spec.
    pub fn from_spec(spec: PromotionSpec) -> Self {
        match spec {
            PromotionSpec::None => Promotion::None,
            PromotionSpec::BuyNGetOneFree { nth } => Promotion::BuyNGetOneFree { nth },
            PromotionSpec::Package { size, percent_off } => {
                Promotion::Package { size, percent_off }
            }
            PromotionSpec::Threshold {
                threshold,
                percent_off,
            } => Promotion::Threshold {
                threshold,
                percent_off,
            },
        }
    }

    /// Computes the discount for `count` units at `unit_price`.
    ///
    /// The result is clamped to `[0, unit_price × count]`: a promotion can
    /// at most make the line free.
    pub fn discount(&self, unit_price: Money, count: i64) -> Money {
        let raw = match *self {
            Promotion::None => Money::zero(),
            Promotion::BuyNGetOneFree { nth } => unit_price.times(count / nth),
            Promotion::Package { size, percent_off } => {
                // Only complete packages qualify; the remainder is full price.
                let covered = (count / size) * size;
                unit_price.times(covered).percent_of(percent_off)
            }
            Promotion::Threshold {
                threshold,
                percent_off,
            } => {
                if count <= threshold {
                    Money::zero()
                } else {
                    unit_price.times(count - threshold).percent_of(percent_off)
                }
            }
        };
        raw.min(unit_price.times(count)).max(Money::zero())
    }

    /// Human-readable description of the active promotion, rendered verbatim
    /// on invoice sub-rows. Empty for [`Promotion::None`].
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Percent;
    /// use checkout_core::promotion::Promotion;
    ///
    /// let promo = Promotion::BuyNGetOneFree { nth: 3 };
    /// assert_eq!(promo.message(), "(buy 2, get 1 free)");
    ///
    /// let promo = Promotion::Threshold { threshold: 2, percent_off: Percent::from_percent(50) };
    /// assert_eq!(promo.message(), "(50% off of every after the 2nd)");
    /// ```
    pub fn message(&self) -> String {
        match *self {
            Promotion::None => String::new(),
            Promotion::BuyNGetOneFree { nth } => format!("(buy {}, get 1 free)", nth - 1),
            Promotion::Package { size, percent_off } => {
                format!("(get {}% off for every {})", percent_off, size)
            }
            Promotion::Threshold {
                threshold,
                percent_off,
            } => format!(
                "({}% off of every after the {})",
                percent_off,
                ordinal(threshold)
            ),
        }
    }
}

/// Renders a count as an ordinal: 1st, 2nd, 3rd, then a plain "th" suffix.
fn ordinal(n: i64) -> String {
    match n {
        1 => "1st".to_string(),
        2 => "2nd".to_string(),
        3 => "3rd".to_string(),
        _ => format!("{}th", n),
    }
}

// =============================================================================
// Priced Product
// =============================================================================

/// A product together with its promotion - the unit stored in inventory.
///
/// Product and promotion are created together at registration and share a
/// lifetime; carts reference this pair, never a copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedProduct {
    /// The immutable product (name + unit price).
    pub product: Product,

    /// The discount rule active for this product.
    pub promotion: Promotion,
}

impl PricedProduct {
    /// Couples a product with its promotion.
    pub fn new(product: Product, promotion: Promotion) -> Self {
        PricedProduct { product, promotion }
    }

    /// The product name (inventory key).
    #[inline]
    pub fn name(&self) -> &str {
        &self.product.name
    }

    /// Undiscounted total for `count` units.
    #[inline]
    pub fn line_total(&self, count: i64) -> Money {
        self.product.line_total(count)
    }

    /// Promotion discount for `count` units.
    #[inline]
    pub fn discount(&self, count: i64) -> Money {
        self.promotion.discount(self.product.unit_price, count)
    }

    /// Discounted total: `line_total(count) − discount(count)`.
    pub fn promoted_price(&self, count: i64) -> Money {
        self.line_total(count) - self.discount(count)
    }

    /// The promotion message for invoice sub-rows.
    #[inline]
    pub fn message(&self) -> String {
        self.promotion.message()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Domain Types
//!
//! Core domain types shared across checkout-core.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  PromotionSpec  │   │   CouponSpec    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  kind: none     │   │  kind: percent  │       │
//! │  │  unit_price     │   │  buyNGetOneFree │   │  kind: amount   │       │
//! │  └─────────────────┘   │  package        │   └─────────────────┘       │
//! │                        │  threshold      │                              │
//! │                        └─────────────────┘                              │
//! │                                                                         │
//! │  The Spec enums are the `{kind, ...params}` registration surface:      │
//! │  serde's internal tagging IS the wire format, and the closed Rust      │
//! │  enums make unrepresentable promotion kinds a type error.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use crate::money::{Money, Percent};

// =============================================================================
// Product
// =============================================================================

/// A product available for sale: a name and a unit price.
///
/// ## Lifecycle
/// Constructed once by `Inventory::register` after validation, then never
/// mutated. Everything else (promotions, carts, invoices) reads it through
/// shared references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Display name, unique within an inventory (at most 40 characters).
    pub name: String,

    /// Unit price in the open interval (0.00, 1000.00).
    pub unit_price: Money,
}

impl Product {
    /// Creates a product. Validation happens in the inventory before this
    /// constructor runs.
    pub fn new(name: impl Into<String>, unit_price: Money) -> Self {
        Product {
            name: name.into(),
            unit_price,
        }
    }

    /// The undiscounted total for `count` units (unit price × count).
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    /// use checkout_core::types::Product;
    ///
    /// let milk = Product::new("Milk", Money::from_major_minor(2, 50));
    /// assert_eq!(milk.line_total(2), Money::from_cents(500));
    /// ```
    #[inline]
    pub fn line_total(&self, count: i64) -> Money {
        self.unit_price.times(count)
    }
}

// =============================================================================
// Promotion Spec
// =============================================================================

/// Registration payload selecting a promotion kind plus its parameters.
///
/// ## Wire Format
/// Internally tagged (`kind` discriminator), camelCase - exactly the
/// `{kind, ...params}` shape of the external registration API:
///
/// ```json
/// { "kind": "package", "size": 3, "percentOff": 20.0 }
/// ```
///
/// A payload without a `kind` tag means "no promotion" (the default), which
/// [`PromotionSpec::from_value`] handles explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PromotionSpec {
    /// Plain pricing, no discount.
    #[default]
    None,

    /// Every `nth` unit purchased is free.
    BuyNGetOneFree { nth: i64 },

    /// Every complete group of `size` units gets `percent_off` off.
    Package {
        size: i64,
        #[serde(rename = "percentOff")]
        percent_off: Percent,
    },

    /// Units beyond `threshold` get `percent_off` off.
    Threshold {
        threshold: i64,
        #[serde(rename = "percentOff")]
        percent_off: Percent,
    },
}

impl PromotionSpec {
    /// Known `kind` tags, used to tell "unknown kind" apart from "known
    /// kind with malformed fields" when parsing untyped payloads.
    const KINDS: [&'static str; 4] = ["none", "buyNGetOneFree", "package", "threshold"];

    /// Parses an untyped `{kind, ...params}` payload.
    ///
    /// ## Behavior
    /// - Missing `kind` → [`PromotionSpec::None`] (no promotion is the default)
    /// - Unrecognized `kind` → [`CoreError::UnknownPromotionKind`]
    /// - Recognized `kind`, bad fields → [`CoreError::MalformedSpec`]
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::types::PromotionSpec;
    /// use serde_json::json;
    ///
    /// let spec = PromotionSpec::from_value(&json!({"kind": "buyNGetOneFree", "nth": 3}));
    /// assert_eq!(spec.unwrap(), PromotionSpec::BuyNGetOneFree { nth: 3 });
    ///
    /// let spec = PromotionSpec::from_value(&json!({}));
    /// assert_eq!(spec.unwrap(), PromotionSpec::None);
    ///
    /// assert!(PromotionSpec::from_value(&json!({"kind": "bogo"})).is_err());
    /// ```
    pub fn from_value(value: &Value) -> CoreResult<Self> {
        let kind = match value.get("kind").and_then(Value::as_str) {
            Some(kind) => kind,
            None => return Ok(PromotionSpec::None),
        };
        if !Self::KINDS.contains(&kind) {
            return Err(CoreError::UnknownPromotionKind {
                kind: kind.to_string(),
            });
        }
        serde_json::from_value(value.clone()).map_err(|e| CoreError::MalformedSpec {
            kind: kind.to_string(),
            reason: e.to_string(),
        })
    }
}

// =============================================================================
// Coupon Spec
// =============================================================================

/// Registration payload selecting a coupon kind plus its parameters.
///
/// Same tagging as [`PromotionSpec`], but with no default: a coupon payload
/// without a recognizable `kind` is an error, never silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CouponSpec {
    /// Takes `percent` off the amount it is applied to.
    Percent { percent: Percent },

    /// Takes a fixed amount off, capped at the amount it is applied to.
    Amount { amount: Money },
}

impl CouponSpec {
    const KINDS: [&'static str; 2] = ["percent", "amount"];

    /// Parses an untyped `{kind, ...params}` payload.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    /// use checkout_core::types::CouponSpec;
    /// use serde_json::json;
    ///
    /// let spec = CouponSpec::from_value(&json!({"kind": "amount", "amount": 1000}));
    /// assert_eq!(spec.unwrap(), CouponSpec::Amount { amount: Money::from_cents(1000) });
    ///
    /// assert!(CouponSpec::from_value(&json!({"kind": "loyalty"})).is_err());
    /// assert!(CouponSpec::from_value(&json!({})).is_err());
    /// ```
    pub fn from_value(value: &Value) -> CoreResult<Self> {
        let kind = value
            .get("kind")
            .and_then(Value::as_str)
            .unwrap_or_default();
        if !Self::KINDS.contains(&kind) {
            return Err(CoreError::UnknownCouponKind {
                kind: kind.to_string(),
            });
        }
        serde_json::from_value(value.clone()).map_err(|e| CoreError::MalformedSpec {
            kind: kind.to_string(),
            reason: e.to_string(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

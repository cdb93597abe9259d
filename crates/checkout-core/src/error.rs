//! # Error Types
//!
//! Domain-specific error types for checkout-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Flow                                      │
//! │                                                                         │
//! │  Inventory registration                                                 │
//! │  ├── DuplicateName / InvalidName / InvalidPrice / InvalidPromotion      │
//! │  └── DuplicateCoupon / InvalidCoupon                                    │
//! │                                                                         │
//! │  Spec parsing ({kind, ...} payloads)                                    │
//! │  └── UnknownPromotionKind / UnknownCouponKind / MalformedSpec           │
//! │                                                                         │
//! │  Cart mutation                                                          │
//! │  └── UndefinedProduct / TooManyUnits / InvalidCount / CouponAlreadyUsed │
//! │                                                                         │
//! │  Every error is raised BEFORE any state changes: a failed register or  │
//! │  add leaves the inventory and cart exactly as they were.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, offending value)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent registration or cart rule violations. They are
/// synchronous, raised at the point of violation, and always propagate to
/// the caller; the component itself never retries or recovers.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A product with this name is already registered.
    ///
    /// ## When This Occurs
    /// - Second `register` call for the same name, regardless of whether
    ///   the price or promotion parameters differ
    #[error("product '{name}' is already in inventory")]
    DuplicateName { name: String },

    /// Product name exceeds the maximum length.
    #[error("invalid product name '{name}': longer than {max} characters")]
    InvalidName { name: String, max: usize },

    /// Unit price is outside the open interval (0.00, 1000.00).
    ///
    /// The price is committed to cents before this check, so `"0.004"`
    /// (rounding to 0.00) is rejected and `"999.994"` (rounding to 999.99)
    /// is accepted.
    #[error("invalid unit price {price}: must be above 0.00 and below 1000.00")]
    InvalidPrice { price: Money },

    /// Promotion parameters are out of their valid domain.
    ///
    /// ## When This Occurs
    /// - `nth` or `size` below 1, `threshold` below 0
    /// - percentage above 100%
    ///
    /// Promotions are validated here, at registration, so the discount
    /// computations themselves are infallible.
    #[error("invalid promotion: {reason}")]
    InvalidPromotion { reason: String },

    /// A coupon with this name is already registered.
    #[error("coupon '{name}' is already in inventory")]
    DuplicateCoupon { name: String },

    /// Coupon parameters are out of their valid domain.
    #[error("invalid coupon: {reason}")]
    InvalidCoupon { reason: String },

    /// A `{kind, ...}` promotion payload carries an unrecognized kind tag.
    #[error("unknown promotion kind '{kind}'")]
    UnknownPromotionKind { kind: String },

    /// A `{kind, ...}` coupon payload carries an unrecognized or missing
    /// kind tag.
    #[error("unknown coupon kind '{kind}'")]
    UnknownCouponKind { kind: String },

    /// A `{kind, ...}` payload has a recognized kind but malformed fields.
    #[error("malformed {kind} spec: {reason}")]
    MalformedSpec { kind: String, reason: String },

    /// The cart was asked for a product the inventory has never seen.
    #[error("product '{name}' is not in inventory")]
    UndefinedProduct { name: String },

    /// Adding would push a line item above the per-item unit limit.
    #[error("too many units of '{name}': {requested} exceeds the limit of {max}")]
    TooManyUnits {
        name: String,
        requested: i64,
        max: i64,
    },

    /// Adding would push a line item to zero or below.
    ///
    /// Negative quantities are allowed as long as the resulting count stays
    /// at 1 or above; reducing to exactly 0 is rejected.
    #[error("invalid unit count {requested} for '{name}': must be at least 1")]
    InvalidCount { name: String, requested: i64 },

    /// The cart already has a coupon applied (set-once semantics).
    #[error("a coupon is already applied to this cart")]
    CouponAlreadyUsed,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

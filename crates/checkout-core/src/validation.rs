//! # Validation Module
//!
//! Input validation for inventory registration and cart mutation.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validate-Then-Mutate                               │
//! │                                                                         │
//! │  register(name, price, spec)                                            │
//! │  ├── duplicate check (inventory)                                        │
//! │  ├── validate_product_name  ← THIS MODULE                               │
//! │  ├── validate_unit_price    ← THIS MODULE                               │
//! │  ├── validate_promotion_spec← THIS MODULE                               │
//! │  └── only now: store the product                                        │
//! │                                                                         │
//! │  cart.add(name, more)                                                   │
//! │  ├── inventory lookup                                                   │
//! │  ├── validate_new_count     ← THIS MODULE                               │
//! │  └── only now: update the line item                                     │
//! │                                                                         │
//! │  Every check runs BEFORE any state changes, so a failed call leaves    │
//! │  inventory and cart untouched.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CouponSpec, PromotionSpec};
use crate::{MAX_ITEM_COUNT, MAX_PRODUCT_NAME_LEN, MAX_UNIT_PRICE_CENTS, MIN_UNIT_PRICE_CENTS};

// =============================================================================
// Registration Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - At most [`MAX_PRODUCT_NAME_LEN`] characters (the invoice name column
///   is exactly that wide)
///
/// ## Example
/// ```rust
/// use checkout_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Green Tea").is_ok());
/// assert!(validate_product_name(&"A".repeat(41)).is_err());
/// ```
pub fn validate_product_name(name: &str) -> CoreResult<()> {
    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(CoreError::InvalidName {
            name: name.to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Strictly above 0.00 and strictly below 1000.00, checked on the
///   cents value (the price has already been committed to 2 decimals)
///
/// ## Example
/// ```rust
/// use checkout_core::money::Money;
/// use checkout_core::validation::validate_unit_price;
///
/// assert!(validate_unit_price(Money::from_cents(1)).is_ok());      // 0.01
/// assert!(validate_unit_price(Money::from_cents(99_999)).is_ok()); // 999.99
/// assert!(validate_unit_price(Money::zero()).is_err());
/// assert!(validate_unit_price(Money::from_cents(100_000)).is_err());
/// ```
pub fn validate_unit_price(price: Money) -> CoreResult<()> {
    if price.cents() < MIN_UNIT_PRICE_CENTS || price.cents() > MAX_UNIT_PRICE_CENTS {
        return Err(CoreError::InvalidPrice { price });
    }

    Ok(())
}

/// Validates promotion parameters so discount computation is infallible.
///
/// ## Rules
/// - `nth ≥ 1` and `size ≥ 1` (both are divisors)
/// - `threshold ≥ 0`
/// - percentages at most 100%
pub fn validate_promotion_spec(spec: &PromotionSpec) -> CoreResult<()> {
    match *spec {
        PromotionSpec::None => Ok(()),
        PromotionSpec::BuyNGetOneFree { nth } => {
            if nth < 1 {
                return Err(CoreError::InvalidPromotion {
                    reason: format!("nth must be at least 1, got {}", nth),
                });
            }
            Ok(())
        }
        PromotionSpec::Package { size, percent_off } => {
            if size < 1 {
                return Err(CoreError::InvalidPromotion {
                    reason: format!("package size must be at least 1, got {}", size),
                });
            }
            validate_percent_off(percent_off.bps())
        }
        PromotionSpec::Threshold {
            threshold,
            percent_off,
        } => {
            if threshold < 0 {
                return Err(CoreError::InvalidPromotion {
                    reason: format!("threshold must not be negative, got {}", threshold),
                });
            }
            validate_percent_off(percent_off.bps())
        }
    }
}

fn validate_percent_off(bps: u32) -> CoreResult<()> {
    if bps > 10_000 {
        return Err(CoreError::InvalidPromotion {
            reason: "percentage must be at most 100".to_string(),
        });
    }

    Ok(())
}

/// Validates coupon parameters.
///
/// ## Rules
/// - Percent coupons: at most 100%
/// - Amount coupons: not negative (the cap at the cart total happens at
///   application time)
pub fn validate_coupon_spec(spec: &CouponSpec) -> CoreResult<()> {
    match *spec {
        CouponSpec::Percent { percent } => {
            if percent.bps() > 10_000 {
                return Err(CoreError::InvalidCoupon {
                    reason: "percentage must be at most 100".to_string(),
                });
            }
            Ok(())
        }
        CouponSpec::Amount { amount } => {
            if amount.is_negative() {
                return Err(CoreError::InvalidCoupon {
                    reason: format!("amount must not be negative, got {}", amount),
                });
            }
            Ok(())
        }
    }
}

// =============================================================================
// Cart Validators
// =============================================================================

/// Validates the count a line item would have after an add.
///
/// ## Rules
/// - At most [`MAX_ITEM_COUNT`] (99) units per line item
/// - At least 1 - negative adds may reduce a count but never to 0 or below
///
/// ## Example
/// ```rust
/// use checkout_core::validation::validate_new_count;
///
/// assert!(validate_new_count("Milk", 99).is_ok());
/// assert!(validate_new_count("Milk", 100).is_err());
/// assert!(validate_new_count("Milk", 0).is_err());
/// ```
pub fn validate_new_count(name: &str, new_count: i64) -> CoreResult<()> {
    if new_count > MAX_ITEM_COUNT {
        return Err(CoreError::TooManyUnits {
            name: name.to_string(),
            requested: new_count,
            max: MAX_ITEM_COUNT,
        });
    }

    if new_count <= 0 {
        return Err(CoreError::InvalidCount {
            name: name.to_string(),
            requested: new_count,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Percent;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Milk").is_ok());
        assert!(validate_product_name(&"A".repeat(40)).is_ok());
        assert!(validate_product_name(&"A".repeat(41)).is_err());
        // 40 characters, even multi-byte ones, fit the name column
        assert!(validate_product_name(&"é".repeat(40)).is_ok());
    }

    #[test]
    fn test_validate_unit_price_boundaries() {
        assert!(validate_unit_price(Money::from_cents(1)).is_ok());
        assert!(validate_unit_price(Money::from_cents(99_999)).is_ok());

        assert!(validate_unit_price(Money::zero()).is_err());
        assert!(validate_unit_price(Money::from_cents(-100)).is_err());
        assert!(validate_unit_price(Money::from_cents(100_000)).is_err());
    }

    #[test]
    fn test_validate_promotion_spec() {
        assert!(validate_promotion_spec(&PromotionSpec::None).is_ok());
        assert!(validate_promotion_spec(&PromotionSpec::BuyNGetOneFree { nth: 1 }).is_ok());
        assert!(validate_promotion_spec(&PromotionSpec::BuyNGetOneFree { nth: 0 }).is_err());

        assert!(validate_promotion_spec(&PromotionSpec::Package {
            size: 0,
            percent_off: Percent::from_percent(20),
        })
        .is_err());
        assert!(validate_promotion_spec(&PromotionSpec::Package {
            size: 3,
            percent_off: Percent::from_percent(101),
        })
        .is_err());

        assert!(validate_promotion_spec(&PromotionSpec::Threshold {
            threshold: 0,
            percent_off: Percent::from_percent(100),
        })
        .is_ok());
        assert!(validate_promotion_spec(&PromotionSpec::Threshold {
            threshold: -1,
            percent_off: Percent::from_percent(50),
        })
        .is_err());
    }

    #[test]
    fn test_validate_coupon_spec() {
        assert!(validate_coupon_spec(&CouponSpec::Percent {
            percent: Percent::from_percent(100),
        })
        .is_ok());
        assert!(validate_coupon_spec(&CouponSpec::Percent {
            percent: Percent::from_percent(101),
        })
        .is_err());

        assert!(validate_coupon_spec(&CouponSpec::Amount {
            amount: Money::zero(),
        })
        .is_ok());
        assert!(validate_coupon_spec(&CouponSpec::Amount {
            amount: Money::from_cents(-1),
        })
        .is_err());
    }

    #[test]
    fn test_validate_new_count() {
        assert!(validate_new_count("Milk", 1).is_ok());
        assert!(validate_new_count("Milk", 99).is_ok());

        assert!(matches!(
            validate_new_count("Milk", 100),
            Err(CoreError::TooManyUnits { .. })
        ));
        assert!(matches!(
            validate_new_count("Milk", 0),
            Err(CoreError::InvalidCount { .. })
        ));
        assert!(matches!(
            validate_new_count("Milk", -5),
            Err(CoreError::InvalidCount { .. })
        ));
    }
}

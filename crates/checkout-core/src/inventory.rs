//! # Inventory
//!
//! The append-only registry of priced products and coupons.
//!
//! ## Registration Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Inventory Operations                                │
//! │                                                                         │
//! │  register("Shampoo", 10.00, buyNGetOneFree{nth: 3})                     │
//! │       │                                                                 │
//! │       ├── duplicate? ──► Err(DuplicateName)                             │
//! │       ├── name > 40 chars? ──► Err(InvalidName)                         │
//! │       ├── price outside (0, 1000)? ──► Err(InvalidPrice)                │
//! │       ├── bad promotion params? ──► Err(InvalidPromotion)               │
//! │       │                                                                 │
//! │       └── OK ──► products.push(PricedProduct)                           │
//! │                                                                         │
//! │  There is no delete and no update: the registry is append-only for     │
//! │  the session. Carts borrow the inventory, so the borrow checker        │
//! │  guarantees nothing is registered while a cart is open.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cart::Cart;
use crate::coupon::Coupon;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::promotion::{PricedProduct, Promotion};
use crate::types::{CouponSpec, Product, PromotionSpec};
use crate::validation::{
    validate_coupon_spec, validate_product_name, validate_promotion_spec, validate_unit_price,
};

// =============================================================================
// Inventory
// =============================================================================

/// Registry of named priced products and named coupons.
///
/// ## Storage
/// Plain vectors with linear lookup by name. Registries are session-sized
/// (tens of entries), insertion order falls out for free, and there is no
/// hashing overhead on the hot read path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    products: Vec<PricedProduct>,
    coupons: Vec<Coupon>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Inventory::default()
    }

    /// Registers a product with its promotion.
    ///
    /// All checks run before anything is stored; a failed call leaves the
    /// inventory unchanged.
    ///
    /// ## Errors
    /// - [`CoreError::DuplicateName`] - name already registered (parameters
    ///   on the second call are irrelevant)
    /// - [`CoreError::InvalidName`] - name longer than 40 characters
    /// - [`CoreError::InvalidPrice`] - price not strictly between 0.00 and
    ///   1000.00
    /// - [`CoreError::InvalidPromotion`] - promotion parameters out of domain
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::inventory::Inventory;
    /// use checkout_core::types::PromotionSpec;
    ///
    /// let mut inventory = Inventory::new();
    /// inventory
    ///     .register("Shampoo", "10.00".parse().unwrap(), PromotionSpec::BuyNGetOneFree { nth: 3 })
    ///     .unwrap();
    /// assert!(inventory.has_product("Shampoo"));
    /// ```
    pub fn register(
        &mut self,
        name: &str,
        unit_price: Money,
        spec: PromotionSpec,
    ) -> CoreResult<()> {
        if self.has_product(name) {
            return Err(CoreError::DuplicateName {
                name: name.to_string(),
            });
        }
        validate_product_name(name)?;
        validate_unit_price(unit_price)?;
        validate_promotion_spec(&spec)?;

        debug!(name = %name, price = %unit_price, "Registering product");

        self.products.push(PricedProduct::new(
            Product::new(name, unit_price),
            Promotion::from_spec(spec),
        ));
        Ok(())
    }

    /// Registers a coupon.
    ///
    /// ## Errors
    /// - [`CoreError::DuplicateCoupon`] - name already registered
    /// - [`CoreError::InvalidCoupon`] - coupon parameters out of domain
    pub fn register_coupon(&mut self, name: &str, spec: CouponSpec) -> CoreResult<()> {
        if self.coupon(name).is_some() {
            return Err(CoreError::DuplicateCoupon {
                name: name.to_string(),
            });
        }
        validate_coupon_spec(&spec)?;

        debug!(name = %name, "Registering coupon");

        self.coupons.push(Coupon::from_spec(name, spec));
        Ok(())
    }

    /// Checks whether a product name is registered.
    pub fn has_product(&self, name: &str) -> bool {
        self.product(name).is_some()
    }

    /// Looks up a priced product by name.
    pub fn product(&self, name: &str) -> Option<&PricedProduct> {
        self.products.iter().find(|p| p.name() == name)
    }

    /// Looks up a coupon by name.
    pub fn coupon(&self, name: &str) -> Option<&Coupon> {
        self.coupons.iter().find(|c| c.name() == name)
    }

    /// Opens a new empty cart bound to this inventory.
    ///
    /// The cart borrows the inventory immutably, so registration is
    /// impossible while any cart is open - the registry is read-only from
    /// a cart's perspective by construction.
    pub fn new_cart(&self) -> Cart<'_> {
        Cart::new(self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # checkout-core: Pure Retail Pricing Logic
//!
//! This crate is the **heart** of Checkout. It models products, promotions,
//! coupons, shopping carts and printable invoices as pure business logic
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Checkout Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            Caller (CLI / test harness / service layer)          │   │
//! │  │      register products & coupons ──► fill cart ──► invoice      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ checkout-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │ inventory │  │   cart    │  │  invoice  │  │   │
//! │  │   │   Money   │  │ Promotion │  │   Cart    │  │ fixed-    │  │   │
//! │  │   │  Percent  │  │  Coupon   │  │ CartItem  │  │ width     │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - `Money` in integer cents and `Percent` in basis points
//! - [`error`] - Domain error types
//! - [`validation`] - Pre-mutation business rule validation
//! - [`types`] - `Product` and the `{kind, ...}` registration specs
//! - [`promotion`] - Quantity-based discount rules
//! - [`coupon`] - Cart-level discounts
//! - [`inventory`] - Append-only product/coupon registry
//! - [`cart`] - Line items, coupon application, totals
//! - [`invoice`] - Fixed-width invoice rendering
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same registrations + same cart = same invoice, always
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: all monetary values are cents (i64), never floats
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//! 5. **Validate Then Mutate**: a failed operation changes no state
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::{CouponSpec, Inventory, Percent, PromotionSpec};
//!
//! let mut inventory = Inventory::new();
//! inventory
//!     .register("Shampoo", "10.00".parse()?, PromotionSpec::BuyNGetOneFree { nth: 3 })?;
//! inventory.register_coupon("TEA-TIME", CouponSpec::Percent {
//!     percent: Percent::from_percent(20),
//! })?;
//!
//! let mut cart = inventory.new_cart();
//! cart.add("Shampoo", 3)?;       // third one is free: 20.00
//! cart.use_coupon("TEA-TIME")?;  // 20% off: 16.00
//!
//! assert_eq!(cart.total().to_string(), "16.00");
//! println!("{}", cart.invoice());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod coupon;
pub mod error;
pub mod inventory;
pub mod invoice;
pub mod money;
pub mod promotion;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use checkout_core::Inventory` instead of
// `use checkout_core::inventory::Inventory`

pub use cart::{Cart, CartItem};
pub use coupon::Coupon;
pub use error::{CoreError, CoreResult};
pub use inventory::Inventory;
pub use invoice::Invoice;
pub use money::{Money, MoneyParseError, Percent};
pub use promotion::{PricedProduct, Promotion};
pub use types::{CouponSpec, Product, PromotionSpec};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name, in characters.
///
/// ## Business Reason
/// The invoice name column is exactly this wide; a longer name would break
/// the fixed-width report downstream consumers parse.
pub const MAX_PRODUCT_NAME_LEN: usize = 40;

/// Maximum units of a single product in a cart line.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g. typing 100 instead of 10) and
/// keeps the invoice qty column within its 4-character cell.
pub const MAX_ITEM_COUNT: i64 = 99;

/// Lowest registrable unit price, in cents (prices must be above 0.00).
pub const MIN_UNIT_PRICE_CENTS: i64 = 1;

/// Highest registrable unit price, in cents (prices must be below 1000.00).
pub const MAX_UNIT_PRICE_CENTS: i64 = 99_999;

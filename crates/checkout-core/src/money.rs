//! # Money Module
//!
//! Provides the `Money` and `Percent` types for handling monetary values and
//! discount rates safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  On an invoice that is a visible defect: totals drift by a cent and    │
//! │  golden-output tests break.                                             │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "10.00" parses to 1000 cents; every sum, product and discount is    │
//! │    exact integer arithmetic. Rounding happens exactly once, where a    │
//! │    percentage is applied, half-up to the nearest cent.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::money::{Money, Percent};
//!
//! // Create from cents (preferred) or parse a decimal string
//! let price = Money::from_cents(1099); // 10.99
//! let parsed: Money = "10.99".parse().unwrap();
//! assert_eq!(price, parsed);
//!
//! // Arithmetic operations
//! let line = price * 3;                       // 32.97
//! let off = line.percent_of(Percent::from_percent(10)); // 3.30
//! assert_eq!((line - off).to_string(), "29.67");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

use thiserror::Error;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for rendered discounts
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support (serialized as plain cents)
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Product.unit_price ──► PricedProduct.line_total ──► Promotion discount │
/// │                                                                         │
/// │  Cart.products_total ──► Coupon discount ──► Cart.total ──► Invoice     │
/// │                                                                         │
/// │  EVERY monetary value in the system flows through this type            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents 10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let price = Money::from_major_minor(10, 99); // 10.99
    /// assert_eq!(price.cents(), 1099);
    ///
    /// let discount = Money::from_major_minor(-5, 50); // -5.50
    /// assert_eq!(discount.cents(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -5.50, not -4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the smaller of two Money values.
    ///
    /// Used to cap discounts at the amount being discounted.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Money(self.0.min(other.0))
    }

    /// Applies a percentage and returns the resulting portion.
    ///
    /// This is the ONLY place monetary rounding happens: the product of
    /// cents and basis points is rounded half-up to the nearest cent.
    /// Callers never re-round the result.
    ///
    /// ## Implementation
    /// Integer math in i128 to prevent overflow:
    /// `(cents × bps + 5000) / 10000` (the +5000 rounds half-up)
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::{Money, Percent};
    ///
    /// let total = Money::from_cents(8900); // 89.00
    /// let off = total.percent_of(Percent::from_percent(20));
    /// assert_eq!(off.cents(), 1780); // 17.80
    /// ```
    pub fn percent_of(&self, percent: Percent) -> Money {
        let cents = (self.0 as i128 * percent.bps() as i128 + 5000) / 10000;
        Money::from_cents(cents as i64)
    }

    /// Multiplies money by a unit count.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // 2.99
    /// let line_total = unit_price.times(3);
    /// assert_eq!(line_total.cents(), 897); // 8.97
    /// ```
    #[inline]
    pub const fn times(&self, count: i64) -> Self {
        Money(self.0 * count)
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Errors produced when parsing a decimal string into [`Money`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    /// The input was empty or contained no digits.
    #[error("empty amount")]
    Empty,

    /// The input contained a character that is not a digit, sign or point.
    #[error("invalid character {0:?} in amount")]
    InvalidCharacter(char),

    /// The amount does not fit in the cents representation.
    #[error("amount out of range")]
    OutOfRange,
}

/// Parses decimal strings like `"10"`, `"10.5"` or `"10.99"` into cents.
///
/// Fractional digits beyond the second are rounded half-up, so `"1.005"`
/// parses to 101 cents. This mirrors a fixed 2-decimal currency: the value
/// is committed to cents at the boundary and stays exact afterwards.
///
/// ## Example
/// ```rust
/// use checkout_core::money::Money;
///
/// let a: Money = "2.50".parse().unwrap();
/// assert_eq!(a.cents(), 250);
///
/// let b: Money = "-0.05".parse().unwrap();
/// assert_eq!(b.cents(), -5);
///
/// assert!("12,34".parse::<Money>().is_err());
/// ```
impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (whole, fraction) = match digits.split_once('.') {
            Some((w, f)) => (w, f),
            None => (digits, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(MoneyParseError::Empty);
        }
        if let Some(bad) = whole.chars().find(|c| !c.is_ascii_digit()) {
            return Err(MoneyParseError::InvalidCharacter(bad));
        }
        if let Some(bad) = fraction.chars().find(|c| !c.is_ascii_digit()) {
            return Err(MoneyParseError::InvalidCharacter(bad));
        }

        let major: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| MoneyParseError::OutOfRange)?
        };

        // First two fractional digits are cents; the third decides rounding.
        let mut frac = fraction.chars();
        let tens = frac.next().map_or(0, |c| c as i64 - '0' as i64);
        let ones = frac.next().map_or(0, |c| c as i64 - '0' as i64);
        let round_up = frac.next().map_or(false, |c| c >= '5');

        let mut cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(tens * 10 + ones))
            .ok_or(MoneyParseError::OutOfRange)?;
        if round_up {
            cents = cents.checked_add(1).ok_or(MoneyParseError::OutOfRange)?;
        }

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Fixed 2-decimal rendering: `12.50`, `-6.00`, `0.00`.
///
/// ## Note
/// No currency symbol. This is exactly what invoice cells need; a UI layer
/// is free to prepend a symbol for display.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.units().abs(), self.cents_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a unit count.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: i64) -> Self {
        Money(self.0 * count)
    }
}

/// Negation (invoices render discounts as negative amounts).
impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(-self.0)
    }
}

// =============================================================================
// Percent Type
// =============================================================================

/// A discount rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 2000 bps = 20%, 1250 bps = 12.5%
///
/// Storing rates as integers keeps discount math in pure integer arithmetic
/// and makes equality exact, while still allowing fractional percentages
/// down to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Percent(u32);

impl Percent {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Percent(bps)
    }

    /// Creates a rate from a whole percentage: `from_percent(20)` = 20%.
    #[inline]
    pub const fn from_percent(percent: u32) -> Self {
        Percent(percent * 100)
    }

    /// Creates a rate from a fractional percentage (boundary use only).
    pub fn from_percentage(pct: f64) -> Self {
        Percent((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        Percent(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Percent {
    fn default() -> Self {
        Percent::zero()
    }
}

impl From<f64> for Percent {
    fn from(pct: f64) -> Self {
        Percent::from_percentage(pct)
    }
}

impl From<Percent> for f64 {
    fn from(percent: Percent) -> Self {
        percent.percentage()
    }
}

/// Renders the percentage with trailing zeros trimmed: `15`, `12.5`, `8.25`.
///
/// Promotion and coupon messages interpolate this verbatim, so a whole
/// percentage must not render a decimal point.
impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac == 0 {
            write!(f, "{}", whole)
        } else if frac % 10 == 0 {
            write!(f, "{}.{}", whole, frac / 10)
        } else {
            write!(f, "{}.{:02}", whole, frac)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.units(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(10, 99);
        assert_eq!(money.cents(), 1099);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5.50");
        assert_eq!(format!("{}", Money::from_cents(-5)), "-0.05");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
    }

    #[test]
    fn test_parse() {
        assert_eq!("10".parse::<Money>().unwrap().cents(), 1000);
        assert_eq!("10.5".parse::<Money>().unwrap().cents(), 1050);
        assert_eq!("10.99".parse::<Money>().unwrap().cents(), 1099);
        assert_eq!(".5".parse::<Money>().unwrap().cents(), 50);
        assert_eq!("-2.50".parse::<Money>().unwrap().cents(), -250);
        assert_eq!(" 2.98 ".parse::<Money>().unwrap().cents(), 298);
    }

    #[test]
    fn test_parse_rounds_half_up_on_third_digit() {
        assert_eq!("1.005".parse::<Money>().unwrap().cents(), 101);
        assert_eq!("1.004".parse::<Money>().unwrap().cents(), 100);
        assert_eq!("999.999".parse::<Money>().unwrap().cents(), 100_000);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Money>().is_err());
        assert!("-".parse::<Money>().is_err());
        assert!("12,34".parse::<Money>().is_err());
        assert!("1.2.3".parse::<Money>().is_err());
        assert!("ten".parse::<Money>().is_err());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);
        assert_eq!(a.times(4).cents(), 4000);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_percent_of_exact() {
        // 89.00 at 20% = 17.80 exactly
        let total = Money::from_cents(8900);
        assert_eq!(total.percent_of(Percent::from_percent(20)).cents(), 1780);
    }

    #[test]
    fn test_percent_of_rounds_half_up() {
        // 10.01 at 50% = 5.005 → 5.01
        let amount = Money::from_cents(1001);
        assert_eq!(amount.percent_of(Percent::from_percent(50)).cents(), 501);

        // 10.00 at 8.25% = 0.825 → 0.83
        let amount = Money::from_cents(1000);
        assert_eq!(amount.percent_of(Percent::from_bps(825)).cents(), 83);
    }

    #[test]
    fn test_min_caps_discounts() {
        let base = Money::from_cents(4000);
        let discount = Money::from_cents(10000);
        assert_eq!(discount.min(base), base);
        assert_eq!(base.min(discount), base);
    }

    #[test]
    fn test_percent_display() {
        assert_eq!(Percent::from_percent(15).to_string(), "15");
        assert_eq!(Percent::from_bps(1250).to_string(), "12.5");
        assert_eq!(Percent::from_bps(825).to_string(), "8.25");
        assert_eq!(Percent::zero().to_string(), "0");
    }

    #[test]
    fn test_percent_from_percentage() {
        assert_eq!(Percent::from_percentage(8.25).bps(), 825);
        assert_eq!(Percent::from_percentage(20.0).bps(), 2000);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_cents(100);
        assert!(positive.is_positive());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
    }
}

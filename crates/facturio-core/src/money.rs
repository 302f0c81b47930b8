//! # Money Module
//!
//! Fixed-point numeric types for all financial math in Facturio.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A quote that recomputes on every keystroke must be bit-stable:         │
//! │  recomputing twice on unchanged input has to produce identical          │
//! │  output, or the editor fires phantom change events forever.             │
//! │                                                                         │
//! │  OUR SOLUTION: integers everywhere                                      │
//! │    Money    = cents        (i64)                                        │
//! │    Rate     = basis points (u32)   2000 bps = 20%                       │
//! │    Quantity = thousandths  (i64)   2500 = 2.5 m²                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use facturio_core::money::{Money, Quantity, Rate};
//!
//! let unit_price = Money::from_cents(10_000);     // 100.00
//! let line = unit_price.multiply_quantity(Quantity::from_whole(3));
//! assert_eq!(line.cents(), 30_000);               // 300.00
//!
//! let vat = line.apply_rate(Rate::from_bps(2000)); // 20%
//! assert_eq!(vat.cents(), 6_000);                  // 60.00
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use ts_rs::TS;

/// Divides with rounding half away from zero.
///
/// Quantities and prices may legitimately be negative (discount rows,
/// credit lines), so rounding has to be symmetric around zero; the
/// usual `(n + half) / d` trick would bias negative amounts upward.
const fn div_round_half_away(n: i128, d: i128) -> i64 {
    let half = d / 2;
    if n >= 0 {
        ((n + half) / d) as i64
    } else {
        ((n - half) / d) as i64
    }
}

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (centimes for DH).
///
/// ## Design Decisions
/// - **i64 (signed)**: negative values are permitted (credits, discount rows)
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support; serializes as a bare number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use facturio_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // 10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion (dirhams, euros, ...).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
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

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Applies a percentage rate, rounding half away from zero.
    ///
    /// This single function covers both derived amounts on a document:
    /// VAT (`subTotal × vatRate`) and deposit (`totalTTC × depositRate`).
    ///
    /// ## Implementation
    /// Integer math through i128: `amount_cents × bps / 10_000`, with the
    /// half-divisor added before dividing so the result rounds instead of
    /// truncating.
    ///
    /// ## Example
    /// ```rust
    /// use facturio_core::money::{Money, Rate};
    ///
    /// let sub_total = Money::from_cents(100_000);      // 1000.00
    /// let vat = sub_total.apply_rate(Rate::from_bps(2000)); // 20%
    /// assert_eq!(vat.cents(), 20_000);                 // 200.00
    ///
    /// // Rounding: 10.00 at 8.25% = 0.825 → 0.83
    /// let tax = Money::from_cents(1000).apply_rate(Rate::from_bps(825));
    /// assert_eq!(tax.cents(), 83);
    /// ```
    pub fn apply_rate(&self, rate: Rate) -> Money {
        Money(div_round_half_away(
            self.0 as i128 * rate.bps() as i128,
            10_000,
        ))
    }

    /// Multiplies a unit price by a fixed-point quantity.
    ///
    /// The auto-total of a regular line item is exactly this product,
    /// rounded to cents half away from zero.
    ///
    /// ## Example
    /// ```rust
    /// use facturio_core::money::{Money, Quantity};
    ///
    /// let unit_price = Money::from_cents(4_050);           // 40.50
    /// let total = unit_price.multiply_quantity(Quantity::from_milli(2_500)); // × 2.5
    /// assert_eq!(total.cents(), 10_125);                   // 101.25
    /// ```
    pub fn multiply_quantity(&self, qty: Quantity) -> Money {
        Money(div_round_half_away(
            self.0 as i128 * qty.milli() as i128,
            1_000,
        ))
    }
}

/// Display implementation shows money in a human-readable format.
///
/// This is for debugging and logs. The frontend owns real formatting
/// (currency symbol placement, locale separators).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(-self.0)
    }
}

/// Multiplication by integer (for whole quantities).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summing line contributions into a subtotal.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Rate Type
// =============================================================================

/// A percentage rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 2000 bps = 20% (standard Moroccan VAT), 5000 bps = 50% deposit.
///
/// The same type carries both the VAT rate and the deposit percentage;
/// they are the same kind of number applied to different bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rate(u32);

impl Rate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// Creates a rate from a percentage (for convenience).
    ///
    /// ## Example
    /// ```rust
    /// use facturio_core::money::Rate;
    ///
    /// assert_eq!(Rate::from_percentage(20.0).bps(), 2000);
    /// assert_eq!(Rate::from_percentage(8.25).bps(), 825);
    /// ```
    pub fn from_percentage(pct: f64) -> Self {
        Rate((pct * 100.0).round() as u32)
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
        Rate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Rate {
    fn default() -> Self {
        Rate::zero()
    }
}

// =============================================================================
// Quantity Type
// =============================================================================

/// A line-item quantity in fixed-point thousandths.
///
/// Construction quotes are routinely priced in fractional units
/// (2.5 m², 1.75 h), so a plain integer quantity does not cut it and a
/// float would break bit-stable recomputes. Thousandths give three
/// decimal places, which covers every observed input.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Quantity(i64);

impl Quantity {
    /// Creates a quantity from thousandths.
    #[inline]
    pub const fn from_milli(milli: i64) -> Self {
        Quantity(milli)
    }

    /// Creates a whole-number quantity.
    ///
    /// ## Example
    /// ```rust
    /// use facturio_core::money::Quantity;
    ///
    /// assert_eq!(Quantity::from_whole(3).milli(), 3000);
    /// ```
    #[inline]
    pub const fn from_whole(units: i64) -> Self {
        Quantity(units * 1_000)
    }

    /// Returns the raw value in thousandths.
    #[inline]
    pub const fn milli(&self) -> i64 {
        self.0
    }

    /// Zero quantity.
    #[inline]
    pub const fn zero() -> Self {
        Quantity(0)
    }

    /// Checks if the quantity is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

/// Display trims trailing zeros: `3`, `2.5`, `1.125`.
impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 1_000;
        let frac = (self.0 % 1_000).abs();
        if frac == 0 {
            return write!(f, "{}", whole);
        }
        let sign = if self.0 < 0 && whole == 0 { "-" } else { "" };
        let s = format!("{:03}", frac);
        write!(f, "{}{}.{}", sign, whole, s.trim_end_matches('0'))
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
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 250, -50]
            .iter()
            .map(|c| Money::from_cents(*c))
            .sum();
        assert_eq!(total.cents(), 300);
    }

    #[test]
    fn test_apply_rate_basic() {
        // 1000.00 at 20% = 200.00
        let amount = Money::from_cents(100_000);
        assert_eq!(amount.apply_rate(Rate::from_bps(2000)).cents(), 20_000);
    }

    #[test]
    fn test_apply_rate_with_rounding() {
        // 10.00 at 8.25% = 0.825 → 0.83
        let amount = Money::from_cents(1000);
        assert_eq!(amount.apply_rate(Rate::from_bps(825)).cents(), 83);
    }

    #[test]
    fn test_apply_rate_negative_symmetric() {
        // Rounding must be symmetric around zero
        let credit = Money::from_cents(-1000);
        assert_eq!(credit.apply_rate(Rate::from_bps(825)).cents(), -83);
    }

    #[test]
    fn test_apply_rate_zero() {
        let amount = Money::from_cents(123_456);
        assert_eq!(amount.apply_rate(Rate::zero()).cents(), 0);
    }

    #[test]
    fn test_multiply_quantity_whole() {
        let unit_price = Money::from_cents(1000);
        let total = unit_price.multiply_quantity(Quantity::from_whole(3));
        assert_eq!(total.cents(), 3000);
    }

    #[test]
    fn test_multiply_quantity_fractional() {
        // 40.50 × 2.5 = 101.25
        let unit_price = Money::from_cents(4050);
        let total = unit_price.multiply_quantity(Quantity::from_milli(2500));
        assert_eq!(total.cents(), 10_125);
    }

    #[test]
    fn test_multiply_quantity_negative() {
        // Discount row: -1 × 50.00 = -50.00
        let unit_price = Money::from_cents(5000);
        let total = unit_price.multiply_quantity(Quantity::from_whole(-1));
        assert_eq!(total.cents(), -5000);
    }

    #[test]
    fn test_rate_from_percentage() {
        assert_eq!(Rate::from_percentage(20.0).bps(), 2000);
        assert_eq!(Rate::from_percentage(8.25).bps(), 825);
        assert!((Rate::from_bps(2000).percentage() - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_quantity_display() {
        assert_eq!(Quantity::from_whole(3).to_string(), "3");
        assert_eq!(Quantity::from_milli(2500).to_string(), "2.5");
        assert_eq!(Quantity::from_milli(1125).to_string(), "1.125");
        assert_eq!(Quantity::from_milli(-500).to_string(), "-0.5");
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        assert!(Money::from_cents(100).is_positive());
        assert!(Money::from_cents(-100).is_negative());
    }
}

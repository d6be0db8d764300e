//! # Money Module
//!
//! Provides the `Money` type for prices, sale totals, tendered cash, change
//! and the till balance.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floats:                                                    │
//! │    8.15 × 3 = 24.450000000000003  ❌                                    │
//! │    500.00 + 16.50 + 0.1 + 0.2 drifts after a day of sales               │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    815 × 3 = 2445 cents, exactly                                        │
//! │    The till always equals opening balance + Σ sale totals               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use till_core::money::Money;
//!
//! let price = Money::from_cents(550);   // $5.50
//! let total = price.checked_multiply_quantity(3).unwrap(); // $16.50
//! let change = Money::from_cents(2000) - total;
//! assert_eq!(change.to_string(), "$3.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction stays total; the rules that forbid
///   negative prices or credits live in [`crate::validation`]
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money Flows
/// ```text
/// Item.price ──► price × qty = sale total ──┬──► TillBalance.credit(total)
///                                           │
/// cash tendered ──────────────── − total ───┴──► change due
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// let price = Money::from_cents(760); // $7.60
    /// assert_eq!(price.cents(), 760);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Unit price × quantity, or `None` if the result does not fit in i64.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// let socks = Money::from_cents(815);
    /// assert_eq!(socks.checked_multiply_quantity(3), Some(Money::from_cents(2445)));
    /// assert_eq!(socks.checked_multiply_quantity(i64::MAX), None);
    /// ```
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Addition that reports overflow instead of wrapping.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$D.CC`, the way receipts and notices print it.
///
/// The register app formats with its configured currency symbol instead.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
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
        let money = Money::from_cents(815);
        assert_eq!(money.cents(), 815);
        assert_eq!(money.dollars(), 8);
        assert_eq!(money.cents_part(), 15);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(51650).to_string(), "$516.50");
        assert_eq!(Money::from_cents(450).to_string(), "$4.50");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(2000);
        let b = Money::from_cents(1650);

        assert_eq!((a - b).cents(), 350);
        assert_eq!((b - a).to_string(), "-$3.50");
    }

    #[test]
    fn test_no_float_drift() {
        // 8.15 * 3 drifts as f64; in cents it is exact.
        assert_eq!(
            Money::from_cents(815).checked_multiply_quantity(3),
            Some(Money::from_cents(2445))
        );
    }

    #[test]
    fn test_checked_operations() {
        assert_eq!(
            Money::from_cents(550).checked_multiply_quantity(3),
            Some(Money::from_cents(1650))
        );
        assert_eq!(Money::from_cents(2).checked_multiply_quantity(i64::MAX), None);
        assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
    }

    #[test]
    fn test_sign_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::from_cents(-1).is_negative());
        assert!(!Money::from_cents(1).is_negative());
    }
}

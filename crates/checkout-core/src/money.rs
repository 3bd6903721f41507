//! # Money Module
//!
//! Provides the `Money` type for checkout amounts.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer amounts                                          │
//! │    Prices in the product file are whole numbers of the smallest unit.   │
//! │    Every line total and checkout total stays an exact i64.              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Amounts are signed: negative prices are credits and a checkout total may
//! legitimately come out below zero. Nothing here clamps.
//!
//! ## Usage
//! ```rust
//! use checkout_core::money::Money;
//!
//! let price = Money::from_amount(35);
//! let line = price.checked_mul_quantity(3).unwrap();
//! assert_eq!(line.amount(), 105);
//!
//! let total = line.checked_add(Money::from_amount(-5)).unwrap();
//! assert_eq!(total.amount(), 100);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in the smallest unit used by the price data.
///
/// ## Design Decisions
/// - **i64 (signed)**: negative prices and totals are valid
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **No currency**: the engine prices one catalog in one unit
///
/// There are no arithmetic operator impls. All arithmetic goes through the
/// `checked_*` methods, and callers turn `None` into an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from a raw amount.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let price = Money::from_amount(-124);
    /// assert_eq!(price.amount(), -124);
    /// ```
    #[inline]
    pub const fn from_amount(amount: i64) -> Self {
        Money(amount)
    }

    /// Returns the raw amount.
    #[inline]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Multiplies by a quantity, returning `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let unit_price = Money::from_amount(12);
    /// assert_eq!(unit_price.checked_mul_quantity(2), Some(Money::from_amount(24)));
    /// assert_eq!(Money::from_amount(i64::MAX).checked_mul_quantity(2), None);
    /// ```
    #[inline]
    pub const fn checked_mul_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(v) => Some(Money(v)),
            None => None,
        }
    }

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Money(v)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Displays the bare amount. Currency formatting is left to presenters.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_bare_integer() {
        assert_eq!(Money::from_amount(284).to_string(), "284");
        assert_eq!(Money::from_amount(-111087).to_string(), "-111087");
        assert_eq!(Money::zero().to_string(), "0");
    }

    #[test]
    fn test_checked_ops_detect_overflow() {
        let max = Money::from_amount(i64::MAX);
        assert_eq!(max.checked_add(Money::from_amount(1)), None);
        assert_eq!(max.checked_mul_quantity(2), None);
        assert_eq!(
            Money::from_amount(-4).checked_mul_quantity(22),
            Some(Money::from_amount(-88))
        );
    }

    #[test]
    fn test_checked_ops_at_lower_bound() {
        let min = Money::from_amount(i64::MIN);
        assert_eq!(min.checked_add(Money::from_amount(-1)), None);
        assert_eq!(min.checked_mul_quantity(-1), None);
        assert_eq!(min.checked_mul_quantity(1), Some(min));
        assert_eq!(
            min.checked_add(Money::from_amount(i64::MAX)),
            Some(Money::from_amount(-1))
        );
    }

    #[test]
    fn test_checked_fold_over_lines() {
        let lines = [140, 95, 25, 24].map(Money::from_amount);
        let total = lines
            .iter()
            .try_fold(Money::zero(), |acc, line| acc.checked_add(*line));
        assert_eq!(total, Some(Money::from_amount(284)));

        let overflowing = [i64::MAX, 1].map(Money::from_amount);
        let total = overflowing
            .iter()
            .try_fold(Money::zero(), |acc, line| acc.checked_add(*line));
        assert_eq!(total, None);
    }

    #[test]
    fn test_serializes_as_plain_number() {
        let json = serde_json::to_string(&Money::from_amount(-110)).unwrap();
        assert_eq!(json, "-110");
    }
}

//! # Money Module
//!
//! Provides the `Money` type for prices shown in the product table.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  A 10% markdown of 1.15 UAH in floating point:                          │
//! │    1.15 * 0.9 = 1.0350000000000001  ❌                                  │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units (kopiyky)                            │
//! │    115 minor * 90 = 10350, rounded exactly at the hryvnia  ✅           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::money::Money;
//!
//! let price = Money::from_major_minor(2899, 0); // 2899.00 UAH
//! let marked_down = price.apply_markdown(10); // 2609.10 → 2609
//! assert_eq!(marked_down.minor(), 260_900);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (kopiyky for UAH).
///
/// ## Design Decisions
/// - **i64 (signed)**: a negative amount is representable so validation can
///   reject it
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - Serializes as a bare number
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// let price = Money::from_minor(1099);
    /// assert_eq!(price.minor(), 1099);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is -5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion (truncated toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Decreases the amount by `percent` percent.
    ///
    /// Computes `max(0, round(amount * (1 - percent / 100)))`, rounding half
    /// up to a whole major unit (hryvnia). Percentages above 100 push the
    /// product below zero and are clamped.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// let price = Money::from_major_minor(1199, 0);
    /// assert_eq!(price.apply_markdown(10).minor(), 107_900); // 1079.10 → 1079
    /// assert_eq!(price.apply_markdown(110).minor(), 0);
    /// ```
    pub fn apply_markdown(&self, percent: u32) -> Money {
        // minor * (100 - percent) is in 1/10_000 of a major unit;
        // i128 keeps it exact for any i64 amount
        let factor = 100_i128 - i128::from(percent);
        let scaled = i128::from(self.0) * factor;
        let major = if scaled >= 0 {
            (scaled + 5_000) / 10_000
        } else {
            (scaled - 5_000) / 10_000
        };
        let clamped = (major * 100).clamp(0, i128::from(i64::MAX));
        Money(clamped as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-oriented rendering (`12.34`). The dashboard config owns the
/// localized currency format.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor_part())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(10, 99).minor(), 1099);
        assert_eq!(Money::from_major_minor(-5, 50).minor(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_minor(1099).to_string(), "10.99");
        assert_eq!(Money::from_minor(500).to_string(), "5.00");
        assert_eq!(Money::from_minor(-550).to_string(), "-5.50");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_markdown_rounds_to_whole_hryvnia() {
        // 2899.00 * 0.9 = 2609.10 → 2609
        assert_eq!(Money::from_major_minor(2899, 0).apply_markdown(10), Money::from_major_minor(2609, 0));
        // 5.00 * 0.9 = 4.50 → 5
        assert_eq!(Money::from_minor(500).apply_markdown(10).minor(), 500);
        // 4.99 * 0.9 = 4.491 → 4
        assert_eq!(Money::from_minor(499).apply_markdown(10).minor(), 400);
        // 0.40 * 0.5 = 0.20 → 0
        assert_eq!(Money::from_minor(40).apply_markdown(50), Money::zero());
    }

    #[test]
    fn test_markdown_edges() {
        let price = Money::from_minor(10_000);
        assert_eq!(price.apply_markdown(0), price);
        assert_eq!(price.apply_markdown(100), Money::zero());
        assert_eq!(price.apply_markdown(110), Money::zero());
        assert_eq!(price.apply_markdown(u32::MAX), Money::zero());
        assert_eq!(Money::zero().apply_markdown(50), Money::zero());
    }

    #[test]
    fn test_markdown_never_negative() {
        for minor in [0_i64, 1, 99, 100, 12_345, 1_000_000] {
            for percent in [0_u32, 1, 10, 33, 99, 100, 101, 250, 10_000] {
                let result = Money::from_minor(minor).apply_markdown(percent);
                assert!(!result.is_negative(), "{minor} @ {percent}% went negative");
            }
        }
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&Money::from_minor(1099)).unwrap();
        assert_eq!(json, "1099");
        let back: Money = serde_json::from_str("250").unwrap();
        assert_eq!(back.minor(), 250);
    }
}

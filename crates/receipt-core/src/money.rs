//! # Money Module
//!
//! Provides the `Money` type for handling receipt amounts exactly.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floating point:                                            │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │    35.35 % 0.25 = 0.0999999999...   (and some multiples miss 0)        │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "35.35" → 3535 cents, 3535 % 25 = 10  → not a quarter multiple      │
//! │    "9.00"  →  900 cents,  900 % 25 = 0   → quarter multiple            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::money::Money;
//!
//! let total = Money::parse("35.35").unwrap();
//! assert_eq!(total.cents(), 3535);
//! assert!(!total.is_whole_dollars());
//! assert!(!total.is_multiple_of(25));
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Cents in one dollar.
const CENTS_PER_DOLLAR: i64 = 100;

/// Maximum digits accepted after the decimal point.
const MAX_FRACTION_DIGITS: usize = 2;

// =============================================================================
// Money Type
// =============================================================================

/// A non-negative monetary value in cents.
///
/// ## Design Decisions
/// - **i64**: plenty of headroom for any receipt total
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Parsed, never converted from floats**: the text on the receipt is
///   the source of truth
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses a plain decimal amount such as `"6.49"`, `"12"` or `"0.5"`.
    ///
    /// ## Rules
    /// - Digits only, with at most one `.`
    /// - At most two digits after the point
    /// - At least one digit before the point
    /// - No sign, exponent, separators or surrounding whitespace
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// assert_eq!(Money::parse("12.25").unwrap().cents(), 1225);
    /// assert_eq!(Money::parse("3").unwrap().cents(), 300);
    /// assert_eq!(Money::parse("0.5").unwrap().cents(), 50);
    /// assert!(Money::parse("-1.00").is_err());
    /// assert!(Money::parse("1.005").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let invalid = |reason: &str| ValidationError::invalid_format("amount", reason);

        let (whole, fraction) = match text.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (text, ""),
        };

        if whole.is_empty() {
            return Err(invalid("expected digits before the decimal point"));
        }
        if !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid("expected a plain decimal amount like 12.34"));
        }
        if fraction.len() > MAX_FRACTION_DIGITS {
            return Err(invalid("at most two digits are allowed after the decimal point"));
        }

        let dollars: i64 = whole
            .parse()
            .map_err(|_| invalid("amount is too large"))?;

        // "5" → 50 cents, "05" → 5 cents, "" → 0
        let mut cents_part: i64 = 0;
        for (position, digit) in fraction.bytes().enumerate() {
            let weight = if position == 0 { 10 } else { 1 };
            cents_part += i64::from(digit - b'0') * weight;
        }

        dollars
            .checked_mul(CENTS_PER_DOLLAR)
            .and_then(|cents| cents.checked_add(cents_part))
            .map(Money)
            .ok_or_else(|| invalid("amount is too large"))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / CENTS_PER_DOLLAR
    }

    /// Returns the cents portion (0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        self.0 % CENTS_PER_DOLLAR
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// True when the amount has no cents, e.g. `$9.00`.
    #[inline]
    pub const fn is_whole_dollars(&self) -> bool {
        self.cents_part() == 0
    }

    /// True when the amount is an exact multiple of `step_cents`.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// assert!(Money::from_cents(975).is_multiple_of(25));  // $9.75
    /// assert!(!Money::from_cents(980).is_multiple_of(25)); // $9.80
    /// ```
    #[inline]
    pub const fn is_multiple_of(&self, step_cents: i64) -> bool {
        step_cents != 0 && self.0 % step_cents == 0
    }

    /// Takes a fifth of the amount and rounds up to whole dollars.
    ///
    /// `ceil(cents / 500)` is `ceil(dollars × 0.2)` without any float.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(300).fifth_rounded_up(), 1);  // 0.6 → 1
    /// assert_eq!(Money::from_cents(1225).fifth_rounded_up(), 3); // 2.45 → 3
    /// assert_eq!(Money::from_cents(500).fifth_rounded_up(), 1);  // 1.0 → 1
    /// ```
    #[inline]
    pub const fn fifth_rounded_up(&self) -> i64 {
        let divisor = CENTS_PER_DOLLAR * 5;
        self.0 / divisor + (self.0 % divisor != 0) as i64
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money as `$D.CC`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.dollars(), self.cents_part())
    }
}

impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse(s)
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
    fn test_parse_accepts_plain_decimals() {
        assert_eq!(Money::parse("35.35").unwrap().cents(), 3535);
        assert_eq!(Money::parse("9.00").unwrap().cents(), 900);
        assert_eq!(Money::parse("9").unwrap().cents(), 900);
        assert_eq!(Money::parse("9.").unwrap().cents(), 900);
        assert_eq!(Money::parse("0.5").unwrap().cents(), 50);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse("0").unwrap().cents(), 0);
    }

    #[test]
    fn test_parse_rejects_everything_else() {
        for bad in ["", ".50", "-1.00", "+1.00", "1.005", "1,000.00", "1e3", " 1.00", "abc", "1.2.3"] {
            assert!(Money::parse(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert!(Money::parse("99999999999999999999").is_err());
        assert!(Money::parse("92233720368547758.08").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "$10.99");
        assert_eq!(Money::from_cents(500).to_string(), "$5.00");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_whole_dollars_and_quarters_are_independent() {
        let nine = Money::from_cents(900);
        assert!(nine.is_whole_dollars());
        assert!(nine.is_multiple_of(25));

        let nine_fifty = Money::from_cents(950);
        assert!(!nine_fifty.is_whole_dollars());
        assert!(nine_fifty.is_multiple_of(25));

        let odd = Money::from_cents(3535);
        assert!(!odd.is_whole_dollars());
        assert!(!odd.is_multiple_of(25));
    }

    #[test]
    fn test_fifth_rounded_up() {
        assert_eq!(Money::zero().fifth_rounded_up(), 0);
        assert_eq!(Money::from_cents(1).fifth_rounded_up(), 1);
        assert_eq!(Money::from_cents(649).fifth_rounded_up(), 2); // 1.298 → 2
        assert_eq!(Money::from_cents(1000).fifth_rounded_up(), 2); // exactly 2
        assert_eq!(Money::from_cents(1001).fifth_rounded_up(), 3);
    }

    #[test]
    fn test_fifth_rounded_up_at_largest_amount() {
        let largest = Money::parse("92233720368547758.07").unwrap();
        assert_eq!(largest.cents(), i64::MAX);
        assert_eq!(largest.fifth_rounded_up(), i64::MAX / 500 + 1);
    }
}

//! # Money Module
//!
//! Shared money and percentage arithmetic for the engine.
//!
//! ## Why Exact Decimals?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Invoice math applies a discount, then tax on the discounted base.     │
//! │  Rounding between those two steps compounds: the tax is computed on    │
//! │  an already-distorted amount and the line total drifts.                │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal                                             │
//! │    Every intermediate value is exact. Rounding happens exactly once,   │
//! │    at the presentation edge, via `round_currency`.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rust_decimal::Decimal;
//! use saral_core::money::{percent_of, round_currency};
//!
//! let taxable = Decimal::from(900);
//! let tax = percent_of(taxable, Decimal::from(18)); // exactly 162
//! assert_eq!(tax, Decimal::from(162));
//!
//! // Display only:
//! assert_eq!(round_currency(Decimal::new(162555, 3)), Decimal::new(16256, 2));
//! ```

use rust_decimal::{Decimal, RoundingStrategy};

// =============================================================================
// Percentage Arithmetic
// =============================================================================

/// Returns `percent` percent of `base`, exactly.
///
/// No rounding is applied — callers that need currency precision round
/// once, at the end, with [`round_currency`].
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use saral_core::money::percent_of;
///
/// // 10% of 1000 = 100
/// assert_eq!(
///     percent_of(Decimal::from(1000), Decimal::from(10)),
///     Decimal::from(100)
/// );
/// ```
#[inline]
pub fn percent_of(base: Decimal, percent: Decimal) -> Decimal {
    base * percent / Decimal::ONE_HUNDRED
}

/// Checks that a percentage lies in the closed range 0..=100.
#[inline]
pub fn is_valid_percent(percent: Decimal) -> bool {
    percent >= Decimal::ZERO && percent <= Decimal::ONE_HUNDRED
}

// =============================================================================
// Currency Rounding
// =============================================================================

/// Rounds an amount to currency precision (2 decimal places, half away
/// from zero).
///
/// ## Presentation Only
/// The engine itself never calls this mid-calculation. It exists for the
/// display layer and for persisted invoice snapshots, so that every caller
/// rounds the same way.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use saral_core::money::round_currency;
///
/// assert_eq!(round_currency(Decimal::new(10825, 3)), Decimal::new(1083, 2)); // 10.825 → 10.83
/// assert_eq!(round_currency(Decimal::new(10824, 3)), Decimal::new(1082, 2)); // 10.824 → 10.82
/// ```
#[inline]
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_of_exact() {
        // 18% of 900 = 162, no residue
        let tax = percent_of(Decimal::from(900), Decimal::from(18));
        assert_eq!(tax, Decimal::from(162));

        // fractional percent stays exact: 8.25% of 10.00 = 0.825
        let tax = percent_of(Decimal::from(10), Decimal::new(825, 2));
        assert_eq!(tax, Decimal::new(825, 3));
    }

    #[test]
    fn test_percent_of_zero() {
        assert_eq!(percent_of(Decimal::ZERO, Decimal::from(18)), Decimal::ZERO);
        assert_eq!(percent_of(Decimal::from(500), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_is_valid_percent() {
        assert!(is_valid_percent(Decimal::ZERO));
        assert!(is_valid_percent(Decimal::from(100)));
        assert!(is_valid_percent(Decimal::new(1825, 2)));

        assert!(!is_valid_percent(Decimal::from(-1)));
        assert!(!is_valid_percent(Decimal::new(10001, 2)));
    }

    #[test]
    fn test_round_currency() {
        assert_eq!(round_currency(Decimal::new(10825, 3)), Decimal::new(1083, 2));
        assert_eq!(round_currency(Decimal::new(10824, 3)), Decimal::new(1082, 2));
        assert_eq!(round_currency(Decimal::from(162)), Decimal::from(162));
    }

    /// Documents why rounding must wait for the end of the calculation:
    /// rounding three one-third shares loses a paisa versus rounding the
    /// exact total once.
    #[test]
    fn test_late_rounding_documented() {
        let third = Decimal::from(100) / Decimal::from(3);
        let rounded_then_summed =
            round_currency(third) + round_currency(third) + round_currency(third);
        let summed_then_rounded = round_currency(third + third + third);

        assert_eq!(rounded_then_summed, Decimal::new(9999, 2)); // 99.99
        assert_eq!(summed_then_rounded, Decimal::from(100));
        assert_ne!(rounded_then_summed, summed_then_rounded);
    }
}

//! # Line-Item Calculator
//!
//! Deterministic recomputation of the monetary fields of one invoice line.
//!
//! ## Derivation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  quantity ─┬─► subtotal = quantity × price_per_unit                     │
//! │  price ────┘        │                                                   │
//! │                     ▼                                                   │
//! │  discount% ──► discount_amount = subtotal × discount% / 100             │
//! │                     │                                                   │
//! │                     ▼                                                   │
//! │              taxable = subtotal − discount_amount                       │
//! │                     │                                                   │
//! │                     ▼                                                   │
//! │  tax% ───────► tax_amount = taxable × tax% / 100                        │
//! │                     │           (tax on the POST-discount base)         │
//! │                     ▼                                                   │
//! │              amount = taxable + tax_amount                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every keystroke on any of the four inputs re-runs [`compute`]; the three
//! derived fields only ever change together. No value is rounded along the
//! way — the presentation layer rounds once for display.

use rust_decimal::Decimal;

use crate::error::LineItemError;
use crate::money::{is_valid_percent, percent_of};
use crate::types::{LineAmounts, LineItemInput};

// =============================================================================
// Computation
// =============================================================================

/// Computes the derived monetary fields of a line item.
///
/// The single entry point for line math: returns all three derived fields
/// together, so partial recomputation (updating `discount_amount` without
/// `amount`) cannot exist as a state.
///
/// Negative inputs and percentages above 100 fail with
/// [`LineItemError::InvalidInput`] naming the offending field — these are
/// caller bugs, and clamping them silently would hide the upstream defect.
/// Within its valid domain the function is total and referentially
/// transparent.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use saral_core::line_item::compute;
/// use saral_core::types::LineItemInput;
///
/// let input = LineItemInput {
///     quantity: Decimal::from(10),
///     price_per_unit: Decimal::from(100),
///     discount_percent: Decimal::from(10),
///     tax_percent: Decimal::from(18),
///     free_quantity: Decimal::ZERO,
/// };
/// let amounts = compute(&input).unwrap();
/// assert_eq!(amounts.amount, Decimal::from(1062));
/// ```
pub fn compute(input: &LineItemInput) -> Result<LineAmounts, LineItemError> {
    check_non_negative("quantity", input.quantity)?;
    check_non_negative("price_per_unit", input.price_per_unit)?;
    check_non_negative("free_quantity", input.free_quantity)?;
    check_percent("discount_percent", input.discount_percent)?;
    check_percent("tax_percent", input.tax_percent)?;

    let subtotal = input.quantity * input.price_per_unit;
    let discount_amount = percent_of(subtotal, input.discount_percent);
    let taxable_amount = subtotal - discount_amount;
    let tax_amount = percent_of(taxable_amount, input.tax_percent);
    let amount = taxable_amount + tax_amount;

    Ok(LineAmounts {
        discount_amount,
        tax_amount,
        amount,
    })
}

fn check_non_negative(field: &str, value: Decimal) -> Result<(), LineItemError> {
    if value < Decimal::ZERO {
        return Err(LineItemError::InvalidInput {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

fn check_percent(field: &str, value: Decimal) -> Result<(), LineItemError> {
    if !is_valid_percent(value) {
        return Err(LineItemError::InvalidInput {
            field: field.to_string(),
            value,
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

    fn input(quantity: i64, price: i64, discount: i64, tax: i64) -> LineItemInput {
        LineItemInput {
            quantity: Decimal::from(quantity),
            price_per_unit: Decimal::from(price),
            discount_percent: Decimal::from(discount),
            tax_percent: Decimal::from(tax),
            free_quantity: Decimal::ZERO,
        }
    }

    #[test]
    fn test_discount_then_tax() {
        // 10 × 100 = 1000; 10% discount = 100; tax 18% of 900 = 162; total 1062
        let amounts = compute(&input(10, 100, 10, 18)).unwrap();
        assert_eq!(amounts.discount_amount, Decimal::from(100));
        assert_eq!(amounts.tax_amount, Decimal::from(162));
        assert_eq!(amounts.amount, Decimal::from(1062));
    }

    #[test]
    fn test_full_discount_zeroes_tax() {
        // 5 × 50 = 250; 100% discount; tax base is the post-discount zero
        let amounts = compute(&input(5, 50, 100, 12)).unwrap();
        assert_eq!(amounts.discount_amount, Decimal::from(250));
        assert_eq!(amounts.tax_amount, Decimal::ZERO);
        assert_eq!(amounts.amount, Decimal::ZERO);
    }

    #[test]
    fn test_zero_quantity_or_price() {
        let amounts = compute(&input(0, 100, 10, 18)).unwrap();
        assert_eq!(amounts, LineAmounts::zero());

        let amounts = compute(&input(10, 0, 10, 18)).unwrap();
        assert_eq!(amounts, LineAmounts::zero());
    }

    #[test]
    fn test_no_discount_no_tax() {
        let amounts = compute(&input(3, 40, 0, 0)).unwrap();
        assert_eq!(amounts.discount_amount, Decimal::ZERO);
        assert_eq!(amounts.tax_amount, Decimal::ZERO);
        assert_eq!(amounts.amount, Decimal::from(120));
    }

    #[test]
    fn test_fractional_values_stay_exact() {
        // 2.5 × 99.99 = 249.975; 12.5% discount = 31.246875;
        // taxable 218.728125; 18% tax = 39.3710625; amount 258.0991875
        let item = LineItemInput {
            quantity: Decimal::new(25, 1),
            price_per_unit: Decimal::new(9999, 2),
            discount_percent: Decimal::new(125, 1),
            tax_percent: Decimal::from(18),
            free_quantity: Decimal::ZERO,
        };
        let amounts = compute(&item).unwrap();
        assert_eq!(amounts.discount_amount, Decimal::new(31246875, 6));
        assert_eq!(amounts.tax_amount, Decimal::new(393710625, 7));
        assert_eq!(amounts.amount, Decimal::new(2580991875, 7));
    }

    #[test]
    fn test_free_quantity_excluded_from_money() {
        let mut item = input(10, 100, 10, 18);
        item.free_quantity = Decimal::from(5);
        let with_free = compute(&item).unwrap();
        let without_free = compute(&input(10, 100, 10, 18)).unwrap();
        assert_eq!(with_free, without_free);
        assert_eq!(item.total_units(), Decimal::from(15));
    }

    #[test]
    fn test_idempotence() {
        let item = input(7, 333, 5, 28);
        assert_eq!(compute(&item).unwrap(), compute(&item).unwrap());
    }

    #[test]
    fn test_negative_inputs_rejected() {
        for (field, item) in [
            ("quantity", input(-1, 100, 0, 0)),
            ("price_per_unit", input(1, -100, 0, 0)),
            ("discount_percent", input(1, 100, -5, 0)),
            ("tax_percent", input(1, 100, 0, -18)),
        ] {
            let err = compute(&item).unwrap_err();
            match err {
                LineItemError::InvalidInput { field: f, .. } => assert_eq!(f, field),
            }
        }

        let mut item = input(1, 100, 0, 0);
        item.free_quantity = Decimal::from(-1);
        assert!(compute(&item).is_err());
    }

    #[test]
    fn test_percent_above_hundred_rejected() {
        assert!(compute(&input(1, 100, 101, 0)).is_err());
        assert!(compute(&input(1, 100, 0, 101)).is_err());
        // exactly 100 is inside the domain
        assert!(compute(&input(1, 100, 100, 100)).is_ok());
    }
}

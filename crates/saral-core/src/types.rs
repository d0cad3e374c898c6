//! # Domain Types
//!
//! Core domain types consumed by the GST engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌───────────────────┐   ┌─────────────────┐   ┌─────────────────┐     │
//! │  │ TaxRateDefinition │   │    HsnCode      │   │  LineItemInput  │     │
//! │  │  ───────────────  │   │  ─────────────  │   │  ─────────────  │     │
//! │  │  id (opaque)      │   │  code ("8471")  │   │  quantity       │     │
//! │  │  name             │   │  default_tax_   │   │  price_per_unit │     │
//! │  │  rate (total %)   │   │    rate_id (FK) │   │  discount_%     │     │
//! │  │  cgst/sgst/igst   │   │  is_system_code │   │  tax_%          │     │
//! │  └─────────────────┬─┘   └─────────────────┘   └────────┬────────┘     │
//! │                    │                                    │              │
//! │            ┌───────▼────────┐                  ┌────────▼────────┐     │
//! │            │    TaxType     │                  │   LineAmounts   │     │
//! │            │  ────────────  │                  │  ─────────────  │     │
//! │            │  Composition   │                  │ discount_amount │     │
//! │            │  Nil           │                  │ tax_amount      │     │
//! │            │  Igst          │                  │ amount          │     │
//! │            │  CgstSgst      │                  └─────────────────┘     │
//! │            └────────────────┘                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Record ids are opaque strings minted by the persistence layer. The
//! engine never parses them; it only follows weak references (an HSN
//! code's `default_tax_rate_id` is a lookup key, not ownership).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Tax Type
// =============================================================================

/// Semantic classification of a tax rate.
///
/// Produced by [`crate::tax::classify`]; drives which components appear on
/// the printed invoice and which badge the UI shows on the rate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "snake_case"))]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TaxType {
    /// Flat composition-scheme levy; component fields are not broken out.
    CompositionScheme,
    /// Zero-rated / exempt.
    Nil,
    /// Inter-state supply: a single integrated component.
    Igst,
    /// Intra-state supply: equal central + state halves.
    CgstSgst,
}

impl TaxType {
    /// Human-readable label for UI badges and reports.
    pub fn label(&self) -> &'static str {
        match self {
            TaxType::CompositionScheme => "Composition",
            TaxType::Nil => "Nil",
            TaxType::Igst => "IGST",
            TaxType::CgstSgst => "CGST + SGST",
        }
    }
}

impl std::fmt::Display for TaxType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// Tax Rate Definition
// =============================================================================

/// A configured tax rate, unique by name within an organization.
///
/// The stored `rate` is the authoritative total percentage when the
/// CGST/SGST/IGST components are not broken out (nil-rated or legacy
/// entries). When components are present, [`crate::tax::total_rate`]
/// derives the total from them instead.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRateDefinition {
    /// Opaque identifier (persistence-layer owned).
    pub id: String,

    /// Display label, unique per organization (uniqueness enforced by the
    /// persistence layer).
    pub name: String,

    /// Optional free-text description.
    pub description: Option<String>,

    /// Total percentage, 0..=100.
    #[ts(as = "String")]
    pub rate: Decimal,

    /// Central GST component, 0..=50 or absent.
    #[ts(as = "Option<String>")]
    pub cgst_rate: Option<Decimal>,

    /// State GST component, 0..=50 or absent. Must equal `cgst_rate` when
    /// both are positive.
    #[ts(as = "Option<String>")]
    pub sgst_rate: Option<Decimal>,

    /// Integrated GST component, 0..=100 or absent. Mutually exclusive
    /// with a positive CGST/SGST pair.
    #[ts(as = "Option<String>")]
    pub igst_rate: Option<Decimal>,

    /// Composition-scheme rates are exempt from the component
    /// exclusivity rules.
    pub is_composition_scheme: bool,

    /// When the rate was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the rate was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl TaxRateDefinition {
    /// Returns the semantic classification of this rate.
    #[inline]
    pub fn tax_type(&self) -> TaxType {
        crate::tax::classify(self)
    }

    /// Returns the effective total percentage.
    #[inline]
    pub fn total_rate(&self) -> Decimal {
        crate::tax::total_rate(self)
    }
}

// =============================================================================
// HSN Code
// =============================================================================

/// An HSN/SAC classification code.
///
/// System codes are seeded once from the official chapter list and are
/// read-only sentinels: never edited, never deleted, regardless of caller
/// privilege. The persistence layer enforces that rule; the checks that
/// decide it ([`crate::hsn::can_mutate`], [`crate::hsn::can_delete`])
/// live here.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HsnCode {
    /// Digit string, 2/4/6/8 characters (see [`crate::hsn::validate_format`]).
    pub code: String,

    /// Optional free-text description.
    pub description: Option<String>,

    /// Weak reference to the tax rate applied by default when an item
    /// picks this code. Lookup only, no ownership.
    pub default_tax_rate_id: Option<String>,

    /// Whether this is an immutable system-seeded code.
    pub is_system_code: bool,

    /// When the code was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the code was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Line Item
// =============================================================================

/// Canonical inputs to the line-item calculator.
///
/// Every monetary field on an invoice line derives from these four numbers
/// (plus the informational `free_quantity`, which never enters the money
/// math). Derived fields are never set directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItemInput {
    /// Billed quantity, >= 0.
    #[ts(as = "String")]
    pub quantity: Decimal,

    /// Unit price, >= 0.
    #[ts(as = "String")]
    pub price_per_unit: Decimal,

    /// Discount percentage, 0..=100.
    #[ts(as = "String")]
    pub discount_percent: Decimal,

    /// Tax percentage, 0..=100.
    #[ts(as = "String")]
    pub tax_percent: Decimal,

    /// Free (bonus) quantity, >= 0. Shown on the invoice and deducted
    /// from stock, but excluded from all monetary computation.
    #[ts(as = "String")]
    pub free_quantity: Decimal,
}

impl LineItemInput {
    /// Total units leaving stock: billed plus free.
    #[inline]
    pub fn total_units(&self) -> Decimal {
        self.quantity + self.free_quantity
    }
}

/// The three derived monetary fields of an invoice line.
///
/// Always produced together by [`crate::line_item::compute`] — there is no
/// way to update one of them without recomputing all three, which is what
/// keeps stale derived state unobservable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineAmounts {
    /// `subtotal × discount% / 100`, exact.
    #[ts(as = "String")]
    pub discount_amount: Decimal,

    /// Tax on the post-discount base, exact.
    #[ts(as = "String")]
    pub tax_amount: Decimal,

    /// Final line amount: taxable amount + tax, exact.
    #[ts(as = "String")]
    pub amount: Decimal,
}

impl LineAmounts {
    /// All-zero amounts (empty or fully zeroed line).
    #[inline]
    pub fn zero() -> Self {
        LineAmounts {
            discount_amount: Decimal::ZERO,
            tax_amount: Decimal::ZERO,
            amount: Decimal::ZERO,
        }
    }

    /// Copy rounded to currency precision (2 dp), for display and for
    /// persisted invoice snapshots. The unrounded values remain the
    /// source of truth.
    pub fn rounded(&self) -> Self {
        LineAmounts {
            discount_amount: crate::money::round_currency(self.discount_amount),
            tax_amount: crate::money::round_currency(self.tax_amount),
            amount: crate::money::round_currency(self.amount),
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
    fn test_tax_type_labels() {
        assert_eq!(TaxType::CompositionScheme.label(), "Composition");
        assert_eq!(TaxType::Igst.to_string(), "IGST");
        assert_eq!(TaxType::CgstSgst.to_string(), "CGST + SGST");
    }

    #[test]
    fn test_tax_type_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&TaxType::CgstSgst).unwrap(),
            "\"cgst_sgst\""
        );
        assert_eq!(
            serde_json::to_string(&TaxType::CompositionScheme).unwrap(),
            "\"composition_scheme\""
        );
    }

    #[test]
    fn test_total_units() {
        let input = LineItemInput {
            quantity: Decimal::from(10),
            price_per_unit: Decimal::from(100),
            discount_percent: Decimal::ZERO,
            tax_percent: Decimal::ZERO,
            free_quantity: Decimal::from(2),
        };
        assert_eq!(input.total_units(), Decimal::from(12));
    }

    #[test]
    fn test_line_amounts_zero_and_rounded() {
        assert_eq!(LineAmounts::zero().amount, Decimal::ZERO);

        let amounts = LineAmounts {
            discount_amount: Decimal::new(100125, 3), // 100.125
            tax_amount: Decimal::new(162555, 3),      // 162.555
            amount: Decimal::new(1062430, 3),         // 1062.430
        };
        let rounded = amounts.rounded();
        assert_eq!(rounded.discount_amount, Decimal::new(10013, 2));
        assert_eq!(rounded.tax_amount, Decimal::new(16256, 2));
        assert_eq!(rounded.amount, Decimal::new(106243, 2));
    }
}

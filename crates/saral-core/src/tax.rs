//! # Tax Rate Validator
//!
//! Consistency rules and classification for GST tax rates.
//!
//! ## The One Shared Predicate
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Every path through which a tax rate can                 │
//! │                 be introduced or mutated funnels here                   │
//! │                                                                         │
//! │   create form ──┐                                                       │
//! │   update form ──┼──► validate_components() ──► Ok / GstConfigError     │
//! │   bulk import ──┘          │                                            │
//! │                            ├── Rule A: IGST and CGST/SGST are          │
//! │                            │           mutually exclusive              │
//! │                            └── Rule B: CGST must equal SGST            │
//! │                                                                         │
//! │   Composition-scheme rates skip both rules.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A component that is absent and a component that is exactly zero are
//! treated identically throughout this module.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{GstConfigError, ValidationError};
use crate::types::{TaxRateDefinition, TaxType};
use crate::{MAX_COMPONENT_RATE, MAX_IGST_RATE, MAX_TOTAL_RATE};

/// Result type for field-level validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// True when a component rate is present with a positive value.
/// `None` and `Some(0)` are uniformly "absent".
#[inline]
fn component_present(rate: Option<Decimal>) -> bool {
    matches!(rate, Some(r) if r > Decimal::ZERO)
}

// =============================================================================
// Consistency Rules
// =============================================================================

/// Validates the mutual-exclusivity and equality rules between the
/// CGST/SGST pair and IGST.
///
/// This is the single shared predicate: the create path, the update path,
/// and any bulk path all call this same function, so the rules cannot
/// drift between entry points.
///
/// ## Rules
/// - **Rule A**: `igst > 0` while `cgst > 0` or `sgst > 0` →
///   [`GstConfigError::MixedInterAndIntraState`]
/// - **Rule B**: `cgst > 0` or `sgst > 0` while `cgst != sgst` →
///   [`GstConfigError::CgstSgstMismatch`]
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use saral_core::tax::validate_components;
///
/// let nine = Some(Decimal::from(9));
/// assert!(validate_components(nine, nine, None).is_ok());
/// assert!(validate_components(nine, nine, Some(Decimal::from(18))).is_err());
/// ```
pub fn validate_components(
    cgst_rate: Option<Decimal>,
    sgst_rate: Option<Decimal>,
    igst_rate: Option<Decimal>,
) -> Result<(), GstConfigError> {
    let intra_state = component_present(cgst_rate) || component_present(sgst_rate);

    if component_present(igst_rate) && intra_state {
        return Err(GstConfigError::MixedInterAndIntraState);
    }

    if intra_state
        && cgst_rate.unwrap_or(Decimal::ZERO) != sgst_rate.unwrap_or(Decimal::ZERO)
    {
        return Err(GstConfigError::CgstSgstMismatch);
    }

    Ok(())
}

/// Validates a full tax rate definition.
///
/// Composition-scheme rates are exempt from the component rules: the
/// composition levy is a flat percentage with no CGST/SGST/IGST breakup,
/// so whatever the component fields hold is ignored.
pub fn validate(rate: &TaxRateDefinition) -> Result<(), GstConfigError> {
    if rate.is_composition_scheme {
        return Ok(());
    }
    validate_components(rate.cgst_rate, rate.sgst_rate, rate.igst_rate)
}

// =============================================================================
// Classification
// =============================================================================

/// Classifies a tax rate into its semantic [`TaxType`].
///
/// Precedence, in order:
/// 1. composition flag (advertised regardless of the numeric rate)
/// 2. zero total rate → [`TaxType::Nil`]
/// 3. positive IGST → [`TaxType::Igst`] (an explicit IGST entry wins over
///    a merely-nonzero total)
/// 4. positive CGST or SGST → [`TaxType::CgstSgst`]
/// 5. otherwise → [`TaxType::Nil`]
///
/// Total and deterministic: every definition maps to exactly one type.
pub fn classify(rate: &TaxRateDefinition) -> TaxType {
    if rate.is_composition_scheme {
        return TaxType::CompositionScheme;
    }
    if rate.rate == Decimal::ZERO {
        return TaxType::Nil;
    }
    if component_present(rate.igst_rate) {
        return TaxType::Igst;
    }
    if component_present(rate.cgst_rate) || component_present(rate.sgst_rate) {
        return TaxType::CgstSgst;
    }
    TaxType::Nil
}

/// Returns the effective total percentage of a tax rate.
///
/// Composition schemes report their stored `rate`. Otherwise IGST wins if
/// present, then the CGST+SGST sum if both are present, then the stored
/// `rate` field — the authoritative total when components are not broken
/// out (nil-rated or legacy entries).
pub fn total_rate(rate: &TaxRateDefinition) -> Decimal {
    if rate.is_composition_scheme {
        return rate.rate;
    }
    if component_present(rate.igst_rate) {
        return rate.igst_rate.unwrap_or(Decimal::ZERO);
    }
    if component_present(rate.cgst_rate) && component_present(rate.sgst_rate) {
        return rate.cgst_rate.unwrap_or(Decimal::ZERO) + rate.sgst_rate.unwrap_or(Decimal::ZERO);
    }
    rate.rate
}

// =============================================================================
// Invoice Breakup
// =============================================================================

/// How a computed tax amount is apportioned across GST components for
/// invoice print.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxBreakup {
    #[ts(as = "String")]
    pub cgst: Decimal,
    #[ts(as = "String")]
    pub sgst: Decimal,
    #[ts(as = "String")]
    pub igst: Decimal,
}

/// Apportions a line's tax amount by tax type.
///
/// Intra-state tax splits into two exactly equal halves (CGST and SGST
/// are levied at the same rate). Inter-state tax is all IGST. Nil and
/// composition rates carry no per-line tax components — composition
/// dealers cannot collect tax on the invoice.
pub fn breakup(tax_amount: Decimal, tax_type: TaxType) -> TaxBreakup {
    match tax_type {
        TaxType::CgstSgst => {
            let half = tax_amount / Decimal::TWO;
            TaxBreakup {
                cgst: half,
                sgst: half,
                igst: Decimal::ZERO,
            }
        }
        TaxType::Igst => TaxBreakup {
            cgst: Decimal::ZERO,
            sgst: Decimal::ZERO,
            igst: tax_amount,
        },
        TaxType::Nil | TaxType::CompositionScheme => TaxBreakup {
            cgst: Decimal::ZERO,
            sgst: Decimal::ZERO,
            igst: Decimal::ZERO,
        },
    }
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a tax rate name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 100 characters
///
/// Name uniqueness within an organization is the persistence layer's
/// check, not this one.
pub fn validate_rate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 100,
        });
    }

    Ok(())
}

/// Re-asserts the numeric ranges of a tax rate definition.
///
/// ## Rules
/// - total `rate`: 0..=100
/// - `cgst_rate` / `sgst_rate`: 0..=50 when present
/// - `igst_rate`: 0..=100 when present
///
/// The form layer enforces the same bounds; this function exists so the
/// engine does not have to trust it (a negative rate slipping through a
/// form bug would otherwise corrupt every downstream total).
pub fn validate_rate_bounds(rate: &TaxRateDefinition) -> ValidationResult<()> {
    check_percent_field("rate", Some(rate.rate), MAX_TOTAL_RATE)?;
    check_percent_field("cgst_rate", rate.cgst_rate, MAX_COMPONENT_RATE)?;
    check_percent_field("sgst_rate", rate.sgst_rate, MAX_COMPONENT_RATE)?;
    check_percent_field("igst_rate", rate.igst_rate, MAX_IGST_RATE)?;
    Ok(())
}

fn check_percent_field(field: &str, value: Option<Decimal>, max: i64) -> ValidationResult<()> {
    let Some(value) = value else {
        return Ok(());
    };

    if value < Decimal::ZERO {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    if value > Decimal::from(max) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Error Types
//!
//! Domain-specific error types for saral-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  saral-core errors (this file)                                         │
//! │  ├── GstConfigError       - CGST/SGST/IGST consistency failures        │
//! │  ├── HsnFormatError       - HSN/SAC code format failures               │
//! │  ├── DeletionBlockedError - HSN code deletion refusals                 │
//! │  ├── LineItemError        - Line-item calculator contract violations   │
//! │  ├── ValidationError      - Field-level input validation failures      │
//! │  └── CoreError            - Umbrella over all of the above             │
//! │                                                                         │
//! │  Flow: engine error → API layer → field-specific form feedback         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (code, count, field, value)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message
//! 5. Errors are returned, never thrown; nothing here is retried

use rust_decimal::Decimal;
use thiserror::Error;

// =============================================================================
// GST Configuration Error
// =============================================================================

/// A proposed tax rate definition is internally inconsistent.
///
/// Raised by the validator before a tax rate is accepted, on both the
/// create and the update path. Surfaced verbatim to the end user as a
/// rejection of the submitted form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GstConfigError {
    /// Both the intra-state pair (CGST/SGST) and the inter-state component
    /// (IGST) carry positive values. A supply is either intra-state or
    /// inter-state, never both.
    #[error("a tax rate cannot combine CGST/SGST with IGST")]
    MixedInterAndIntraState,

    /// CGST and SGST are split equally by law; unequal components mean the
    /// user mistyped one of them.
    #[error("CGST and SGST rates must be equal")]
    CgstSgstMismatch,
}

// =============================================================================
// HSN Format Error
// =============================================================================

/// An HSN/SAC classification code fails the format gate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HsnFormatError {
    /// The code contains a non-digit character.
    #[error("HSN code '{code}' must contain only digits")]
    NotNumeric { code: String },

    /// The code is numeric but not 2, 4, 6, or 8 digits long.
    #[error("HSN code must be 2, 4, 6, or 8 digits (got {length})")]
    InvalidLength { length: usize },
}

// =============================================================================
// Deletion Blocked Error
// =============================================================================

/// An HSN code cannot be deleted.
///
/// Carries the blocking reason so the caller can render a precise message.
/// The usage count is supplied by the persistence layer; this crate never
/// queries anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeletionBlockedError {
    /// System codes are read-only sentinels seeded once and never removed,
    /// regardless of caller privilege.
    #[error("system HSN codes cannot be deleted")]
    SystemCode,

    /// The code is still referenced by items.
    #[error("HSN code is in use by {usage_count} item(s)")]
    InUse { usage_count: u64 },
}

// =============================================================================
// Line-Item Error
// =============================================================================

/// The line-item calculator was handed input outside its domain.
///
/// ## When This Occurs
/// Never from user-correctable conditions — a negative quantity or an
/// out-of-range percentage reaching the calculator means an upstream form
/// failed to validate. Failing loudly here keeps that bug visible instead
/// of silently clamping it away.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineItemError {
    #[error("invalid {field}: {value}")]
    InvalidInput { field: String, value: Decimal },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },
}

// =============================================================================
// Core Error
// =============================================================================

/// Umbrella error for callers that funnel every engine failure into one
/// channel (e.g. an API layer mapping errors to HTTP responses).
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("GST configuration error: {0}")]
    GstConfig(#[from] GstConfigError),

    #[error("HSN format error: {0}")]
    HsnFormat(#[from] HsnFormatError),

    #[error("deletion blocked: {0}")]
    DeletionBlocked(#[from] DeletionBlockedError),

    #[error("line item error: {0}")]
    LineItem(#[from] LineItemError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gst_config_error_messages() {
        assert_eq!(
            GstConfigError::MixedInterAndIntraState.to_string(),
            "a tax rate cannot combine CGST/SGST with IGST"
        );
        assert_eq!(
            GstConfigError::CgstSgstMismatch.to_string(),
            "CGST and SGST rates must be equal"
        );
    }

    #[test]
    fn test_deletion_blocked_messages() {
        let err = DeletionBlockedError::InUse { usage_count: 7 };
        assert_eq!(err.to_string(), "HSN code is in use by 7 item(s)");
        assert_eq!(
            DeletionBlockedError::SystemCode.to_string(),
            "system HSN codes cannot be deleted"
        );
    }

    #[test]
    fn test_hsn_format_messages() {
        let err = HsnFormatError::NotNumeric {
            code: "12a4".to_string(),
        };
        assert_eq!(err.to_string(), "HSN code '12a4' must contain only digits");

        let err = HsnFormatError::InvalidLength { length: 3 };
        assert_eq!(
            err.to_string(),
            "HSN code must be 2, 4, 6, or 8 digits (got 3)"
        );
    }

    #[test]
    fn test_errors_convert_to_core_error() {
        let core: CoreError = GstConfigError::CgstSgstMismatch.into();
        assert!(matches!(core, CoreError::GstConfig(_)));

        let core: CoreError = ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        assert!(matches!(core, CoreError::Validation(_)));
    }
}

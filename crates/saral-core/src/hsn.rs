//! # HSN Code Gate
//!
//! Format and mutability rules for HSN/SAC classification codes,
//! independent of tax validation.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  HSN Code: Add / Edit / Delete                                          │
//! │                                                                         │
//! │  User enters code: "8471"                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_format("8471")                                               │
//! │       │                                                                 │
//! │       ├── non-digit?        → Error: NotNumeric                        │
//! │       ├── length ∉ {2,4,6,8}? → Error: InvalidLength                   │
//! │       └── OK → persistence layer checks code uniqueness               │
//! │                                                                         │
//! │  Delete request                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  can_delete(record, usage_count)   ← count queried by caller           │
//! │       │                                                                 │
//! │       ├── system code?  → Blocked: SystemCode                          │
//! │       ├── count > 0?    → Blocked: InUse { usage_count }               │
//! │       └── OK → proceed                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{DeletionBlockedError, HsnFormatError};
use crate::types::HsnCode;
use crate::HSN_CODE_LENGTHS;

// =============================================================================
// Format Gate
// =============================================================================

/// Validates the format of an HSN/SAC code.
///
/// ## Rules
/// - Digits only ([`HsnFormatError::NotNumeric`] otherwise)
/// - Length 2, 4, 6, or 8 ([`HsnFormatError::InvalidLength`] otherwise) —
///   chapter, heading, sub-heading, and tariff-item granularity
///
/// An empty string has no offending character and fails on length.
///
/// ## Example
/// ```rust
/// use saral_core::hsn::validate_format;
///
/// assert!(validate_format("8471").is_ok());
/// assert!(validate_format("123").is_err());
/// assert!(validate_format("12a4").is_err());
/// ```
pub fn validate_format(code: &str) -> Result<(), HsnFormatError> {
    if !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(HsnFormatError::NotNumeric {
            code: code.to_string(),
        });
    }

    if !HSN_CODE_LENGTHS.contains(&code.len()) {
        return Err(HsnFormatError::InvalidLength { length: code.len() });
    }

    Ok(())
}

// =============================================================================
// Mutability Gate
// =============================================================================

/// Whether an HSN record may be edited.
///
/// System codes are seeded once and read-only regardless of caller
/// privilege; the authorization layer never overrides this.
#[inline]
pub fn can_mutate(record: &HsnCode) -> bool {
    !record.is_system_code
}

/// Whether an HSN record may be deleted.
///
/// `usage_count` is the number of items still referencing the code,
/// supplied by the caller — the persistence layer owns the count query.
/// The blocking reason is carried in the error so the UI can say exactly
/// why the delete was refused.
pub fn can_delete(record: &HsnCode, usage_count: u64) -> Result<(), DeletionBlockedError> {
    if record.is_system_code {
        return Err(DeletionBlockedError::SystemCode);
    }

    if usage_count > 0 {
        return Err(DeletionBlockedError::InUse { usage_count });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn hsn(code: &str, is_system_code: bool) -> HsnCode {
        let now = Utc::now();
        HsnCode {
            code: code.to_string(),
            description: None,
            default_tax_rate_id: None,
            is_system_code,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_validate_format_accepts_all_granularities() {
        assert!(validate_format("12").is_ok());
        assert!(validate_format("1234").is_ok());
        assert!(validate_format("123456").is_ok());
        assert!(validate_format("12345678").is_ok());
    }

    #[test]
    fn test_validate_format_rejects_bad_lengths() {
        for code in ["1", "123", "12345", "1234567", "123456789"] {
            let err = validate_format(code).unwrap_err();
            assert!(matches!(err, HsnFormatError::InvalidLength { .. }), "{code}");
        }

        // empty string falls through to the length check
        assert!(matches!(
            validate_format("").unwrap_err(),
            HsnFormatError::InvalidLength { length: 0 }
        ));
    }

    #[test]
    fn test_validate_format_rejects_non_digits() {
        assert!(matches!(
            validate_format("12a4").unwrap_err(),
            HsnFormatError::NotNumeric { .. }
        ));
        // non-digit is reported even when the length is also wrong
        assert!(matches!(
            validate_format("1.2").unwrap_err(),
            HsnFormatError::NotNumeric { .. }
        ));
        // ASCII digits only; other scripts' numerals are rejected
        assert!(matches!(
            validate_format("१२३४").unwrap_err(),
            HsnFormatError::NotNumeric { .. }
        ));
    }

    #[test]
    fn test_can_mutate() {
        assert!(can_mutate(&hsn("8471", false)));
        assert!(!can_mutate(&hsn("01", true)));
    }

    #[test]
    fn test_can_delete() {
        assert!(can_delete(&hsn("8471", false), 0).is_ok());

        assert!(matches!(
            can_delete(&hsn("01", true), 0).unwrap_err(),
            DeletionBlockedError::SystemCode
        ));

        // system-code check wins even when the code is also in use
        assert!(matches!(
            can_delete(&hsn("01", true), 3).unwrap_err(),
            DeletionBlockedError::SystemCode
        ));

        assert!(matches!(
            can_delete(&hsn("8471", false), 3).unwrap_err(),
            DeletionBlockedError::InUse { usage_count: 3 }
        ));
    }
}

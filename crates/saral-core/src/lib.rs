//! # saral-core: Pure Business Logic for Saral Books
//!
//! This crate is the **heart** of Saral Books. It contains the GST tax and
//! invoice line-item calculation engine as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Saral Books Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                       Frontend (forms)                          │   │
//! │  │   Tax rate dialog ──► HSN picker ──► Invoice line editor        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON / server actions                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              API layer (sessions, orgs, routing)                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ saral-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │    tax    │  │    hsn    │  │ line_item │  │   │
//! │  │   │ TaxRate.. │  │ validate  │  │  format   │  │  compute  │  │   │
//! │  │   │  HsnCode  │  │ classify  │  │   gates   │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO SESSIONS • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │        Persistence layer (uniqueness, usage counts, ORM)        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain records (tax rates, HSN codes, line items)
//! - [`money`] - Exact decimal money/percentage arithmetic
//! - [`error`] - Domain error types
//! - [`tax`] - Tax rate validation and classification
//! - [`hsn`] - HSN code format and mutability gates
//! - [`line_item`] - Invoice line-item computation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, session access is FORBIDDEN here
//! 3. **Exact Arithmetic**: `rust_decimal` everywhere; rounding happens once,
//!    at the presentation edge
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! Every function here is safe to call concurrently from any number of
//! callers: there is no shared state, no locking, and nothing retries.
//!
//! ## Example Usage
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use saral_core::line_item::compute;
//! use saral_core::tax::validate_components;
//! use saral_core::types::LineItemInput;
//!
//! // A standard 18% GST rate split 9/9 for intra-state supply:
//! let nine = Some(Decimal::from(9));
//! validate_components(nine, nine, None).unwrap();
//!
//! // One invoice line: 10 units at ₹100, 10% discount, 18% tax
//! let amounts = compute(&LineItemInput {
//!     quantity: Decimal::from(10),
//!     price_per_unit: Decimal::from(100),
//!     discount_percent: Decimal::from(10),
//!     tax_percent: Decimal::from(18),
//!     free_quantity: Decimal::ZERO,
//! })
//! .unwrap();
//! assert_eq!(amounts.amount, Decimal::from(1062));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod hsn;
pub mod line_item;
pub mod money;
pub mod tax;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use saral_core::TaxType` instead of
// `use saral_core::types::TaxType`

pub use error::{
    CoreError, CoreResult, DeletionBlockedError, GstConfigError, HsnFormatError, LineItemError,
    ValidationError,
};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum CGST or SGST component percentage.
///
/// ## Business Reason
/// CGST and SGST each carry half of an intra-state rate, and the total
/// rate is capped at 100%, so no single half can exceed 50%.
pub const MAX_COMPONENT_RATE: i64 = 50;

/// Maximum IGST component percentage.
pub const MAX_IGST_RATE: i64 = 100;

/// Maximum total tax rate percentage.
pub const MAX_TOTAL_RATE: i64 = 100;

/// Accepted HSN/SAC code lengths.
///
/// ## Business Reason
/// HSN codes are hierarchical: 2 digits identify the chapter, 4 the
/// heading, 6 the sub-heading, and 8 the full tariff item. Any other
/// length is a typo.
pub const HSN_CODE_LENGTHS: [usize; 4] = [2, 4, 6, 8];

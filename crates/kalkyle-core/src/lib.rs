//! # kalkyle-core: Pure Business Logic for Kalkyle
//!
//! This crate is the **heart** of Kalkyle, a contribution-margin
//! ("dækningsgrad") pricing calculator for jobs priced as fitter hours plus
//! materials. It contains all business logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kalkyle Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front end (apps/cli)                         │   │
//! │  │    Flag parsing ──► Boundary validation ──► Report rendering   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ one call per input change              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kalkyle-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  pricing  │  │ validation│  │  format   │  │   │
//! │  │   │  Inputs   │  │  compute  │  │   rules   │  │  kroner   │  │   │
//! │  │   │  Quote    │  │  VAT calc │  │  checks   │  │  percent  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STATE • NO LOGGING • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Value objects ([`QuoteInputs`], [`Quote`])
//! - [`pricing`] - The quote computation (sale price to hit a target margin)
//! - [`error`] - Typed validation errors
//! - [`validation`] - Boundary checks for numeric entry
//! - [`format`] - Display formatting for amounts, percentages, and factors
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: File, network, and terminal access is FORBIDDEN here
//! 3. **No Hidden State**: A quote is recomputed from scratch on every call
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//! 5. **No NaN, No Infinity**: Every division is guarded; derived figures are
//!    always finite
//!
//! ## Example Usage
//!
//! ```rust
//! use kalkyle_core::{pricing, QuoteInputs};
//!
//! let inputs = QuoteInputs {
//!     cost_rate_per_hour: 356.9,
//!     sale_rate_per_hour: 628.0,
//!     hours: 5.0,
//!     material_cost: 6000.0,
//!     target_margin_percent: 35.0,
//! };
//!
//! let quote = pricing::compute(&inputs).unwrap();
//!
//! // Total cost 7,784.50 kr.; selling at a 35% margin means
//! // 7,784.50 / 0.65 ≈ 11,976.15 kr. before VAT.
//! assert!((quote.total_cost - 7784.5).abs() < 1e-9);
//! assert!((quote.total_sale_ex_vat - 7784.5 / 0.65).abs() < 1e-9);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod format;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use kalkyle_core::Quote` instead of
// `use kalkyle_core::types::Quote`

pub use error::{ValidationError, ValidationResult};
pub use pricing::compute;
pub use types::{Quote, QuoteInputs};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// VAT ("moms") rate applied on top of the sale price, as a fraction.
///
/// ## Business Reason
/// Danish VAT is a flat 25% on the sale price. The quote always reports both
/// the ex-VAT and the inc-VAT total, so the rate lives here rather than in
/// any front end.
pub const VAT_RATE: f64 = 0.25;

/// Highest target contribution margin accepted at the input boundary,
/// in percent.
///
/// ## Business Reason
/// A margin of 100% or more makes the sale-price formula divide by zero or
/// go negative, so the domain is capped strictly below 100. The cap sits at
/// 99.9 so users can still explore aggressive margins and see the resulting
/// prices, however large.
pub const MAX_MARGIN_PERCENT: f64 = 99.9;

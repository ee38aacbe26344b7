//! # Value Objects
//!
//! The two value objects of the calculator: what the user enters and what
//! the computation derives.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Value Objects                                   │
//! │                                                                         │
//! │  ┌─────────────────────┐          ┌─────────────────────┐              │
//! │  │    QuoteInputs      │          │       Quote         │              │
//! │  │  ─────────────────  │ compute  │  ─────────────────  │              │
//! │  │  cost_rate_per_hour │ ───────► │  total_sale_ex_vat  │              │
//! │  │  sale_rate_per_hour │          │  total_sale_inc_vat │              │
//! │  │  hours              │          │  contribution_margin│              │
//! │  │  material_cost      │          │  ... (10 figures)   │              │
//! │  │  target_margin_pct  │          └─────────────────────┘              │
//! │  └─────────────────────┘                                               │
//! │                                                                         │
//! │  No lifecycle beyond a single call: both are ephemeral, recreated      │
//! │  per invocation. Nothing is persisted.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All monetary figures are plain `f64` kroner kept at full precision;
//! rounding to two decimals happens only at display time in [`crate::format`].

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::pricing;

// =============================================================================
// Quote Inputs
// =============================================================================

/// The five numbers the user controls.
///
/// ## Domains
/// The four money/hour fields must be finite and `>= 0`; the target margin
/// lives in `[0, MAX_MARGIN_PERCENT]`. The boundary validators in
/// [`crate::validation`] enforce these before the computation runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteInputs {
    /// Hourly labor rate at cost, in kroner.
    pub cost_rate_per_hour: f64,

    /// Hourly labor rate at sale, in kroner.
    pub sale_rate_per_hour: f64,

    /// Fitter hours on the job.
    pub hours: f64,

    /// Material cost price, in kroner.
    pub material_cost: f64,

    /// Target contribution margin ("dækningsgrad"), as a percentage of the
    /// sale price. Strictly less than 100.
    pub target_margin_percent: f64,
}

impl QuoteInputs {
    /// Computes the quote for these inputs.
    ///
    /// Convenience wrapper around [`pricing::compute`].
    #[inline]
    pub fn compute(&self) -> Result<Quote, ValidationError> {
        pricing::compute(self)
    }
}

/// Seed values for a fresh session: a five-hour job at typical fitter
/// rates with 6,000 kr. of materials and a 35% target margin.
impl Default for QuoteInputs {
    fn default() -> Self {
        QuoteInputs {
            cost_rate_per_hour: 356.9,
            sale_rate_per_hour: 628.0,
            hours: 5.0,
            material_cost: 6000.0,
            target_margin_percent: 35.0,
        }
    }
}

// =============================================================================
// Quote
// =============================================================================

/// Everything derived from one set of inputs.
///
/// All fields are computed in one pass by [`pricing::compute`]; none is ever
/// NaN or infinite. The clamps and zero-defaults noted per field are part of
/// the contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Labor at cost: `cost_rate_per_hour × hours`.
    pub labor_cost: f64,

    /// Labor at sale: `sale_rate_per_hour × hours`.
    pub labor_sale: f64,

    /// Labor cost plus material cost.
    pub total_cost: f64,

    /// The sale price that hits the target margin, before VAT:
    /// `total_cost / (1 − margin)`.
    pub total_sale_ex_vat: f64,

    /// What the materials must sell for after labor's sale contribution is
    /// subtracted. Clamped at zero, never negative.
    pub material_sale_price: f64,

    /// `material_sale_price / material_cost`; `0` when there is no material
    /// cost.
    pub material_markup_factor: f64,

    /// Markup expressed as a percentage over cost; `0` when the factor is
    /// zero.
    pub material_markup_percent: f64,

    /// Contribution margin ("dækningsbidrag"): sale minus cost, in kroner.
    pub contribution_margin: f64,

    /// Contribution margin per fitter hour; `0` for a zero-hour job.
    pub contribution_margin_per_hour: f64,

    /// Sale price including 25% VAT.
    pub total_sale_inc_vat: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_inputs_are_the_session_seed() {
        let inputs = QuoteInputs::default();
        assert_eq!(inputs.cost_rate_per_hour, 356.9);
        assert_eq!(inputs.sale_rate_per_hour, 628.0);
        assert_eq!(inputs.hours, 5.0);
        assert_eq!(inputs.material_cost, 6000.0);
        assert_eq!(inputs.target_margin_percent, 35.0);
    }

    #[test]
    fn test_compute_method_matches_free_function() {
        let inputs = QuoteInputs::default();
        let via_method = inputs.compute().unwrap();
        let via_function = pricing::compute(&inputs).unwrap();
        assert_eq!(via_method, via_function);
    }

    #[test]
    fn test_quote_serializes_with_snake_case_fields() {
        let quote = QuoteInputs::default().compute().unwrap();
        let json = serde_json::to_value(&quote).unwrap();
        assert!(json.get("total_sale_ex_vat").is_some());
        assert!(json.get("contribution_margin_per_hour").is_some());
    }
}

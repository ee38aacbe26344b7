//! # Pricing Module
//!
//! The quote computation: what must this job sell for to hit the target
//! contribution margin?
//!
//! ## The Margin Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CONTRIBUTION MARGIN ("dækningsgrad", DG)                               │
//! │                                                                         │
//! │  The margin is a share of the SALE price, not a markup on cost:        │
//! │                                                                         │
//! │    DG = (Sale − Cost) / Sale                                            │
//! │                                                                         │
//! │  Solving for the sale price that hits a target DG:                     │
//! │                                                                         │
//! │    Sale = Cost / (1 − DG)                                               │
//! │                                                                         │
//! │  DG → 100% makes the divisor zero, so a margin of 100% or more is      │
//! │  rejected before any division happens.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Attribution of the Sale Price
//! Labor is sold at its own fixed hourly sale rate. Whatever remains of the
//! required sale price after labor is attributed to the materials:
//! ```text
//! Total sale (ex VAT)
//!      │
//!      ├── labor_sale = sale_rate_per_hour × hours   (fixed)
//!      │
//!      └── material_sale_price = rest, clamped at 0  (the variable part)
//! ```
//! A cheap job with expensive labor can leave nothing for the materials;
//! the clamp keeps the material sale price at zero rather than negative.
//!
//! ## Usage
//! ```rust
//! use kalkyle_core::{pricing, QuoteInputs};
//!
//! let quote = pricing::compute(&QuoteInputs::default()).unwrap();
//! assert!(quote.total_sale_ex_vat > quote.total_cost);
//! ```

use crate::error::ValidationError;
use crate::types::{Quote, QuoteInputs};
use crate::VAT_RATE;

// =============================================================================
// Quote Computation
// =============================================================================

/// Computes the full [`Quote`] for one set of inputs.
///
/// Pure function: no side effects, no state, deterministic. Every derived
/// figure is finite for every accepted input; divisions by `material_cost`
/// and `hours` are branch-guarded and default to zero, so all-zero inputs
/// are valid and produce an all-zero quote.
///
/// ## Errors
/// [`ValidationError::MarginTooHigh`] when `target_margin_percent >= 100`.
/// This is checked here, not only at the input boundary, so the invariant
/// holds for every caller.
///
/// ## Example
/// ```rust
/// use kalkyle_core::{pricing, QuoteInputs};
///
/// let inputs = QuoteInputs {
///     cost_rate_per_hour: 356.9,
///     sale_rate_per_hour: 628.0,
///     hours: 5.0,
///     material_cost: 6000.0,
///     target_margin_percent: 35.0,
/// };
///
/// let quote = pricing::compute(&inputs).unwrap();
/// // 7,784.50 kr. total cost sold at a 35% margin:
/// assert!((quote.total_sale_ex_vat - 11976.153846153846).abs() < 1e-9);
/// ```
pub fn compute(inputs: &QuoteInputs) -> Result<Quote, ValidationError> {
    let labor_cost = inputs.cost_rate_per_hour * inputs.hours;
    let labor_sale = inputs.sale_rate_per_hour * inputs.hours;
    let total_cost = labor_cost + inputs.material_cost;

    // Reject DG >= 100% before any division
    let margin_fraction = inputs.target_margin_percent / 100.0;
    if margin_fraction >= 1.0 {
        return Err(ValidationError::MarginTooHigh {
            percent: inputs.target_margin_percent,
        });
    }

    // Positive for any margin below 100; the branch keeps the exact-1.0
    // floating-point edge from ever dividing by zero
    let divisor = 1.0 - margin_fraction;
    let total_sale_ex_vat = if divisor != 0.0 {
        total_cost / divisor
    } else {
        0.0
    };

    // Labor sells at its fixed rate; the rest of the required sale price
    // is carried by the materials, never below zero
    let material_sale_price = (total_sale_ex_vat - labor_sale).max(0.0);

    let material_markup_factor = if inputs.material_cost > 0.0 {
        material_sale_price / inputs.material_cost
    } else {
        0.0
    };
    let material_markup_percent = if material_markup_factor > 0.0 {
        (material_markup_factor - 1.0) * 100.0
    } else {
        0.0
    };

    let contribution_margin = total_sale_ex_vat - total_cost;
    let contribution_margin_per_hour = if inputs.hours > 0.0 {
        contribution_margin / inputs.hours
    } else {
        0.0
    };

    let total_sale_inc_vat = total_sale_ex_vat * (1.0 + VAT_RATE);

    Ok(Quote {
        labor_cost,
        labor_sale,
        total_cost,
        total_sale_ex_vat,
        material_sale_price,
        material_markup_factor,
        material_markup_percent,
        contribution_margin,
        contribution_margin_per_hour,
        total_sale_inc_vat,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn inputs(
        cost_rate: f64,
        sale_rate: f64,
        hours: f64,
        material_cost: f64,
        margin: f64,
    ) -> QuoteInputs {
        QuoteInputs {
            cost_rate_per_hour: cost_rate,
            sale_rate_per_hour: sale_rate,
            hours,
            material_cost,
            target_margin_percent: margin,
        }
    }

    /// The worked reference case: 5 h at 356.9/628.0, 6,000 kr. materials,
    /// 35% target margin.
    #[test]
    fn test_reference_quote() {
        let quote = compute(&inputs(356.9, 628.0, 5.0, 6000.0, 35.0)).unwrap();

        assert!((quote.labor_cost - 1784.5).abs() < EPS);
        assert!((quote.labor_sale - 3140.0).abs() < EPS);
        assert!((quote.total_cost - 7784.5).abs() < EPS);

        let expected_sale = 7784.5 / 0.65;
        assert!((quote.total_sale_ex_vat - expected_sale).abs() < EPS);
        assert!((quote.material_sale_price - (expected_sale - 3140.0)).abs() < EPS);
        assert!((quote.contribution_margin - (expected_sale - 7784.5)).abs() < EPS);
        assert!((quote.contribution_margin_per_hour - quote.contribution_margin / 5.0).abs() < EPS);
        assert!((quote.total_sale_inc_vat - expected_sale * 1.25).abs() < EPS);
    }

    /// Selling at the computed price must actually realize the target
    /// margin: sale × (1 − DG) = cost.
    #[test]
    fn test_sale_price_realizes_target_margin() {
        for margin in [0.0, 10.0, 35.0, 50.0, 80.0, 99.0, 99.9] {
            let quote = compute(&inputs(356.9, 628.0, 5.0, 6000.0, margin)).unwrap();
            let realized_cost = quote.total_sale_ex_vat * (1.0 - margin / 100.0);
            // Tolerance scales with the sale price; at DG 99.9 the figures
            // are ~1000x the cost
            let tol = 1e-9 * quote.total_sale_ex_vat.max(1.0);
            assert!(
                (realized_cost - quote.total_cost).abs() < tol,
                "margin {margin}%: {realized_cost} != {}",
                quote.total_cost
            );
        }
    }

    #[test]
    fn test_margin_at_or_above_100_is_rejected() {
        for margin in [100.0, 100.1, 150.0, 1000.0] {
            let err = compute(&inputs(356.9, 628.0, 5.0, 6000.0, margin)).unwrap_err();
            assert!(matches!(err, ValidationError::MarginTooHigh { .. }));
        }
    }

    #[test]
    fn test_margin_99_9_is_large_but_finite() {
        let quote = compute(&inputs(356.9, 628.0, 5.0, 6000.0, 99.9)).unwrap();
        // 7,784.50 / 0.001
        assert!((quote.total_sale_ex_vat - 7_784_500.0).abs() < 1e-3);
        assert!(quote.total_sale_ex_vat.is_finite());
        assert!(quote.total_sale_inc_vat.is_finite());
    }

    /// All-zero inputs are valid: divisor is (1 − 0) = 1 and every guarded
    /// division defaults to zero. No NaN, no fault.
    #[test]
    fn test_all_zero_inputs_yield_all_zero_quote() {
        let quote = compute(&inputs(0.0, 0.0, 0.0, 0.0, 0.0)).unwrap();

        assert_eq!(quote.labor_cost, 0.0);
        assert_eq!(quote.labor_sale, 0.0);
        assert_eq!(quote.total_cost, 0.0);
        assert_eq!(quote.total_sale_ex_vat, 0.0);
        assert_eq!(quote.material_sale_price, 0.0);
        assert_eq!(quote.material_markup_factor, 0.0);
        assert_eq!(quote.material_markup_percent, 0.0);
        assert_eq!(quote.contribution_margin, 0.0);
        assert_eq!(quote.contribution_margin_per_hour, 0.0);
        assert_eq!(quote.total_sale_inc_vat, 0.0);
    }

    #[test]
    fn test_zero_hours_zeroes_labor_and_per_hour_margin() {
        let quote = compute(&inputs(356.9, 628.0, 0.0, 6000.0, 35.0)).unwrap();
        assert_eq!(quote.labor_cost, 0.0);
        assert_eq!(quote.labor_sale, 0.0);
        assert_eq!(quote.contribution_margin_per_hour, 0.0);
        // The materials still get quoted
        assert!(quote.total_sale_ex_vat > 0.0);
    }

    #[test]
    fn test_zero_material_cost_zeroes_markup_figures() {
        let quote = compute(&inputs(356.9, 628.0, 5.0, 0.0, 35.0)).unwrap();
        assert_eq!(quote.material_markup_factor, 0.0);
        assert_eq!(quote.material_markup_percent, 0.0);
    }

    /// Expensive labor on a low-margin job can exceed the required sale
    /// price; the material sale price clamps at zero instead of going
    /// negative.
    #[test]
    fn test_material_sale_price_never_negative() {
        // Sale rate far above what the margin demands: total cost 100,
        // required sale ~111, labor alone sells for 5,000
        let quote = compute(&inputs(10.0, 500.0, 10.0, 0.0, 10.0)).unwrap();
        assert_eq!(quote.material_sale_price, 0.0);

        // And with materials in the mix the clamp still holds
        let quote = compute(&inputs(10.0, 500.0, 10.0, 50.0, 10.0)).unwrap();
        assert!(quote.material_sale_price >= 0.0);
        assert_eq!(quote.material_markup_factor, 0.0);
        assert_eq!(quote.material_markup_percent, 0.0);
    }

    #[test]
    fn test_vat_is_exactly_25_percent() {
        let quote = compute(&inputs(356.9, 628.0, 5.0, 6000.0, 35.0)).unwrap();
        assert_eq!(quote.total_sale_inc_vat, quote.total_sale_ex_vat * 1.25);
    }

    #[test]
    fn test_zero_margin_sells_at_cost() {
        let quote = compute(&inputs(300.0, 500.0, 8.0, 1000.0, 0.0)).unwrap();
        assert!((quote.total_sale_ex_vat - quote.total_cost).abs() < EPS);
        assert!(quote.contribution_margin.abs() < EPS);
    }

    /// Nothing in a quote may ever be NaN or infinite.
    #[test]
    fn test_all_figures_finite_across_the_domain() {
        for margin in [0.0, 0.1, 35.0, 99.9] {
            for hours in [0.0, 1.0, 40.0] {
                for material in [0.0, 6000.0] {
                    let quote = compute(&inputs(356.9, 628.0, hours, material, margin)).unwrap();
                    for figure in [
                        quote.labor_cost,
                        quote.labor_sale,
                        quote.total_cost,
                        quote.total_sale_ex_vat,
                        quote.material_sale_price,
                        quote.material_markup_factor,
                        quote.material_markup_percent,
                        quote.contribution_margin,
                        quote.contribution_margin_per_hour,
                        quote.total_sale_inc_vat,
                    ] {
                        assert!(figure.is_finite());
                    }
                }
            }
        }
    }
}

//! # Validation Module
//!
//! Boundary checks for the five numeric inputs.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front end (clap / number widgets)                            │
//! │  ├── Type validation (f64 parsing)                                     │
//! │  └── THIS MODULE: domain checks (finite, non-negative, margin range)   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: pricing::compute                                             │
//! │  └── Re-checks the margin invariant itself (DG < 100%), so a front    │
//! │      end that skips Layer 1 still cannot divide by zero               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kalkyle_core::validation::{validate_margin_percent, validate_money_input};
//!
//! validate_money_input("hours", 5.0).unwrap();
//! validate_margin_percent(35.0).unwrap();
//! assert!(validate_margin_percent(100.0).is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::QuoteInputs;
use crate::MAX_MARGIN_PERCENT;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a money or hours field.
///
/// ## Rules
/// - Must be finite (rejects NaN and ±∞)
/// - Must be zero or positive (zero hours / zero cost are valid jobs)
pub fn validate_money_input(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    if value < 0.0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
            value,
        });
    }

    Ok(())
}

/// Validates the target margin percentage.
///
/// ## Rules
/// - Must be finite
/// - Must be in `[0, 99.9]`
/// - 100% or more maps to [`ValidationError::MarginTooHigh`], the same
///   error `compute` raises, so the user sees one message for that case
///   regardless of which layer catches it
pub fn validate_margin_percent(percent: f64) -> ValidationResult<()> {
    if !percent.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "target margin".to_string(),
        });
    }

    if percent >= 100.0 {
        return Err(ValidationError::MarginTooHigh { percent });
    }

    if !(0.0..=MAX_MARGIN_PERCENT).contains(&percent) {
        return Err(ValidationError::OutOfRange {
            field: "target margin".to_string(),
            min: 0.0,
            max: MAX_MARGIN_PERCENT,
        });
    }

    Ok(())
}

// =============================================================================
// Whole-Input Validation
// =============================================================================

/// Validates all five inputs, failing on the first violation.
pub fn validate_inputs(inputs: &QuoteInputs) -> ValidationResult<()> {
    validate_money_input("cost rate", inputs.cost_rate_per_hour)?;
    validate_money_input("sale rate", inputs.sale_rate_per_hour)?;
    validate_money_input("hours", inputs.hours)?;
    validate_money_input("material cost", inputs.material_cost)?;
    validate_margin_percent(inputs.target_margin_percent)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_money_input() {
        assert!(validate_money_input("hours", 0.0).is_ok());
        assert!(validate_money_input("hours", 5.0).is_ok());
        assert!(validate_money_input("material cost", 6000.0).is_ok());

        assert!(validate_money_input("hours", -1.0).is_err());
        assert!(validate_money_input("hours", f64::NAN).is_err());
        assert!(validate_money_input("hours", f64::INFINITY).is_err());
        assert!(validate_money_input("hours", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_validate_margin_percent_domain() {
        assert!(validate_margin_percent(0.0).is_ok());
        assert!(validate_margin_percent(35.0).is_ok());
        assert!(validate_margin_percent(99.9).is_ok());

        assert!(validate_margin_percent(-0.1).is_err());
        assert!(validate_margin_percent(f64::NAN).is_err());
        assert!(validate_margin_percent(f64::INFINITY).is_err());
    }

    #[test]
    fn test_margin_100_or_more_maps_to_margin_too_high() {
        for percent in [100.0, 120.0] {
            let err = validate_margin_percent(percent).unwrap_err();
            assert!(matches!(err, ValidationError::MarginTooHigh { .. }));
        }
    }

    /// Between the boundary cap and 100% the margin is out of range, but it
    /// is not the divide-by-zero case.
    #[test]
    fn test_margin_between_cap_and_100_is_out_of_range() {
        let err = validate_margin_percent(99.95).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
    }

    #[test]
    fn test_validate_inputs_reports_first_violation() {
        let mut inputs = QuoteInputs::default();
        assert!(validate_inputs(&inputs).is_ok());

        inputs.hours = -2.0;
        let err = validate_inputs(&inputs).unwrap_err();
        assert!(matches!(err, ValidationError::Negative { .. }));

        inputs.hours = 5.0;
        inputs.target_margin_percent = 100.0;
        let err = validate_inputs(&inputs).unwrap_err();
        assert!(matches!(err, ValidationError::MarginTooHigh { .. }));
    }
}

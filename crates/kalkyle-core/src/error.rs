//! # Error Types
//!
//! Domain-specific error types for kalkyle-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Flow                                      │
//! │                                                                         │
//! │  validation::*  ──► ValidationError ──► front end (stderr, exit 1)     │
//! │  pricing::compute ─┘                                                    │
//! │                                                                         │
//! │  A validation failure is a blocking user-input correction: the front   │
//! │  end renders the message and stops, no figures are shown, no retry.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// [`MarginTooHigh`](ValidationError::MarginTooHigh) is the only error the
/// quote computation itself can raise; the remaining variants come from the
/// boundary validators in [`crate::validation`], which run before the core is
/// called.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Target margin is 100% or more.
    ///
    /// ## When This Occurs
    /// The sale price is `cost / (1 - margin)`: at 100% the divisor is zero
    /// and above 100% the price goes negative. Raised before any division,
    /// inside the computation itself, so the invariant holds even for
    /// callers that skip the boundary validators.
    #[error("target margin cannot be 100% or more (got {percent}%)")]
    MarginTooHigh { percent: f64 },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Value is negative where only zero or positive is allowed.
    #[error("{field} cannot be negative (got {value})")]
    Negative { field: String, value: f64 },

    /// Numeric value is outside its allowed range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_too_high_message() {
        let err = ValidationError::MarginTooHigh { percent: 100.0 };
        assert_eq!(
            err.to_string(),
            "target margin cannot be 100% or more (got 100%)"
        );
    }

    #[test]
    fn test_boundary_error_messages() {
        let err = ValidationError::NotFinite {
            field: "hours".to_string(),
        };
        assert_eq!(err.to_string(), "hours must be a finite number");

        let err = ValidationError::Negative {
            field: "material cost".to_string(),
            value: -1.0,
        };
        assert_eq!(err.to_string(), "material cost cannot be negative (got -1)");

        let err = ValidationError::OutOfRange {
            field: "target margin".to_string(),
            min: 0.0,
            max: 99.9,
        };
        assert_eq!(err.to_string(), "target margin must be between 0 and 99.9");
    }
}

//! # Display Formatting
//!
//! Rendering of quote figures for the report: amounts as grouped
//! two-decimal kroner, markup as a one-decimal percentage, and the markup
//! factor with a multiplication sign.
//!
//! Figures are carried at full `f64` precision everywhere else in the crate;
//! rounding happens here and only here.

// =============================================================================
// Public Formatters
// =============================================================================

/// Formats an amount as kroner: `11976.153846` → `"11,976.15 kr."`.
pub fn kroner(amount: f64) -> String {
    format!("{} kr.", grouped(amount, 2))
}

/// Formats a percentage with one decimal: `47.269` → `"47.3%"`.
pub fn percent(value: f64) -> String {
    format!("{}%", grouped(value, 1))
}

/// Formats a markup factor: `1.4727` → `"1.47×"`.
pub fn factor(value: f64) -> String {
    format!("{}×", grouped(value, 2))
}

// =============================================================================
// Grouping
// =============================================================================

/// Rounds to `decimals` places and inserts comma thousands separators into
/// the integer part.
fn grouped(value: f64, decimals: usize) -> String {
    let rendered = format!("{value:.decimals$}");
    let (sign, unsigned) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(rendered.len() + int_part.len() / 3 + 1);
    out.push_str(sign);
    let digits = int_part.as_bytes();
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*digit as char);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

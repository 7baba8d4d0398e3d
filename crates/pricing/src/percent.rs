//! Percent input and display.
//!
//! Operators type human percents (`5`, `12,5`); the backend stores decimal
//! fractions (`0.05`, `0.125`).

use livraria_core::input::{leading_float, normalize_decimal_separator};

/// Human percent typed by the operator, accepting `,` or `.` as decimal separator.
///
/// Reads the leading number of the input; returns `None` when there is none.
pub fn parse_percent(input: &str) -> Option<f64> {
    leading_float(&normalize_decimal_separator(input.trim())).filter(|p| p.is_finite())
}

/// `5.0` -> `0.05`.
pub fn percent_to_fraction(percent: f64) -> f64 {
    percent / 100.0
}

/// Decimal fraction rendered as a percent with two decimals and a comma (`0.05` -> `5,00`).
pub fn format_percent_for_view(fraction: f64) -> String {
    format!("{:.2}", fraction * 100.0).replace('.', ",")
}

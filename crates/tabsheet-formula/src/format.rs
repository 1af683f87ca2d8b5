//! Numeric result formatting
//!
//! Applies to operation results only; literal and number-formula values pass
//! through the evaluator verbatim.

/// Format an operation result for display
///
/// Integral values render as integers with no decimal point; anything else
/// rounds to two decimal places and renders with a decimal point.
///
/// # Examples
/// ```
/// use tabsheet_formula::format_number;
///
/// assert_eq!(format_number(10.0), "10");
/// assert_eq!(format_number(1.0 / 3.0), "0.33");
/// assert_eq!(format_number(2.5), "2.5");
/// ```
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        return format!("{}", value as i64);
    }

    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        // Rounding a fractional value up to a whole number keeps its
        // decimal point (2.999 displays as "3.0", not "3").
        format!("{rounded:.1}")
    } else {
        rounded.to_string()
    }
}

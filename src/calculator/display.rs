//! Reading numbers back out of the display text and writing results into it.

use super::operator::OperatorKind;

/// Above this magnitude results switch to exponent notation.
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Remove exactly one trailing operator symbol, if present.
pub fn strip_trailing_operator(text: &str) -> &str {
    match text.chars().last() {
        Some(last) if OperatorKind::from_symbol(last).is_some() => &text[..text.len() - 1],
        _ => text,
    }
}

/// Parse the display as a number after applying the stripping rule.
///
/// Returns `None` for anything that is not a finite number: an empty
/// display, a bare `-`, or an error message.
pub fn parse_display(text: &str) -> Option<f64> {
    let number = strip_trailing_operator(text);

    if number.is_empty()
        || !number
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == '-' || c == 'e')
    {
        return None;
    }

    number.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Format a result for the display.
///
/// Whole numbers print without a fractional part, and negative zero
/// prints as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= EXPONENT_THRESHOLD {
        format!("{:e}", value)
    } else {
        format!("{}", value)
    }
}

//! Conversions between numeric property values and input field text.

#[cfg(test)]
#[path = "number_input_test.rs"]
mod number_input_test;

/// Text shown in a number field. Absent and NaN values show as empty.
///
/// Matches the browser's own number-to-string rule so the field shows what a
/// number input would: plain decimals for magnitudes in `[1e-6, 1e21)`,
/// exponent form (`1e+21`, `1.5e-7`) outside it.
#[must_use]
pub fn number_display_value(value: Option<f64>) -> String {
    match value {
        None => String::new(),
        Some(v) if v.is_nan() => String::new(),
        Some(v) if v.is_infinite() => (if v > 0.0 { "Infinity" } else { "-Infinity" }).to_owned(),
        // Negative zero displays as "0".
        Some(v) if v == 0.0 => "0".to_owned(),
        Some(v) if v.abs() >= 1e21 || v.abs() < 1e-6 => exponent_form(v),
        Some(v) => v.to_string(),
    }
}

/// Shortest exponent form with an explicit sign on positive exponents.
fn exponent_form(value: f64) -> String {
    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => text,
    }
}

/// Parse number field text. Blank or non-numeric text yields `None`.
#[must_use]
pub fn parse_number_input(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| !v.is_nan())
}

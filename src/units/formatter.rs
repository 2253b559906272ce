use crate::units::types::{LengthUnit, RoundingMode};

/// Render a rounded value for display.
///
/// Two-decimal values always keep a fractional digit ("1.0", "304.8");
/// truncated values render as whole numbers ("1").
pub fn format_value(value: f64, mode: RoundingMode) -> String {
    match mode {
        RoundingMode::Hundredths => {
            let text = value.to_string();
            if value.is_finite() && !text.contains('.') {
                format!("{}.0", text)
            } else {
                text
            }
        }
        RoundingMode::Truncate => {
            if value.is_finite() {
                format!("{:.0}", value)
            } else {
                value.to_string()
            }
        }
    }
}

/// Result line shown under the pickers, e.g. "Result: 1.0 Meters"
pub fn format_label(formatted_value: &str, unit: LengthUnit) -> String {
    format!("Result: {} {}", formatted_value, unit.display_name())
}

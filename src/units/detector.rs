use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Number (optional sign, decimal, exponent) followed by a unit word.
    /// Examples: "100 cm", "1.5m", "-2 feet", "1e3 mm"
    static ref QUANTITY_PATTERN: Regex = Regex::new(
        r"^([+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)\s*([a-zA-Z]+)$"
    ).unwrap();
}

/// Check if a string looks like a number with a unit attached
pub fn looks_like_quantity(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }

    QUANTITY_PATTERN.is_match(trimmed)
}

/// Split "100 cm" into ("100", "cm")
pub fn split_quantity(s: &str) -> Option<(&str, &str)> {
    let caps = QUANTITY_PATTERN.captures(s.trim())?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

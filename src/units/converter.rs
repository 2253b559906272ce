use crate::units::error::UnitError;
use crate::units::formatter::format_value;
use crate::units::types::{ConversionRequest, ConversionResult, LengthUnit, RoundingMode};

/// Parse user input as a decimal number.
/// Anything that isn't a finite number counts as zero.
pub fn parse_input(raw_input: &str) -> f64 {
    match raw_input.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Round half away from zero to two decimal places
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        // Too large to carry a fractional part anyway
        return value;
    }
    scaled.round() / 100.0
}

/// Apply a rounding mode to a converted value
pub fn apply_rounding(value: f64, mode: RoundingMode) -> f64 {
    let rounded = match mode {
        RoundingMode::Hundredths => round2(value),
        RoundingMode::Truncate => truncate_cents(value),
    };
    // -0.0 displays as "-0.0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Round to whole cents with ties toward positive infinity, then drop the
/// cents the way integer division by 100 would. Non-finite values pass through.
fn truncate_cents(value: f64) -> f64 {
    let cents = (value * 100.0 + 0.5).floor();
    if !cents.is_finite() {
        return value.trunc();
    }
    (cents / 100.0).trunc()
}

/// Convert a value through the base unit without rounding
pub fn convert_value(value: f64, source_factor: f64, target_factor: f64) -> f64 {
    let meters = value * source_factor;
    meters / target_factor
}

/// Stateless conversion model. All inputs are passed explicitly on every call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionModel {
    rounding: RoundingMode,
}

impl ConversionModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rounding(rounding: RoundingMode) -> Self {
        Self { rounding }
    }

    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Convert raw input between two catalog units, returning the display string
    pub fn convert(&self, raw_input: &str, source: LengthUnit, target: LengthUnit) -> String {
        self.convert_factors(raw_input, source.factor(), target.factor())
    }

    /// Same as [`convert`](Self::convert) with the factors given directly
    pub fn convert_factors(
        &self,
        raw_input: &str,
        source_factor: f64,
        target_factor: f64,
    ) -> String {
        let value = self.rounded_value(raw_input, source_factor, target_factor);
        format_value(value, self.rounding)
    }

    /// Checked variant of [`convert_factors`](Self::convert_factors) for factors
    /// that don't come from the catalog
    pub fn try_convert_factors(
        &self,
        raw_input: &str,
        source_factor: f64,
        target_factor: f64,
    ) -> Result<String, UnitError> {
        for factor in [source_factor, target_factor] {
            if !(factor.is_finite() && factor > 0.0) {
                return Err(UnitError::InvalidFactor(factor));
            }
        }
        Ok(self.convert_factors(raw_input, source_factor, target_factor))
    }

    pub fn convert_request(&self, request: &ConversionRequest) -> ConversionResult {
        let value = self.rounded_value(
            &request.raw_input,
            request.source.factor(),
            request.target.factor(),
        );
        ConversionResult {
            value,
            formatted_value: format_value(value, self.rounding),
            target: request.target,
        }
    }

    fn rounded_value(&self, raw_input: &str, source_factor: f64, target_factor: f64) -> f64 {
        let parsed = parse_input(raw_input);
        apply_rounding(
            convert_value(parsed, source_factor, target_factor),
            self.rounding,
        )
    }
}

/// Convert with two-decimal rounding
pub fn convert(raw_input: &str, source: LengthUnit, target: LengthUnit) -> String {
    ConversionModel::new().convert(raw_input, source, target)
}

/// Convert with two-decimal rounding, factors given in meters per unit
pub fn convert_factors(raw_input: &str, source_factor: f64, target_factor: f64) -> String {
    ConversionModel::new().convert_factors(raw_input, source_factor, target_factor)
}

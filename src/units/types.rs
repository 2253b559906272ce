use crate::units::error::UnitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported unit of length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum LengthUnit {
    Centimeters,
    Meters,
    Feet,
    Millimeters,
}

impl LengthUnit {
    /// Catalog in the order the unit pickers offer it
    pub const ALL: [LengthUnit; 4] = [
        LengthUnit::Centimeters,
        LengthUnit::Meters,
        LengthUnit::Feet,
        LengthUnit::Millimeters,
    ];

    /// Meters per one of this unit
    pub const fn factor(self) -> f64 {
        match self {
            LengthUnit::Centimeters => 0.01,
            LengthUnit::Meters => 1.0,
            LengthUnit::Feet => 0.3048,
            LengthUnit::Millimeters => 0.001,
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            LengthUnit::Centimeters => "Centimeters",
            LengthUnit::Meters => "Meters",
            LengthUnit::Feet => "Feet",
            LengthUnit::Millimeters => "Millimeters",
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Centimeters => "cm",
            LengthUnit::Meters => "m",
            LengthUnit::Feet => "ft",
            LengthUnit::Millimeters => "mm",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            LengthUnit::Centimeters => &["centimeter", "centimetre", "centimetres"],
            LengthUnit::Meters => &["meter", "metre", "metres"],
            LengthUnit::Feet => &["foot"],
            LengthUnit::Millimeters => &["millimeter", "millimetre", "millimetres"],
        }
    }

    /// Look up a unit by symbol, display name, or singular name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        let needle = name.trim();
        Self::ALL.into_iter().find(|unit| {
            needle.eq_ignore_ascii_case(unit.symbol())
                || needle.eq_ignore_ascii_case(unit.display_name())
                || unit
                    .aliases()
                    .iter()
                    .any(|alias| needle.eq_ignore_ascii_case(alias))
        })
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for LengthUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnitError::UnknownUnit(s.to_string()))
    }
}

impl TryFrom<String> for LengthUnit {
    type Error = UnitError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LengthUnit> for String {
    fn from(unit: LengthUnit) -> Self {
        unit.symbol().to_string()
    }
}

/// Catalog entry as shown to a picker
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitInfo {
    pub name: &'static str,
    pub symbol: &'static str,
    /// Meters per unit
    pub factor: f64,
}

impl From<LengthUnit> for UnitInfo {
    fn from(unit: LengthUnit) -> Self {
        Self {
            name: unit.display_name(),
            symbol: unit.symbol(),
            factor: unit.factor(),
        }
    }
}

/// The whole catalog in picker order
pub fn catalog() -> Vec<UnitInfo> {
    LengthUnit::ALL.into_iter().map(UnitInfo::from).collect()
}

/// A single conversion as requested by the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    /// Text as typed by the user, possibly empty or non-numeric
    pub raw_input: String,
    pub source: LengthUnit,
    pub target: LengthUnit,
}

impl ConversionRequest {
    pub fn new(raw_input: impl Into<String>, source: LengthUnit, target: LengthUnit) -> Self {
        Self {
            raw_input: raw_input.into(),
            source,
            target,
        }
    }
}

/// Result of a conversion, ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    /// Rounded numeric value
    pub value: f64,
    /// Display string for `value`
    pub formatted_value: String,
    pub target: LengthUnit,
}

/// How the converted value is reduced to two decimal places
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingMode {
    /// Round half away from zero to two decimals
    #[default]
    Hundredths,
    /// Round the value scaled by 100, then drop the fractional part entirely
    Truncate,
}

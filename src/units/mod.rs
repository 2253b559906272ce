// Length units and the conversion model

pub mod converter;
pub mod detector;
pub mod error;
pub mod formatter;
pub mod types;

#[cfg(test)]
mod tests;

pub use converter::{convert, convert_factors, round2, ConversionModel};
pub use detector::{looks_like_quantity, split_quantity};
pub use error::UnitError;
pub use formatter::{format_label, format_value};
pub use types::{
    catalog, ConversionRequest, ConversionResult, LengthUnit, RoundingMode, UnitInfo,
};

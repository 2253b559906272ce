pub mod config;
pub mod state;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use state::ConverterState;
pub use units::{convert, convert_factors, ConversionModel, LengthUnit, RoundingMode};

use crate::config::Config;
use crate::units::{format_label, ConversionModel, LengthUnit, UnitError};
use tracing::debug;

/// Screen state owned by the presentation layer.
/// Every edit or picker selection recomputes the output through the pure model.
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterState {
    input: String,
    source: LengthUnit,
    target: LengthUnit,
    output: String,
    model: ConversionModel,
}

impl Default for ConverterState {
    fn default() -> Self {
        Self::new(&Config::empty())
    }
}

impl ConverterState {
    /// Output stays empty until the first edit or selection
    pub fn new(config: &Config) -> Self {
        Self {
            input: String::new(),
            source: config.defaults.from,
            target: config.defaults.to,
            output: String::new(),
            model: ConversionModel::with_rounding(config.defaults.rounding),
        }
    }

    /// Build from TOML config content
    pub fn from_toml(config_content: &str) -> Result<Self, UnitError> {
        Ok(Self::new(&Config::load_from_str(config_content)?))
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn source(&self) -> LengthUnit {
        self.source
    }

    pub fn target(&self) -> LengthUnit {
        self.target
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// "Result: <value> <Unit>"
    pub fn label(&self) -> String {
        format_label(&self.output, self.target)
    }

    pub fn set_input(&mut self, input: impl Into<String>) -> &str {
        self.input = input.into();
        self.recompute()
    }

    pub fn select_source(&mut self, unit: LengthUnit) -> &str {
        self.source = unit;
        self.recompute()
    }

    pub fn select_target(&mut self, unit: LengthUnit) -> &str {
        self.target = unit;
        self.recompute()
    }

    /// Exchange source and target units
    pub fn swap(&mut self) -> &str {
        std::mem::swap(&mut self.source, &mut self.target);
        self.recompute()
    }

    fn recompute(&mut self) -> &str {
        self.output = self.model.convert(&self.input, self.source, self.target);
        debug!(
            source = self.source.symbol(),
            target = self.target.symbol(),
            output = %self.output,
            "Recomputed conversion"
        );
        &self.output
    }
}

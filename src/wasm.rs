// WebAssembly bindings for a web front end
use crate::config::Config;
use crate::state::ConverterState;
use crate::units::{self, ConversionModel, LengthUnit};
use wasm_bindgen::prelude::*;

fn parse_unit(name: &str) -> Result<LengthUnit, JsValue> {
    name.parse::<LengthUnit>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub struct ConverterWasm {
    model: ConversionModel,
}

impl Default for ConverterWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl ConverterWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            model: ConversionModel::new(),
        }
    }

    /// Build a converter from TOML config content
    #[wasm_bindgen]
    pub fn with_config(config_content: &str) -> Result<ConverterWasm, JsValue> {
        let config = Config::load_from_str(config_content)
            .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?;
        Ok(Self {
            model: ConversionModel::with_rounding(config.defaults.rounding),
        })
    }

    /// Convert raw input between two units given by name or symbol
    #[wasm_bindgen]
    pub fn convert(&self, raw_input: &str, from: &str, to: &str) -> Result<String, JsValue> {
        Ok(self.model.convert(raw_input, parse_unit(from)?, parse_unit(to)?))
    }

    #[wasm_bindgen]
    pub fn convert_factors(
        &self,
        raw_input: &str,
        source_factor: f64,
        target_factor: f64,
    ) -> Result<String, JsValue> {
        self.model
            .try_convert_factors(raw_input, source_factor, target_factor)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Catalog as a JSON array of {name, symbol, factor}
    #[wasm_bindgen]
    pub fn units(&self) -> Result<String, JsValue> {
        serde_json::to_string(&units::catalog())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize units: {}", e)))
    }

    /// Display names in picker order
    #[wasm_bindgen]
    pub fn unit_names(&self) -> js_sys::Array {
        LengthUnit::ALL
            .iter()
            .map(|unit| JsValue::from_str(unit.display_name()))
            .collect()
    }
}

/// Stateful wrapper for a single converter screen
#[wasm_bindgen]
pub struct ConverterSession {
    state: ConverterState,
}

impl Default for ConverterSession {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl ConverterSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            state: ConverterState::default(),
        }
    }

    /// Start a session with the units and rounding from TOML config content
    #[wasm_bindgen]
    pub fn with_config(config_content: &str) -> Result<ConverterSession, JsValue> {
        let state = ConverterState::from_toml(config_content)
            .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?;
        Ok(Self { state })
    }

    #[wasm_bindgen]
    pub fn set_input(&mut self, input: &str) -> String {
        self.state.set_input(input).to_string()
    }

    #[wasm_bindgen]
    pub fn select_source(&mut self, unit: &str) -> Result<String, JsValue> {
        Ok(self.state.select_source(parse_unit(unit)?).to_string())
    }

    #[wasm_bindgen]
    pub fn select_target(&mut self, unit: &str) -> Result<String, JsValue> {
        Ok(self.state.select_target(parse_unit(unit)?).to_string())
    }

    #[wasm_bindgen]
    pub fn swap(&mut self) -> String {
        self.state.swap().to_string()
    }

    #[wasm_bindgen]
    pub fn output(&self) -> String {
        self.state.output().to_string()
    }

    #[wasm_bindgen]
    pub fn label(&self) -> String {
        self.state.label()
    }
}

// WebAssembly bindings for a browser front end
use crate::convert::{self, ConversionRequest, Unit};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct LengthConverterWasm {}

impl Default for LengthConverterWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct UnitInfo {
    symbol: &'static str,
    label: &'static str,
    factor_to_mm: f64,
}

fn parse_unit(tag: &str) -> Result<Unit, JsValue> {
    tag.parse::<Unit>().map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
impl LengthConverterWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {}
    }

    /// Convert raw amount text and return the display string for the result
    /// Text that isn't a number converts as 0
    #[wasm_bindgen]
    pub fn convert(&self, amount_text: &str, from: &str, to: &str) -> Result<String, JsValue> {
        let (source, target) = (parse_unit(from)?, parse_unit(to)?);
        let request = ConversionRequest::from_input(amount_text, source, target);
        Ok(request.evaluate().formatted)
    }

    #[wasm_bindgen]
    pub fn convert_value(&self, amount: f64, from: &str, to: &str) -> Result<f64, JsValue> {
        Ok(convert::convert(amount, parse_unit(from)?, parse_unit(to)?))
    }

    #[wasm_bindgen]
    pub fn format(&self, value: f64) -> String {
        convert::format(value)
    }

    #[wasm_bindgen]
    pub fn label(&self, unit: &str) -> Result<String, JsValue> {
        Ok(parse_unit(unit)?.label().to_string())
    }

    /// Units in picker order as a JSON array of {symbol, label, factor_to_mm}
    #[wasm_bindgen]
    pub fn units(&self) -> Result<String, JsValue> {
        let units: Vec<UnitInfo> = Unit::ALL
            .iter()
            .map(|unit| UnitInfo {
                symbol: unit.symbol(),
                label: unit.label(),
                factor_to_mm: unit.factor_to_mm(),
            })
            .collect();

        serde_json::to_string(&units)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize units: {}", e)))
    }

    /// Evaluate a JSON request: {"amount": 12, "from": "in", "to": "ft"}
    /// Returns the conversion as JSON
    #[wasm_bindgen]
    pub fn convert_request(&self, request_json: &str) -> Result<String, JsValue> {
        let request: ConversionRequest = serde_json::from_str(request_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse request JSON: {}", e)))?;

        serde_json::to_string(&request.evaluate())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize conversion: {}", e)))
    }
}

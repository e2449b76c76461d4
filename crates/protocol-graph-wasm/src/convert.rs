use std::fmt::Display;

use protocol_graph::{
    config::ConfigOverrides,
    diagram::ProtocolDiagram,
    field::Specification,
    serde::{SpecificationDef, StyleDef},
};
use wasm_bindgen::JsValue;

/// Errors cross into JavaScript as their display message.
pub fn error_to_js<E: Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Accepts `undefined`/`null` as "no style".
pub fn style_from_js(style: JsValue) -> Result<ConfigOverrides, JsValue> {
    if style.is_undefined() || style.is_null() {
        return Ok(ConfigOverrides::default());
    }

    let def: StyleDef = serde_wasm_bindgen::from_value(style).map_err(error_to_js)?;
    ConfigOverrides::try_from(def).map_err(error_to_js)
}

/// Builds a diagram from a JSON field list: `{"fields": [{"name": "Type", "bits": 8}]}`.
pub fn diagram_from_json(fields_json: &str) -> Result<ProtocolDiagram, String> {
    let def: SpecificationDef = serde_json::from_str(fields_json).map_err(|e| e.to_string())?;
    let spec = Specification::try_from(def).map_err(|e| e.to_string())?;
    Ok(ProtocolDiagram::with_defaults(spec))
}

//! WASM bindings for the `protocol-graph` header diagram renderer.
//!
//! Two entry points are exposed as free functions:
//!
//! - `renderDiagram(spec, style?)` renders a builtin protocol name or a
//!   `Field:bits,...` spec (with an optional `?key=value` suffix) and returns
//!   the diagram text.
//! - `listProtocols()` returns the builtin protocol names.
//!
//! The optional `style` is a plain object shaped like
//! [`StyleDef`](protocol_graph::serde::StyleDef):
//!
//! ```text
//! // const text = renderDiagram("tcp", { bits: 16, order: "lsb", sepchar: "!" });
//! // const names = listProtocols();
//! ```
//!
//! [`WasmDiagram`] keeps a parsed field list around so it can be re-rendered
//! with different styles.
//!
//! Errors are returned as a `JsValue` string holding the error message.

mod convert;

use protocol_graph::{config::ConfigOverrides, errors::DiagramError, protocols};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_name = renderDiagram)]
pub fn render_diagram(spec: &str, style: JsValue) -> Result<String, JsValue> {
    let overrides = convert::style_from_js(style)?;
    render_text(spec, &overrides).map_err(convert::error_to_js)
}

#[wasm_bindgen(js_name = listProtocols)]
pub fn list_protocols() -> Vec<String> {
    protocols::names().map(str::to_string).collect()
}

/// A diagram built from a JSON field list.
#[wasm_bindgen]
pub struct WasmDiagram {
    diagram: protocol_graph::diagram::ProtocolDiagram,
}

#[wasm_bindgen]
impl WasmDiagram {
    /// `fields_json` must deserialize into
    /// [`SpecificationDef`](protocol_graph::serde::SpecificationDef).
    #[wasm_bindgen(constructor)]
    pub fn new(fields_json: &str) -> Result<WasmDiagram, JsValue> {
        let diagram = convert::diagram_from_json(fields_json).map_err(convert::error_to_js)?;
        Ok(WasmDiagram { diagram })
    }

    /// Applies every option set in `style`; unset options keep their value.
    #[wasm_bindgen(js_name = setStyle)]
    pub fn set_style(&mut self, style: JsValue) -> Result<(), JsValue> {
        let overrides = convert::style_from_js(style)?;
        self.diagram.apply(&overrides);
        Ok(())
    }

    pub fn render(&self) -> Result<String, JsValue> {
        self.diagram.to_text().map_err(convert::error_to_js)
    }
}

fn render_text(spec: &str, overrides: &ConfigOverrides) -> Result<String, DiagramError> {
    protocols::resolve(spec, overrides)?.to_text()
}

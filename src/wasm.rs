//! WASM bindings for Switchnet Core.
//!
//! This module provides JavaScript-friendly bindings so a browser drawing
//! layer can load a network once and query it for each input assignment.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmSwitchNet } from 'switchnet_core';
//!
//! await init();
//!
//! const net = new WasmSwitchNet(`
//!   .supply VDD
//!   .output Y
//!   PMOS P A
//!   .edge VDD P
//!   .edge P Y
//! `);
//!
//! net.evaluate("A=0");          // ["Y"]
//! net.is_visited("A=1", "P");   // true
//! ```

use wasm_bindgen::prelude::*;

use crate::dsl;
use crate::error::SwitchError;
use crate::eval::{evaluate_supply, gate_level, InputAssignment};
use crate::network::Network;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(e: SwitchError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// WASM-compatible wrapper around a parsed [`Network`].
#[wasm_bindgen]
pub struct WasmSwitchNet {
    network: Network,
}

#[wasm_bindgen]
impl WasmSwitchNet {
    /// Build a network from a description string.
    #[wasm_bindgen(constructor)]
    pub fn new(description: &str) -> Result<WasmSwitchNet, JsValue> {
        let ast = dsl::parse(description).map_err(to_js)?;
        let network = Network::from_ast(&ast).map_err(to_js)?;
        Ok(WasmSwitchNet { network })
    }

    /// Names of the outputs asserted under `assignment` (e.g. `"A=1 B=0"`).
    #[wasm_bindgen]
    pub fn evaluate(&self, assignment: &str) -> Result<Vec<JsValue>, JsValue> {
        let inputs = InputAssignment::parse(assignment).map_err(to_js)?;
        let result = evaluate_supply(&self.network, &inputs).map_err(to_js)?;
        Ok(result
            .asserted_names(&self.network)
            .into_iter()
            .map(JsValue::from_str)
            .collect())
    }

    /// Whether `node` is reached from the supply under `assignment`.
    #[wasm_bindgen]
    pub fn is_visited(&self, assignment: &str, node: &str) -> Result<bool, JsValue> {
        let id = self
            .network
            .find_node(node)
            .ok_or_else(|| to_js(SwitchError::unknown_node(node)))?;
        let inputs = InputAssignment::parse(assignment).map_err(to_js)?;
        let result = evaluate_supply(&self.network, &inputs).map_err(to_js)?;
        Ok(result.is_visited(id))
    }

    /// Resolved gate level of `node`, or `undefined` for rails and outputs.
    #[wasm_bindgen]
    pub fn gate_level(&self, assignment: &str, node: &str) -> Result<Option<bool>, JsValue> {
        let id = self
            .network
            .find_node(node)
            .ok_or_else(|| to_js(SwitchError::unknown_node(node)))?;
        let inputs = InputAssignment::parse(assignment).map_err(to_js)?;
        gate_level(&self.network, id, &inputs).map_err(to_js)
    }

    /// Kind of `node` as an upper-case tag (`"PMOS"`, `"SUPPLY"`, ...).
    #[wasm_bindgen]
    pub fn node_kind(&self, node: &str) -> Option<String> {
        let id = self.network.find_node(node)?;
        self.network.node(id).map(|n| n.kind.to_string())
    }

    /// Number of nodes in the network.
    #[wasm_bindgen(getter)]
    pub fn node_count(&self) -> usize {
        self.network.len()
    }
}

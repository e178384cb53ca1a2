//! WASM bindings for Logicalizer Core.
//!
//! This module exposes the simulator facade to JavaScript so a browser UI
//! can construct a model from DSL text and display its summary.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { CircuitSimulator } from 'logicalizer_core';
//!
//! await init();
//!
//! try {
//!   const sim = new CircuitSimulator('module MyFirstCircuit {}');
//!   console.log(sim.get_info());
//! } catch (error) {
//!   // Lex, syntax and elaboration errors arrive as strings
//!   console.error(error);
//! }
//! ```

use wasm_bindgen::prelude::*;

use crate::simulator::Simulator;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// WASM-compatible wrapper around [`Simulator`].
#[wasm_bindgen(js_name = CircuitSimulator)]
pub struct WasmCircuitSimulator {
    simulator: Simulator,
}

#[wasm_bindgen(js_class = CircuitSimulator)]
impl WasmCircuitSimulator {
    /// Construct a simulator from DSL source text.
    ///
    /// Throws the error message as a string if the source fails to lex,
    /// parse or elaborate.
    #[wasm_bindgen(constructor)]
    pub fn new(dsl_code: &str) -> Result<WasmCircuitSimulator, JsValue> {
        let simulator = Simulator::new(dsl_code).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmCircuitSimulator { simulator })
    }

    /// Summary of every parsed module, for display.
    pub fn get_info(&self) -> String {
        self.simulator.get_info()
    }

    pub fn greet(&self) -> String {
        self.simulator.greet()
    }

    /// Number of modules in the model.
    pub fn module_count(&self) -> usize {
        self.simulator.model().module_count()
    }

    /// Module names in declaration order.
    pub fn module_names(&self) -> Vec<String> {
        self.simulator
            .model()
            .module_names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

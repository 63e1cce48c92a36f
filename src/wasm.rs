//! WASM bindings for Cascade Core.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmCascade } from 'cascade_core';
//!
//! await init();
//!
//! const netlist = `
//! <CIRCUIT>
//! n1=1 n2=2 R=1k
//! n1=2 n2=0 C=100n
//! </CIRCUIT>
//! <TERMS>
//! VT=1 RS=50 RL=10k
//! LFstart=10 LFend=100k Nfreqs=41
//! </TERMS>
//! <OUTPUT>
//! Av dB
//! </OUTPUT>
//! `;
//!
//! const analysis = new WasmCascade(netlist);
//! plot(analysis.frequencies(), analysis.to_csv());
//! ```

use wasm_bindgen::prelude::*;

use crate::driver::{analyse, Report};
use crate::export::ExportConfig;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// An analysed netlist.
#[wasm_bindgen]
pub struct WasmCascade {
    report: Report,
}

#[wasm_bindgen]
impl WasmCascade {
    /// Decode and solve a netlist.
    ///
    /// # Example
    /// ```javascript
    /// const analysis = new WasmCascade(netlist);
    /// ```
    #[wasm_bindgen(constructor)]
    pub fn new(netlist: &str) -> Result<WasmCascade, JsValue> {
        let report = analyse(netlist).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmCascade { report })
    }

    /// Sweep frequencies in Hz.
    #[wasm_bindgen]
    pub fn frequencies(&self) -> Vec<f64> {
        self.report.frequencies().to_vec()
    }

    /// The results table with the default precision and delimiter.
    #[wasm_bindgen]
    pub fn to_csv(&self) -> Result<String, JsValue> {
        self.report
            .to_table(&ExportConfig::new())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

//! WebAssembly interface for running the recall simulator in the browser.
//!
//! The page owns rendering and the auto-run timer; it calls `run_step()` on
//! its own cadence and reads images, energy and history back for display.

use wasm_bindgen::prelude::*;

use crate::{patterns, HopfieldError, Simulator, SimulatorConfig, StepOutcome, TrainingMethod};

fn to_js(e: HopfieldError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// WASM-friendly wrapper around [`Simulator`] preloaded with the reference
/// square and diamond patterns.
#[wasm_bindgen]
pub struct WasmSimulator {
    sim: Simulator,
}

#[wasm_bindgen]
impl WasmSimulator {
    /// Create a simulator from a JSON config (`""` for defaults).
    ///
    /// # Example (JavaScript)
    /// ```javascript
    /// const sim = new WasmSimulator('{"max_iterations": 10, "seed": 7}');
    /// sim.initialize("hebbian");
    /// ```
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<WasmSimulator, JsValue> {
        // Enable panic messages in browser console
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        let config = if config_json.trim().is_empty() {
            SimulatorConfig::default()
        } else {
            SimulatorConfig::from_json(config_json).map_err(to_js)?
        };
        Ok(Self {
            sim: Simulator::new(config).map_err(to_js)?,
        })
    }

    /// Train on the reference patterns and start a run from a noisy diamond.
    ///
    /// `method` is `"hebbian"` or `"pseudoinverse-style"`.
    pub fn initialize(&mut self, method: &str) -> Result<(), JsValue> {
        let method: TrainingMethod = method.parse().map_err(to_js)?;
        self.sim
            .initialize_with_noise(&patterns::reference_set(), method, &patterns::diamond())
            .map_err(to_js)?;
        web_sys::console::log_1(&format!("initialized {} network", method).into());
        Ok(())
    }

    /// Run one step. Returns true if the state changed.
    pub fn run_step(&mut self) -> Result<bool, JsValue> {
        let outcome = self.sim.run_step().map_err(to_js)?;
        Ok(outcome == StepOutcome::Accepted)
    }

    /// Start a fresh run with a newly generated noisy input.
    pub fn reset(&mut self) -> Result<(), JsValue> {
        self.sim.reset().map_err(to_js)
    }

    /// Switch training method and restart.
    pub fn set_method(&mut self, method: &str) -> Result<(), JsValue> {
        let method: TrainingMethod = method.parse().map_err(to_js)?;
        self.sim.set_method(method).map_err(to_js)
    }

    pub fn start(&mut self) -> bool {
        self.sim.start()
    }

    pub fn pause(&mut self) {
        self.sim.pause();
    }

    /// Energy of the current state, or NaN before initialization.
    pub fn energy(&self) -> f64 {
        self.sim.energy().unwrap_or(f64::NAN)
    }

    pub fn iterations(&self) -> usize {
        self.sim.iterations()
    }

    pub fn max_iterations(&self) -> usize {
        self.sim.config().max_iterations
    }

    /// Run state: idle, running, stepping, converged or exhausted.
    pub fn status(&self) -> String {
        self.sim.status().to_string()
    }

    /// Current image as row-major 0/1 bytes.
    pub fn current_image(&self) -> js_sys::Uint8Array {
        let cells = self.sim.current_image().map(|img| img.cells()).unwrap_or(&[]);
        js_sys::Uint8Array::from(cells)
    }

    /// Initial (noisy) image of the run as row-major 0/1 bytes.
    pub fn initial_image(&self) -> js_sys::Uint8Array {
        let cells = self.sim.history().initial().map(|img| img.cells()).unwrap_or(&[]);
        js_sys::Uint8Array::from(cells)
    }

    /// Run history as JSON.
    pub fn history_json(&self) -> Result<String, JsValue> {
        self.sim.history().to_json().map_err(to_js)
    }
}

//! WASM bindings for RLC Transient.
//!
//! This module provides JavaScript-friendly bindings for browser front ends
//! that collect component values in a form and plot the result.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmCircuitSim } from 'rlc_transient';
//!
//! await init();
//!
//! const sim = new WasmCircuitSim();
//! const result = JSON.parse(sim.simulate("RC", "series", JSON.stringify({
//!   resistencia: "100",
//!   voltaje: "5",
//!   capacitor: "0.0001",
//! })));
//!
//! // result.time, result.voltages[i].label / .values, result.currents[i]...
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::{Configuration, TimeGrid, Topology};
use crate::error::TransientError;
use crate::output;
use crate::params::RawParameters;
use crate::simulation::{SimulationConfig, Simulator};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(e: TransientError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// WASM-compatible circuit simulator.
///
/// This struct wraps the native `Simulator` and exchanges JSON strings with
/// JavaScript.
#[wasm_bindgen]
pub struct WasmCircuitSim {
    simulator: Simulator,
}

#[wasm_bindgen]
impl WasmCircuitSim {
    /// Create a simulator on the default grid (1000 points over [0, 0.1] s).
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmCircuitSim {
        WasmCircuitSim {
            simulator: Simulator::new(),
        }
    }

    /// Create a simulator with a custom time grid.
    ///
    /// # Arguments
    /// * `t_start` - First time point in seconds
    /// * `t_stop` - Last time point in seconds
    /// * `points` - Number of time points (at least 2)
    #[wasm_bindgen]
    pub fn with_grid(t_start: f64, t_stop: f64, points: usize) -> Result<WasmCircuitSim, JsValue> {
        let grid = TimeGrid::linspace(t_start, t_stop, points).map_err(to_js)?;
        let config = SimulationConfig::new().with_time_grid(grid);
        Ok(WasmCircuitSim {
            simulator: Simulator::with_config(config),
        })
    }

    /// Run a simulation.
    ///
    /// # Arguments
    /// * `topology` - "RC", "RL" or "RLC"
    /// * `configuration` - "series" or "parallel"
    /// * `params_json` - JSON object mapping field names to raw strings
    ///
    /// # Returns
    /// The waveform panels as a JSON string, or the error message.
    #[wasm_bindgen]
    pub fn simulate(
        &self,
        topology: &str,
        configuration: &str,
        params_json: &str,
    ) -> Result<String, JsValue> {
        let topology: Topology = topology.parse().map_err(to_js)?;
        let configuration: Configuration = configuration.parse().map_err(to_js)?;
        let raw: RawParameters = serde_json::from_str(params_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid parameter object: {}", e)))?;

        let waveforms = self
            .simulator
            .run(topology, configuration, &raw)
            .map_err(to_js)?;
        output::to_json_string(&waveforms).map_err(to_js)
    }

    /// Number of points in the time grid.
    #[wasm_bindgen(getter)]
    pub fn points(&self) -> usize {
        self.simulator.config().time_grid.len()
    }
}

impl Default for WasmCircuitSim {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

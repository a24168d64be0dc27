//! # RLC Transient
//!
//! DC step response of elementary linear circuits.
//!
//! This library provides:
//! - Validated component values (source, resistor, capacitor, inductor)
//! - Closed-form voltage and current waveforms for RC, RL and RLC circuits,
//!   each in series or in parallel
//! - A driver that turns raw user input into a labelled waveform set
//! - Parameter files (flat JSON) and CSV / JSON waveform export
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`components`] - Component kinds, units and validated values
//! - [`circuit`] - Circuit model, topology selection and time grid
//! - [`response`] - Per-topology evaluators and waveform sets
//! - [`params`] - Input field names and raw value parsing
//! - [`simulation`] - The evaluation driver used by every shell
//! - [`persistence`] - Saving and loading parameter files
//! - [`assets`] - Circuit diagram lookup
//! - [`output`] - CSV and JSON writers for waveform sets
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! rlc-transient --topology rc --configuration series -r 100 -v 5 -c 0.0001 > rc.csv
//! ```
//!
//! ### Library
//!
//! ```
//! use rlc_transient::{simulate, Configuration, RawParameters, Topology};
//!
//! let mut raw = RawParameters::new();
//! raw.insert("resistencia".into(), "100".into());
//! raw.insert("voltaje".into(), "5".into());
//! raw.insert("capacitor".into(), "0.0001".into());
//!
//! let waveforms = simulate(Topology::RC, Configuration::Series, &raw).unwrap();
//! assert_eq!(waveforms.get("Voltage across R").unwrap()[0], 5.0);
//! ```
//!
//! ## Circuit Model
//!
//! The source is switched on at `t = 0` with all elements at rest. Series
//! circuits use the first-order closed forms with τ = R·C or τ = L/R; the
//! series RLC circuit reuses the RL current and the RC capacitor voltage
//! rather than solving the second-order equation. Parallel circuits hold the
//! full source voltage across every element, and reactive branch currents
//! are obtained by numerical differentiation or a running-sum integral on
//! the time grid.

pub mod assets;
pub mod circuit;
pub mod components;
pub mod error;
pub mod output;
pub mod params;
pub mod persistence;
pub mod response;
pub mod simulation;

// Re-export main types for convenience
pub use circuit::{CircuitKey, CircuitModel, Configuration, TimeGrid, Topology};
pub use components::{ComponentKind, ComponentValue, Unit};
pub use error::{Result, TransientError};
pub use params::{ParameterMap, ParameterSet, RawParameters};
pub use response::{Evaluator, WaveformSet};
pub use simulation::{simulate, SimulationConfig, Simulator};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmCircuitSim;

//! Time-domain response of the six supported circuits.
//!
//! This module provides the evaluators that turn a [`CircuitModel`] into a
//! [`WaveformSet`].
//!
//! ## Circuits
//!
//! With `V0` the source voltage and the source switched on at `t = 0`:
//!
//! | Circuit | τ | Outputs |
//! |---------|---|---------|
//! | series RC | R·C | `v_R = V0 e^(-t/τ)`, `v_C = V0 (1 - e^(-t/τ))`, `i = v_R / R` |
//! | series RL | L/R | `i = V0 (1 - e^(-t/τ)) / R`, `v_R = R i`, `v_L = V0 e^(-t/τ)` |
//! | series RLC | L/R, R·C | RL current, `v_R = R i`, `v_L = L di/dt`, `v_C` as series RC |
//! | parallel RC | - | `v = V0`, `i_R = V0/R`, `i_C = C dv/dt`, total |
//! | parallel RL | - | `v = V0`, `i_R = V0/R`, `i_L = Σv·Δt / L`, total |
//! | parallel RLC | - | all of the above, `i = i_R + i_L + i_C` |
//!
//! Derivatives use central differences with second-order one-sided edges;
//! the inductor integral is a running sum with the first grid step `Δt`.
//!
//! The evaluators are plain structs of magnitudes. [`Evaluator`] selects one
//! by [`CircuitKey`]; there is no dynamic dispatch.

mod numeric;
mod parallel;
mod series;
mod waveform;

pub use numeric::{gradient, running_integral, EdgeOrder};
pub use parallel::{ParallelRc, ParallelRl, ParallelRlc};
pub use series::{SeriesRc, SeriesRl, SeriesRlc};
pub use waveform::*;

use crate::circuit::{CircuitKey, CircuitModel, Configuration, TimeGrid, Topology};
use crate::error::Result;

/// One of the six circuit evaluators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluator {
    SeriesRc(SeriesRc),
    SeriesRl(SeriesRl),
    SeriesRlc(SeriesRlc),
    ParallelRc(ParallelRc),
    ParallelRl(ParallelRl),
    ParallelRlc(ParallelRlc),
}

impl Evaluator {
    /// Pick the evaluator for the model's topology and configuration.
    pub fn for_model(model: &CircuitModel) -> Result<Self> {
        let evaluator = match (model.topology(), model.configuration()) {
            (Topology::RC, Configuration::Series) => {
                Evaluator::SeriesRc(SeriesRc::from_model(model)?)
            }
            (Topology::RL, Configuration::Series) => {
                Evaluator::SeriesRl(SeriesRl::from_model(model)?)
            }
            (Topology::RLC, Configuration::Series) => {
                Evaluator::SeriesRlc(SeriesRlc::from_model(model)?)
            }
            (Topology::RC, Configuration::Parallel) => {
                Evaluator::ParallelRc(ParallelRc::from_model(model)?)
            }
            (Topology::RL, Configuration::Parallel) => {
                Evaluator::ParallelRl(ParallelRl::from_model(model)?)
            }
            (Topology::RLC, Configuration::Parallel) => {
                Evaluator::ParallelRlc(ParallelRlc::from_model(model)?)
            }
        };
        Ok(evaluator)
    }

    /// The key this evaluator answers to.
    pub fn key(&self) -> CircuitKey {
        let (topology, configuration) = match self {
            Evaluator::SeriesRc(_) => (Topology::RC, Configuration::Series),
            Evaluator::SeriesRl(_) => (Topology::RL, Configuration::Series),
            Evaluator::SeriesRlc(_) => (Topology::RLC, Configuration::Series),
            Evaluator::ParallelRc(_) => (Topology::RC, Configuration::Parallel),
            Evaluator::ParallelRl(_) => (Topology::RL, Configuration::Parallel),
            Evaluator::ParallelRlc(_) => (Topology::RLC, Configuration::Parallel),
        };
        CircuitKey::new(topology, configuration)
    }

    /// Evaluate every waveform of the circuit on `grid`.
    pub fn waveforms(&self, grid: &TimeGrid) -> WaveformSet {
        match self {
            Evaluator::SeriesRc(e) => e.waveforms(grid),
            Evaluator::SeriesRl(e) => e.waveforms(grid),
            Evaluator::SeriesRlc(e) => e.waveforms(grid),
            Evaluator::ParallelRc(e) => e.waveforms(grid),
            Evaluator::ParallelRl(e) => e.waveforms(grid),
            Evaluator::ParallelRlc(e) => e.waveforms(grid),
        }
    }
}

/// Evaluate a model on its own time grid.
pub fn evaluate(model: &CircuitModel) -> Result<WaveformSet> {
    let evaluator = Evaluator::for_model(model)?;
    Ok(evaluator.waveforms(model.time_grid()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ComponentValue;

    fn model(topology: Topology, configuration: Configuration) -> CircuitModel {
        let mut elements = vec![ComponentValue::resistor(100.0).unwrap()];
        if topology.has_inductor() {
            elements.push(ComponentValue::inductor(0.5).unwrap());
        }
        if topology.has_capacitor() {
            elements.push(ComponentValue::capacitor(1e-4).unwrap());
        }
        CircuitModel::new(
            topology,
            configuration,
            ComponentValue::source(5.0).unwrap(),
            elements,
        )
        .unwrap()
    }

    #[test]
    fn test_selection_matches_key() {
        for topology in Topology::ALL {
            for configuration in [Configuration::Series, Configuration::Parallel] {
                let m = model(topology, configuration);
                let evaluator = Evaluator::for_model(&m).unwrap();
                assert_eq!(evaluator.key(), m.key());
            }
        }
    }

    #[test]
    fn test_series_outputs_present_elements() {
        let set = evaluate(&model(Topology::RC, Configuration::Series)).unwrap();
        assert!(set.contains(VOLTAGE_R) && set.contains(VOLTAGE_C) && set.contains(CURRENT));
        assert!(!set.contains(VOLTAGE_L));

        let set = evaluate(&model(Topology::RL, Configuration::Series)).unwrap();
        assert!(set.contains(VOLTAGE_L) && !set.contains(VOLTAGE_C));
    }

    #[test]
    fn test_parallel_outputs_branch_currents() {
        let set = evaluate(&model(Topology::RL, Configuration::Parallel)).unwrap();
        let labels: Vec<&str> = set.labels().collect();
        assert_eq!(labels, vec![SOURCE_VOLTAGE, CURRENT_R, CURRENT_L, TOTAL_CURRENT]);
    }

    #[test]
    fn test_evaluate_uses_model_grid() {
        let m = model(Topology::RC, Configuration::Series);
        let set = evaluate(&m).unwrap();
        assert_eq!(set.time(), m.time_grid().points());
        assert_eq!(set.time()[0], 0.001);
    }
}

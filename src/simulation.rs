//! Evaluation driver.
//!
//! The [`Simulator`] is the single entry point shells call: it turns raw user
//! input into validated component values, builds the [`CircuitModel`] for the
//! selected topology and configuration, and returns the [`WaveformSet`].
//! It never renders anything.
//!
//! Validation happens before any evaluation. A run either produces the full
//! waveform set or fails with the first input error.

use std::path::PathBuf;

use crate::assets::{self, DEFAULT_ASSETS_DIR};
use crate::circuit::{CircuitKey, CircuitModel, Configuration, TimeGrid, Topology};
use crate::error::Result;
use crate::params::{parse_parameters, ParameterMap, ParameterSet, RawParameters};
use crate::response::{Evaluator, WaveformSet};

/// Configuration for the simulator.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Time points every run is evaluated on.
    pub time_grid: TimeGrid,
    /// Directory holding the circuit diagrams.
    pub assets_dir: PathBuf,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_grid: TimeGrid::interactive(),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
        }
    }
}

impl SimulationConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the time grid.
    ///
    /// The default is 1000 points over [0, 0.1] s.
    pub fn with_time_grid(mut self, time_grid: TimeGrid) -> Self {
        self.time_grid = time_grid;
        self
    }

    /// Set the directory searched for circuit diagrams.
    pub fn with_assets_dir(mut self, assets_dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = assets_dir.into();
        self
    }
}

/// Runs simulations for a shell.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Create a new simulator with default configuration.
    pub fn new() -> Self {
        Self::with_config(SimulationConfig::default())
    }

    /// Create a new simulator with custom configuration.
    pub fn with_config(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulate from raw text input.
    ///
    /// Fails with `ParameterParse` naming the first non-numeric field, with
    /// `MissingParameter` if the topology needs a field that is absent, and
    /// with `InvalidValue` for a non-positive value.
    pub fn run(
        &self,
        topology: Topology,
        configuration: Configuration,
        raw: &RawParameters,
    ) -> Result<WaveformSet> {
        let values = parse_parameters(topology, raw)?;
        self.run_map(topology, configuration, &values)
    }

    /// Simulate from a numeric parameter mapping, e.g. a loaded file.
    pub fn run_map(
        &self,
        topology: Topology,
        configuration: Configuration,
        values: &ParameterMap,
    ) -> Result<WaveformSet> {
        let params = ParameterSet::from_map(topology, values)?;
        self.run_parameters(CircuitKey::new(topology, configuration), &params)
    }

    /// Simulate from already numeric parameters.
    pub fn run_parameters(&self, key: CircuitKey, params: &ParameterSet) -> Result<WaveformSet> {
        let model = self.build_model(key, params)?;
        self.run_model(&model)
    }

    /// Build the model a run would evaluate, on the configured grid.
    pub fn build_model(&self, key: CircuitKey, params: &ParameterSet) -> Result<CircuitModel> {
        let (source, elements) = params.components(key.topology)?;
        let model = CircuitModel::new(key.topology, key.configuration, source, elements)?
            .with_time_grid(self.config.time_grid.clone());
        Ok(model)
    }

    /// Evaluate a prepared model on its own grid.
    pub fn run_model(&self, model: &CircuitModel) -> Result<WaveformSet> {
        let _span = tracing::info_span!(
            "simulation",
            topology = %model.topology(),
            configuration = %model.configuration()
        )
        .entered();

        let evaluator = Evaluator::for_model(model)?;
        let grid = model.time_grid();
        tracing::debug!(
            ?evaluator,
            points = grid.len(),
            start = grid.start(),
            stop = grid.stop(),
            "evaluating circuit"
        );

        let waveforms = evaluator.waveforms(grid);
        tracing::debug!(waveforms = waveforms.len(), "simulation finished");
        Ok(waveforms)
    }

    /// Diagram image for `topology` under the configured assets directory.
    pub fn diagram(&self, topology: Topology) -> Result<PathBuf> {
        assets::resolve_diagram(&self.config.assets_dir, topology)
    }
}

/// Simulate from raw text input with the default configuration.
pub fn simulate(
    topology: Topology,
    configuration: Configuration,
    raw: &RawParameters,
) -> Result<WaveformSet> {
    Simulator::new().run(topology, configuration, raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransientError;
    use crate::persistence::{read_parameters, write_parameters};
    use crate::response::{
        CURRENT, CURRENT_C, CURRENT_L, CURRENT_R, SOURCE_VOLTAGE, TOTAL_CURRENT, VOLTAGE_C,
        VOLTAGE_L, VOLTAGE_R,
    };
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn raw(pairs: &[(&str, &str)]) -> RawParameters {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn rc_input() -> RawParameters {
        raw(&[("resistencia", "100"), ("voltaje", "5"), ("capacitor", "0.0001")])
    }

    fn rlc_input() -> RawParameters {
        raw(&[
            ("resistencia", "50"),
            ("voltaje", "10"),
            ("inductor", "0.5"),
            ("capacitor", "0.0001"),
        ])
    }

    #[test]
    fn test_series_rc_scenario() {
        // tau = 0.01 s falls exactly on the 11-point grid
        let config = SimulationConfig::new().with_time_grid(TimeGrid::linspace(0.0, 0.1, 11).unwrap());
        let sim = Simulator::with_config(config);
        let set = sim.run(Topology::RC, Configuration::Series, &rc_input()).unwrap();

        let vr = set.get(VOLTAGE_R).unwrap();
        let vc = set.get(VOLTAGE_C).unwrap();
        assert_relative_eq!(vr[0], 5.0);
        assert_abs_diff_eq!(vc[0], 0.0);
        assert_abs_diff_eq!(vr[1], 1.839, epsilon = 1e-3);
        assert_abs_diff_eq!(vc[1], 3.161, epsilon = 1e-3);
        assert_relative_eq!(vr[1], 5.0 * (-1.0f64).exp(), max_relative = 1e-12);
    }

    #[test]
    fn test_series_rl_scenario() {
        let config = SimulationConfig::new().with_time_grid(TimeGrid::linspace(0.0, 0.1, 11).unwrap());
        let sim = Simulator::with_config(config);
        let input = raw(&[("resistencia", "50"), ("voltaje", "10"), ("inductor", "0.5")]);
        let set = sim.run(Topology::RL, Configuration::Series, &input).unwrap();

        let i = set.get(CURRENT).unwrap();
        assert_abs_diff_eq!(i[0], 0.0);
        assert_abs_diff_eq!(i[1], 0.1264, epsilon = 1e-4);
        assert_relative_eq!(i[1], 0.2 * (1.0 - (-1.0f64).exp()), max_relative = 1e-12);
    }

    #[test]
    fn test_interactive_grid_is_default() {
        let set = simulate(Topology::RC, Configuration::Series, &rc_input()).unwrap();
        assert_eq!(set.time().len(), 1000);
        assert_eq!(set.time()[0], 0.0);
        assert_eq!(set.time()[999], 0.1);
        assert!(set.iter().all(|w| w.values.len() == 1000));
    }

    #[test]
    fn test_series_waveform_sets() {
        let sim = Simulator::new();

        let set = sim.run(Topology::RC, Configuration::Series, &rc_input()).unwrap();
        assert_eq!(set.labels().collect::<Vec<_>>(), vec![VOLTAGE_R, VOLTAGE_C, CURRENT]);

        let set = sim.run(Topology::RLC, Configuration::Series, &rlc_input()).unwrap();
        assert_eq!(
            set.labels().collect::<Vec<_>>(),
            vec![VOLTAGE_R, VOLTAGE_C, VOLTAGE_L, CURRENT]
        );
        assert_eq!(set.voltages().count(), 3);
        assert_eq!(set.currents().count(), 1);
    }

    #[test]
    fn test_parallel_waveform_sets() {
        let sim = Simulator::new();

        let set = sim.run(Topology::RC, Configuration::Parallel, &rc_input()).unwrap();
        assert_eq!(
            set.labels().collect::<Vec<_>>(),
            vec![SOURCE_VOLTAGE, CURRENT_R, CURRENT_C, TOTAL_CURRENT]
        );

        let set = sim.run(Topology::RLC, Configuration::Parallel, &rlc_input()).unwrap();
        let ir = set.get(CURRENT_R).unwrap();
        let il = set.get(CURRENT_L).unwrap();
        let ic = set.get(CURRENT_C).unwrap();
        let total = set.get(TOTAL_CURRENT).unwrap();
        for k in 0..total.len() {
            assert_eq!(total[k], ir[k] + il[k] + ic[k]);
        }
    }

    #[test]
    fn test_non_numeric_input_aborts() {
        let input = raw(&[("resistencia", "abc"), ("voltaje", "5"), ("capacitor", "0.0001")]);
        let err = Simulator::new()
            .run(Topology::RC, Configuration::Series, &input)
            .unwrap_err();
        assert!(matches!(err, TransientError::ParameterParse { ref field, .. } if field == "resistencia"));
        assert!(err.is_input_error());
    }

    #[test]
    fn test_unit_suffix_input_aborts() {
        let input = raw(&[("resistencia", "1k"), ("voltaje", "5"), ("capacitor", "100u")]);
        let err = simulate(Topology::RC, Configuration::Series, &input).unwrap_err();
        assert!(matches!(err, TransientError::ParameterParse { ref field, .. } if field == "resistencia"));
    }

    #[test]
    fn test_non_positive_input_aborts() {
        let input = raw(&[("resistencia", "100"), ("voltaje", "-5"), ("capacitor", "0.0001")]);
        let err = Simulator::new()
            .run(Topology::RC, Configuration::Parallel, &input)
            .unwrap_err();
        assert!(matches!(err, TransientError::InvalidValue { .. }));
    }

    #[test]
    fn test_saved_parameters_reproduce_run() {
        let values = parse_parameters(Topology::RC, &rc_input()).unwrap();

        let mut buffer = Vec::new();
        write_parameters(&values, &mut buffer).unwrap();
        let loaded = read_parameters(buffer.as_slice()).unwrap();
        assert_eq!(loaded, values);

        let sim = Simulator::new();
        assert_eq!(
            sim.run_map(Topology::RC, Configuration::Series, &loaded).unwrap(),
            sim.run(Topology::RC, Configuration::Series, &rc_input()).unwrap()
        );
    }

    #[test]
    fn test_build_model_uses_configured_grid() {
        let grid = TimeGrid::linspace(0.0, 1.0, 5).unwrap();
        let sim = Simulator::with_config(SimulationConfig::new().with_time_grid(grid.clone()));
        let params = ParameterSet {
            voltage: 1.0,
            resistance: 1.0,
            capacitance: None,
            inductance: Some(1.0),
        };
        let model = sim
            .build_model(CircuitKey::new(Topology::RL, Configuration::Series), &params)
            .unwrap();
        assert_eq!(model.time_grid(), &grid);
    }

    #[test]
    fn test_missing_diagram_does_not_block_run() {
        let sim = Simulator::with_config(SimulationConfig::new().with_assets_dir("/nonexistent"));
        assert!(matches!(
            sim.diagram(Topology::RC),
            Err(TransientError::MissingAsset { .. })
        ));
        assert!(sim.run(Topology::RC, Configuration::Series, &rc_input()).is_ok());
    }
}

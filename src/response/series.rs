//! Series RC, RL and RLC step responses.
//!
//! The source is switched on at `t = 0` with every element at rest. Voltages
//! are evaluated in closed form; the only numerical step is the inductor
//! voltage of the RLC circuit.

use super::numeric::{gradient, EdgeOrder};
use super::waveform::{Quantity, WaveformSet, CURRENT, VOLTAGE_C, VOLTAGE_L, VOLTAGE_R};
use crate::circuit::{CircuitModel, TimeGrid};
use crate::components::ComponentKind;
use crate::error::Result;

/// `v0 * e^(-t/tau)` for every time point.
fn decay(v0: f64, tau: f64, t: &[f64]) -> Vec<f64> {
    t.iter().map(|&t| v0 * (-t / tau).exp()).collect()
}

/// `v0 * (1 - e^(-t/tau))` for every time point.
fn rise(v0: f64, tau: f64, t: &[f64]) -> Vec<f64> {
    t.iter().map(|&t| v0 * (1.0 - (-t / tau).exp())).collect()
}

/// Series RC circuit, τ = R·C.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesRc {
    pub source: f64,
    pub resistance: f64,
    pub capacitance: f64,
}

impl SeriesRc {
    pub fn from_model(model: &CircuitModel) -> Result<Self> {
        Ok(Self {
            source: model.magnitude(ComponentKind::Source)?,
            resistance: model.magnitude(ComponentKind::Resistor)?,
            capacitance: model.magnitude(ComponentKind::Capacitor)?,
        })
    }

    pub fn time_constant(&self) -> f64 {
        self.resistance * self.capacitance
    }

    pub fn voltage_r(&self, t: &[f64]) -> Vec<f64> {
        decay(self.source, self.time_constant(), t)
    }

    pub fn voltage_c(&self, t: &[f64]) -> Vec<f64> {
        rise(self.source, self.time_constant(), t)
    }

    pub fn current(&self, t: &[f64]) -> Vec<f64> {
        self.voltage_r(t)
            .into_iter()
            .map(|v| v / self.resistance)
            .collect()
    }

    pub fn waveforms(&self, grid: &TimeGrid) -> WaveformSet {
        let t = grid.points();
        let mut set = WaveformSet::new(t.to_vec());
        set.push(VOLTAGE_R, Quantity::Voltage, self.voltage_r(t));
        set.push(VOLTAGE_C, Quantity::Voltage, self.voltage_c(t));
        set.push(CURRENT, Quantity::Current, self.current(t));
        set
    }
}

/// Series RL circuit, τ = L/R.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesRl {
    pub source: f64,
    pub resistance: f64,
    pub inductance: f64,
}

impl SeriesRl {
    pub fn from_model(model: &CircuitModel) -> Result<Self> {
        Ok(Self {
            source: model.magnitude(ComponentKind::Source)?,
            resistance: model.magnitude(ComponentKind::Resistor)?,
            inductance: model.magnitude(ComponentKind::Inductor)?,
        })
    }

    pub fn time_constant(&self) -> f64 {
        self.inductance / self.resistance
    }

    pub fn current(&self, t: &[f64]) -> Vec<f64> {
        let tau = self.time_constant();
        t.iter()
            .map(|&t| self.source * (1.0 - (-t / tau).exp()) / self.resistance)
            .collect()
    }

    pub fn voltage_r(&self, t: &[f64]) -> Vec<f64> {
        self.current(t)
            .into_iter()
            .map(|i| self.resistance * i)
            .collect()
    }

    pub fn voltage_l(&self, t: &[f64]) -> Vec<f64> {
        decay(self.source, self.time_constant(), t)
    }

    pub fn waveforms(&self, grid: &TimeGrid) -> WaveformSet {
        let t = grid.points();
        let mut set = WaveformSet::new(t.to_vec());
        set.push(VOLTAGE_R, Quantity::Voltage, self.voltage_r(t));
        set.push(VOLTAGE_L, Quantity::Voltage, self.voltage_l(t));
        set.push(CURRENT, Quantity::Current, self.current(t));
        set
    }
}

/// Series RLC circuit.
///
/// This is a first-order approximation, not the second-order solution: the
/// current follows the RL charging curve (τ = L/R) and the capacitor voltage
/// follows the RC curve (τ = R·C), independent of L. Outputs are kept
/// compatible with earlier releases of the tool; do not expect oscillation
/// or the correct final capacitor current.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesRlc {
    pub source: f64,
    pub resistance: f64,
    pub inductance: f64,
    pub capacitance: f64,
}

impl SeriesRlc {
    pub fn from_model(model: &CircuitModel) -> Result<Self> {
        Ok(Self {
            source: model.magnitude(ComponentKind::Source)?,
            resistance: model.magnitude(ComponentKind::Resistor)?,
            inductance: model.magnitude(ComponentKind::Inductor)?,
            capacitance: model.magnitude(ComponentKind::Capacitor)?,
        })
    }

    /// L/R, used for the current.
    pub fn inductive_time_constant(&self) -> f64 {
        self.inductance / self.resistance
    }

    /// R·C, used for the capacitor voltage.
    pub fn capacitive_time_constant(&self) -> f64 {
        self.resistance * self.capacitance
    }

    pub fn current(&self, t: &[f64]) -> Vec<f64> {
        let tau = self.inductive_time_constant();
        let i_max = self.source / self.resistance;
        t.iter().map(|&t| i_max * (1.0 - (-t / tau).exp())).collect()
    }

    pub fn voltage_r(&self, t: &[f64]) -> Vec<f64> {
        self.current(t)
            .into_iter()
            .map(|i| self.resistance * i)
            .collect()
    }

    /// `L · di/dt`, differentiated numerically against the grid.
    pub fn voltage_l(&self, t: &[f64]) -> Vec<f64> {
        gradient(&self.current(t), t, EdgeOrder::Second)
            .into_iter()
            .map(|di| self.inductance * di)
            .collect()
    }

    pub fn voltage_c(&self, t: &[f64]) -> Vec<f64> {
        rise(self.source, self.capacitive_time_constant(), t)
    }

    pub fn waveforms(&self, grid: &TimeGrid) -> WaveformSet {
        let t = grid.points();
        let mut set = WaveformSet::new(t.to_vec());
        set.push(VOLTAGE_R, Quantity::Voltage, self.voltage_r(t));
        set.push(VOLTAGE_C, Quantity::Voltage, self.voltage_c(t));
        set.push(VOLTAGE_L, Quantity::Voltage, self.voltage_l(t));
        set.push(CURRENT, Quantity::Current, self.current(t));
        set
    }
}

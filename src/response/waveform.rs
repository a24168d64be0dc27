//! Labelled waveforms produced by one simulation run.

use serde::Serialize;

pub const VOLTAGE_R: &str = "Voltage across R";
pub const VOLTAGE_C: &str = "Voltage across C";
pub const VOLTAGE_L: &str = "Voltage across L";
pub const CURRENT: &str = "Current";
pub const SOURCE_VOLTAGE: &str = "Source voltage";
pub const CURRENT_R: &str = "Current through R";
pub const CURRENT_L: &str = "Current through L";
pub const CURRENT_C: &str = "Current through C";
pub const TOTAL_CURRENT: &str = "Total current";

/// Physical quantity of a waveform; decides which plot panel it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Quantity {
    Voltage,
    Current,
}

/// A named sequence of values aligned with the time grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Waveform {
    pub label: String,
    #[serde(skip)]
    pub quantity: Quantity,
    pub values: Vec<f64>,
}

/// All waveforms of a run, in insertion order, plus the shared time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveformSet {
    time: Vec<f64>,
    waveforms: Vec<Waveform>,
}

impl WaveformSet {
    /// Create an empty set over the given time points.
    pub fn new(time: Vec<f64>) -> Self {
        Self {
            time,
            waveforms: Vec::new(),
        }
    }

    /// Append a waveform. `values` must be aligned with the time axis.
    pub fn push(&mut self, label: impl Into<String>, quantity: Quantity, values: Vec<f64>) {
        debug_assert_eq!(values.len(), self.time.len());
        self.waveforms.push(Waveform {
            label: label.into(),
            quantity,
            values,
        });
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Values of the waveform with the given label.
    pub fn get(&self, label: &str) -> Option<&[f64]> {
        self.waveforms
            .iter()
            .find(|w| w.label == label)
            .map(|w| w.values.as_slice())
    }

    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.waveforms.iter().map(|w| w.label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Waveform> {
        self.waveforms.iter()
    }

    /// Waveforms for the voltage panel.
    pub fn voltages(&self) -> impl Iterator<Item = &Waveform> {
        self.waveforms
            .iter()
            .filter(|w| w.quantity == Quantity::Voltage)
    }

    /// Waveforms for the current panel.
    pub fn currents(&self) -> impl Iterator<Item = &Waveform> {
        self.waveforms
            .iter()
            .filter(|w| w.quantity == Quantity::Current)
    }

    /// Number of waveforms.
    pub fn len(&self) -> usize {
        self.waveforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waveforms.is_empty()
    }
}

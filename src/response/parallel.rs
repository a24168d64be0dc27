//! Parallel RC, RL and RLC responses.
//!
//! Every element sees the full source voltage for the whole run. Branch
//! currents of the reactive elements are obtained by differentiating or
//! integrating that constant voltage on the grid, so they carry the same
//! discretisation (and edge behaviour) as any other sampled signal.

use super::numeric::{gradient, running_integral, EdgeOrder};
use super::waveform::{
    Quantity, WaveformSet, CURRENT_C, CURRENT_L, CURRENT_R, SOURCE_VOLTAGE, TOTAL_CURRENT,
};
use crate::circuit::{CircuitModel, TimeGrid};
use crate::components::ComponentKind;
use crate::error::Result;

fn constant(value: f64, t: &[f64]) -> Vec<f64> {
    vec![value; t.len()]
}

/// `C · dv/dt` of the constant source voltage.
fn capacitor_current(source: f64, capacitance: f64, t: &[f64]) -> Vec<f64> {
    gradient(&constant(source, t), t, EdgeOrder::Second)
        .into_iter()
        .map(|dv| capacitance * dv)
        .collect()
}

/// `(1/L) ∫ v dt` with the first grid step used for every sample.
fn inductor_current(source: f64, inductance: f64, t: &[f64]) -> Vec<f64> {
    assert!(t.len() >= 2, "inductor current: need at least 2 points, got {}", t.len());
    let dt = t[1] - t[0];
    running_integral(&constant(source, t), dt)
        .into_iter()
        .map(|flux| flux / inductance)
        .collect()
}

fn sum(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b).map(|(x, y)| x + y).collect()
}

/// Parallel RC circuit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallelRc {
    pub source: f64,
    pub resistance: f64,
    pub capacitance: f64,
}

impl ParallelRc {
    pub fn from_model(model: &CircuitModel) -> Result<Self> {
        Ok(Self {
            source: model.magnitude(ComponentKind::Source)?,
            resistance: model.magnitude(ComponentKind::Resistor)?,
            capacitance: model.magnitude(ComponentKind::Capacitor)?,
        })
    }

    pub fn voltage(&self, t: &[f64]) -> Vec<f64> {
        constant(self.source, t)
    }

    pub fn current_r(&self, t: &[f64]) -> Vec<f64> {
        constant(self.source / self.resistance, t)
    }

    /// Capacitor branch current.
    ///
    /// # Panics
    ///
    /// Panics if `t` holds fewer than 2 points.
    pub fn current_c(&self, t: &[f64]) -> Vec<f64> {
        capacitor_current(self.source, self.capacitance, t)
    }

    pub fn current_total(&self, t: &[f64]) -> Vec<f64> {
        sum(&self.current_r(t), &self.current_c(t))
    }

    pub fn waveforms(&self, grid: &TimeGrid) -> WaveformSet {
        let t = grid.points();
        let mut set = WaveformSet::new(t.to_vec());
        set.push(SOURCE_VOLTAGE, Quantity::Voltage, self.voltage(t));
        set.push(CURRENT_R, Quantity::Current, self.current_r(t));
        set.push(CURRENT_C, Quantity::Current, self.current_c(t));
        set.push(TOTAL_CURRENT, Quantity::Current, self.current_total(t));
        set
    }
}

/// Parallel RL circuit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallelRl {
    pub source: f64,
    pub resistance: f64,
    pub inductance: f64,
}

impl ParallelRl {
    pub fn from_model(model: &CircuitModel) -> Result<Self> {
        Ok(Self {
            source: model.magnitude(ComponentKind::Source)?,
            resistance: model.magnitude(ComponentKind::Resistor)?,
            inductance: model.magnitude(ComponentKind::Inductor)?,
        })
    }

    pub fn voltage(&self, t: &[f64]) -> Vec<f64> {
        constant(self.source, t)
    }

    pub fn current_r(&self, t: &[f64]) -> Vec<f64> {
        constant(self.source / self.resistance, t)
    }

    /// Inductor branch current.
    ///
    /// # Panics
    ///
    /// Panics if `t` holds fewer than 2 points.
    pub fn current_l(&self, t: &[f64]) -> Vec<f64> {
        inductor_current(self.source, self.inductance, t)
    }

    pub fn current_total(&self, t: &[f64]) -> Vec<f64> {
        sum(&self.current_r(t), &self.current_l(t))
    }

    pub fn waveforms(&self, grid: &TimeGrid) -> WaveformSet {
        let t = grid.points();
        let mut set = WaveformSet::new(t.to_vec());
        set.push(SOURCE_VOLTAGE, Quantity::Voltage, self.voltage(t));
        set.push(CURRENT_R, Quantity::Current, self.current_r(t));
        set.push(CURRENT_L, Quantity::Current, self.current_l(t));
        set.push(TOTAL_CURRENT, Quantity::Current, self.current_total(t));
        set
    }
}

/// Parallel RLC circuit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallelRlc {
    pub source: f64,
    pub resistance: f64,
    pub inductance: f64,
    pub capacitance: f64,
}

impl ParallelRlc {
    pub fn from_model(model: &CircuitModel) -> Result<Self> {
        Ok(Self {
            source: model.magnitude(ComponentKind::Source)?,
            resistance: model.magnitude(ComponentKind::Resistor)?,
            inductance: model.magnitude(ComponentKind::Inductor)?,
            capacitance: model.magnitude(ComponentKind::Capacitor)?,
        })
    }

    pub fn voltage(&self, t: &[f64]) -> Vec<f64> {
        constant(self.source, t)
    }

    pub fn current_r(&self, t: &[f64]) -> Vec<f64> {
        constant(self.source / self.resistance, t)
    }

    /// Inductor branch current.
    ///
    /// # Panics
    ///
    /// Panics if `t` holds fewer than 2 points.
    pub fn current_l(&self, t: &[f64]) -> Vec<f64> {
        inductor_current(self.source, self.inductance, t)
    }

    /// Capacitor branch current.
    ///
    /// # Panics
    ///
    /// Panics if `t` holds fewer than 2 points.
    pub fn current_c(&self, t: &[f64]) -> Vec<f64> {
        capacitor_current(self.source, self.capacitance, t)
    }

    /// `(i_R + i_L) + i_C`, summed in that order.
    pub fn current_total(&self, t: &[f64]) -> Vec<f64> {
        sum(&sum(&self.current_r(t), &self.current_l(t)), &self.current_c(t))
    }

    pub fn waveforms(&self, grid: &TimeGrid) -> WaveformSet {
        let t = grid.points();
        let mut set = WaveformSet::new(t.to_vec());
        set.push(SOURCE_VOLTAGE, Quantity::Voltage, self.voltage(t));
        set.push(CURRENT_R, Quantity::Current, self.current_r(t));
        set.push(CURRENT_L, Quantity::Current, self.current_l(t));
        set.push(CURRENT_C, Quantity::Current, self.current_c(t));
        set.push(TOTAL_CURRENT, Quantity::Current, self.current_total(t));
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_rc_total_is_exact_sum() {
        let rc = ParallelRc {
            source: 5.0,
            resistance: 100.0,
            capacitance: 1e-4,
        };
        let t = TimeGrid::interactive();
        let t = t.points();
        let ir = rc.current_r(t);
        let ic = rc.current_c(t);
        let total = rc.current_total(t);
        for k in 0..t.len() {
            assert_eq!(total[k], ir[k] + ic[k]);
        }
    }

    #[test]
    fn test_rc_branch_currents() {
        let rc = ParallelRc {
            source: 5.0,
            resistance: 100.0,
            capacitance: 1e-4,
        };
        let t = TimeGrid::interactive();
        assert!(rc.voltage(t.points()).iter().all(|&v| v == 5.0));
        assert!(rc.current_r(t.points()).iter().all(|&i| i == 0.05));
        // Derivative of a constant is zero up to rounding of the stencil
        for ic in rc.current_c(t.points()) {
            assert_abs_diff_eq!(ic, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_rl_total_is_exact_sum() {
        let rl = ParallelRl {
            source: 10.0,
            resistance: 50.0,
            inductance: 0.5,
        };
        let t = TimeGrid::interactive();
        let t = t.points();
        let ir = rl.current_r(t);
        let il = rl.current_l(t);
        let total = rl.current_total(t);
        for k in 0..t.len() {
            assert_eq!(total[k], ir[k] + il[k]);
        }
    }

    #[test]
    fn test_rl_inductor_ramp() {
        // i_L[k] = (k + 1) * V0 * dt / L
        let rl = ParallelRl {
            source: 2.0,
            resistance: 1.0,
            inductance: 0.5,
        };
        let t = [0.0, 0.25, 0.5, 0.75];
        assert_eq!(rl.current_l(&t), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_rl_inductor_uses_first_step_only() {
        let rl = ParallelRl {
            source: 1.0,
            resistance: 1.0,
            inductance: 1.0,
        };
        let il = rl.current_l(&[0.0, 0.5, 10.0]);
        assert_eq!(il, vec![0.5, 1.0, 1.5]);
    }

    #[test]
    #[should_panic(expected = "need at least 2 points")]
    fn test_rl_inductor_needs_two_points() {
        let rl = ParallelRl {
            source: 1.0,
            resistance: 1.0,
            inductance: 1.0,
        };
        rl.current_l(&[]);
    }

    #[test]
    #[should_panic(expected = "need at least 2 points")]
    fn test_rc_capacitor_needs_two_points() {
        let rc = ParallelRc {
            source: 1.0,
            resistance: 1.0,
            capacitance: 1.0,
        };
        rc.current_c(&[0.0]);
    }

    #[test]
    fn test_rl_inductor_on_interactive_grid() {
        let rl = ParallelRl {
            source: 10.0,
            resistance: 50.0,
            inductance: 0.5,
        };
        let t = TimeGrid::interactive();
        let il = rl.current_l(t.points());
        // 1000 steps of 0.1/999 s at 10 V across 0.5 H
        assert_relative_eq!(il[999], 1000.0 * 10.0 * (0.1 / 999.0) / 0.5, max_relative = 1e-9);
    }

    #[test]
    fn test_rlc_total_is_exact_sum() {
        let rlc = ParallelRlc {
            source: 5.0,
            resistance: 100.0,
            inductance: 0.5,
            capacitance: 1e-4,
        };
        let t = TimeGrid::interactive();
        let t = t.points();
        let ir = rlc.current_r(t);
        let il = rlc.current_l(t);
        let ic = rlc.current_c(t);
        let total = rlc.current_total(t);
        for k in 0..t.len() {
            assert_eq!(total[k], ir[k] + il[k] + ic[k]);
        }
    }

    #[test]
    fn test_rlc_waveform_labels() {
        let rlc = ParallelRlc {
            source: 5.0,
            resistance: 100.0,
            inductance: 0.5,
            capacitance: 1e-4,
        };
        let set = rlc.waveforms(&TimeGrid::default());
        let labels: Vec<&str> = set.labels().collect();
        assert_eq!(
            labels,
            vec![SOURCE_VOLTAGE, CURRENT_R, CURRENT_L, CURRENT_C, TOTAL_CURRENT]
        );
        assert_eq!(set.voltages().count(), 1);
        assert_eq!(set.currents().count(), 4);
    }
}

//! Time grid over which waveforms are evaluated.

use crate::error::{Result, TransientError};

/// Start of the default model grid in seconds.
pub const MODEL_GRID_START: f64 = 0.001;

/// Start of the grid used for interactive runs in seconds.
pub const INTERACTIVE_GRID_START: f64 = 0.0;

/// End of both default grids in seconds.
pub const GRID_STOP: f64 = 0.1;

/// Number of points in both default grids.
pub const GRID_POINTS: usize = 1000;

/// A finite, strictly increasing sequence of at least two time points.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    points: Vec<f64>,
}

impl TimeGrid {
    /// `points` evenly spaced samples over `[start, stop]`, both ends included.
    ///
    /// Point `i` is `start + i * step` and the last point is pinned to `stop`,
    /// so grids built here line up bit for bit with other linspace
    /// implementations.
    pub fn linspace(start: f64, stop: f64, points: usize) -> Result<Self> {
        if points < 2 {
            return Err(TransientError::invalid_grid(format!(
                "need at least 2 points, got {}",
                points
            )));
        }
        Self::from_points(evenly_spaced(start, stop, points))
    }

    /// Use caller-supplied time points.
    pub fn from_points(points: Vec<f64>) -> Result<Self> {
        if points.len() < 2 {
            return Err(TransientError::invalid_grid(format!(
                "need at least 2 points, got {}",
                points.len()
            )));
        }
        if let Some(bad) = points.iter().find(|t| !t.is_finite()) {
            return Err(TransientError::invalid_grid(format!(
                "time point {} is not finite",
                bad
            )));
        }
        if let Some(i) = points.windows(2).position(|w| w[1] <= w[0]) {
            return Err(TransientError::invalid_grid(format!(
                "time points must be strictly increasing (t[{}] = {}, t[{}] = {})",
                i,
                points[i],
                i + 1,
                points[i + 1]
            )));
        }
        Ok(Self { points })
    }

    /// 1000 points over [0, 0.1] s, used for interactive runs.
    pub fn interactive() -> Self {
        Self::fixed(INTERACTIVE_GRID_START)
    }

    fn fixed(start: f64) -> Self {
        Self {
            points: evenly_spaced(start, GRID_STOP, GRID_POINTS),
        }
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Never true for a constructed grid.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn start(&self) -> f64 {
        self.points[0]
    }

    pub fn stop(&self) -> f64 {
        self.points[self.points.len() - 1]
    }

}

/// `start + i * step` for `i` in `0..points`, last point pinned to `stop`.
///
/// `points` must be at least 2.
fn evenly_spaced(start: f64, stop: f64, points: usize) -> Vec<f64> {
    let step = (stop - start) / (points - 1) as f64;
    let mut values: Vec<f64> = (0..points).map(|i| start + i as f64 * step).collect();
    values[points - 1] = stop;
    values
}

impl Default for TimeGrid {
    /// 1000 points over [0.001, 0.1] s.
    fn default() -> Self {
        Self::fixed(MODEL_GRID_START)
    }
}

//! Discrete differentiation and integration over a time grid.
//!
//! These follow the conventions of the common array libraries exactly, so
//! that waveforms computed here match reference output point for point:
//!
//! - Interior points use central differences. When every spacing is
//!   bit-identical the plain `(f[i+1] - f[i-1]) / 2h` form is used, otherwise
//!   the second-order non-uniform formula.
//! - Boundary points use one-sided differences of first or second order.

/// Accuracy of the one-sided differences at the two boundary points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeOrder {
    /// Two-point forward/backward difference
    First,
    /// Three-point one-sided difference
    Second,
}

/// Derivative of `values` with respect to `t`.
///
/// Second-order edges need three points; with only two the first-order edges
/// are used.
///
/// # Panics
///
/// Panics if `values` and `t` differ in length or hold fewer than 2 points.
/// A [`TimeGrid`](crate::circuit::TimeGrid) always satisfies this.
pub fn gradient(values: &[f64], t: &[f64], edge: EdgeOrder) -> Vec<f64> {
    let n = values.len();
    assert_eq!(n, t.len(), "gradient: values and time points differ in length");
    assert!(n >= 2, "gradient: need at least 2 points, got {}", n);

    let dx: Vec<f64> = t.windows(2).map(|w| w[1] - w[0]).collect();
    let uniform = dx.iter().all(|&h| h == dx[0]);
    let edge = if n < 3 { EdgeOrder::First } else { edge };

    let mut out = vec![0.0; n];

    // Interior
    if uniform {
        let h = dx[0];
        for i in 1..n - 1 {
            out[i] = (values[i + 1] - values[i - 1]) / (2.0 * h);
        }
    } else {
        for i in 1..n - 1 {
            let dx1 = dx[i - 1];
            let dx2 = dx[i];
            let a = -dx2 / (dx1 * (dx1 + dx2));
            let b = (dx2 - dx1) / (dx1 * dx2);
            let c = dx1 / (dx2 * (dx1 + dx2));
            out[i] = a * values[i - 1] + b * values[i] + c * values[i + 1];
        }
    }

    // Boundaries
    match edge {
        EdgeOrder::First => {
            out[0] = (values[1] - values[0]) / dx[0];
            out[n - 1] = (values[n - 1] - values[n - 2]) / dx[n - 2];
        }
        EdgeOrder::Second => {
            let (a, b, c) = if uniform {
                let h = dx[0];
                (-1.5 / h, 2.0 / h, -0.5 / h)
            } else {
                let dx1 = dx[0];
                let dx2 = dx[1];
                (
                    -(2.0 * dx1 + dx2) / (dx1 * (dx1 + dx2)),
                    (dx1 + dx2) / (dx1 * dx2),
                    -dx1 / (dx2 * (dx1 + dx2)),
                )
            };
            out[0] = a * values[0] + b * values[1] + c * values[2];

            let (a, b, c) = if uniform {
                let h = dx[0];
                (0.5 / h, -2.0 / h, 1.5 / h)
            } else {
                let dx1 = dx[n - 3];
                let dx2 = dx[n - 2];
                (
                    dx2 / (dx1 * (dx1 + dx2)),
                    -(dx2 + dx1) / (dx1 * dx2),
                    (2.0 * dx2 + dx1) / (dx2 * (dx1 + dx2)),
                )
            };
            out[n - 1] = a * values[n - 3] + b * values[n - 2] + c * values[n - 1];
        }
    }

    out
}

/// Running sum of `values` scaled by a fixed step: `cumsum(values) * dt`.
///
/// This is a rectangle-rule integrator that counts the first sample as a full
/// step, so the result at index `i` covers `i + 1` steps.
pub fn running_integral(values: &[f64], dt: f64) -> Vec<f64> {
    let mut acc = 0.0;
    values
        .iter()
        .map(|&v| {
            acc += v;
            acc * dt
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gradient_uniform_quadratic() {
        // f = t^2 on a uniform grid: central and second-order edges are exact
        let t: Vec<f64> = (0..6).map(|i| i as f64).collect();
        let f: Vec<f64> = t.iter().map(|x| x * x).collect();
        let g = gradient(&f, &t, EdgeOrder::Second);
        for (gi, ti) in g.iter().zip(&t) {
            assert_relative_eq!(*gi, 2.0 * ti, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_gradient_first_order_edges() {
        let t = [0.0, 1.0, 2.0, 3.0];
        let f = [0.0, 1.0, 4.0, 9.0];
        let g = gradient(&f, &t, EdgeOrder::First);
        assert_eq!(g, vec![1.0, 2.0, 4.0, 5.0]);
    }

    #[test]
    fn test_gradient_non_uniform() {
        // Reference values: f = t^2 is differentiated exactly by the
        // second-order non-uniform stencils as well
        let t = [0.0, 0.5, 2.0, 3.0];
        let f: Vec<f64> = t.iter().map(|x| x * x).collect();
        let g = gradient(&f, &t, EdgeOrder::Second);
        let expected = [0.0, 1.0, 4.0, 6.0];
        for (gi, ei) in g.iter().zip(expected) {
            assert_relative_eq!(*gi, ei, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_gradient_two_points_falls_back() {
        let g = gradient(&[1.0, 3.0], &[0.0, 2.0], EdgeOrder::Second);
        assert_eq!(g, vec![1.0, 1.0]);
    }

    #[test]
    fn test_gradient_of_constant_is_zero_on_uniform_grid() {
        let t: Vec<f64> = (0..10).map(|i| i as f64 * 0.25).collect();
        let g = gradient(&[3.0; 10], &t, EdgeOrder::Second);
        assert!(g.iter().all(|&x| x == 0.0));
    }

    #[test]
    #[should_panic(expected = "need at least 2 points")]
    fn test_gradient_single_point_panics() {
        gradient(&[1.0], &[0.0], EdgeOrder::Second);
    }

    #[test]
    #[should_panic(expected = "differ in length")]
    fn test_gradient_length_mismatch_panics() {
        gradient(&[1.0, 2.0, 3.0], &[0.0, 1.0], EdgeOrder::First);
    }

    #[test]
    fn test_running_integral() {
        let out = running_integral(&[2.0, 2.0, 2.0], 0.5);
        assert_eq!(out, vec![1.0, 2.0, 3.0]);
    }
}

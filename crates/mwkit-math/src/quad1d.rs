// ─────────────────────────────────────────────────────────────────────
// SCPN Microwave Kit — Piecewise Quadratic Interpolator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Piecewise-quadratic 1-D interpolation, continuous in value and
//! first derivative across every interior knot.
//!
//! Inputs are normalised onto [0,1] in both x and y before the
//! per-segment coefficients are fitted, which keeps the assembled
//! system well scaled for widely ranged data (GHz frequencies against
//! millimetre dimensions). The 3(n-1) coefficients are found by one
//! dense solve: 2(n-1) interpolation rows, n-2 derivative-continuity
//! rows, and one closure row that pins the remaining degree of
//! freedom.

use crate::gauss::gauss_solve;
use mwkit_types::error::{MwError, MwResult};
use ndarray::Array2;

/// Closure rule for the last degree of freedom of the fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClosureRule {
    /// Leading quadratic coefficients of the first two segments are
    /// equal. With a single segment this degenerates to a zero leading
    /// coefficient (the segment becomes the chord).
    #[default]
    MatchedLeadingCoefficient,
    /// First derivative at the left boundary equals the chord slope of
    /// the first segment.
    ClampedStartSlope,
}

/// C¹ piecewise-quadratic interpolant through (x_i, y_i) samples.
#[derive(Debug, Clone)]
pub struct PiecewiseQuadratic {
    xs: Vec<f64>,
    /// Per-segment [quadratic, linear, constant] in normalised coords.
    coeffs: Vec<[f64; 3]>,
    ax: f64,
    bx: f64,
    ay: f64,
    by: f64,
}

impl PiecewiseQuadratic {
    /// Build with the default closure rule (matches the original
    /// curve-fit scripts).
    pub fn new(xs: &[f64], ys: &[f64]) -> MwResult<Self> {
        Self::with_closure(xs, ys, ClosureRule::default())
    }

    /// Build from n >= 2 strictly increasing knots.
    pub fn with_closure(xs: &[f64], ys: &[f64], rule: ClosureRule) -> MwResult<Self> {
        let n = xs.len();
        if n != ys.len() {
            return Err(MwError::ShapeMismatch(format!(
                "quad1d: {n} x-values vs {} y-values",
                ys.len()
            )));
        }
        if n < 2 {
            return Err(MwError::InterpolationFailure(
                "quad1d needs at least two knots".into(),
            ));
        }
        for i in 1..n {
            if xs[i] <= xs[i - 1] {
                return Err(MwError::InterpolationFailure(format!(
                    "knots must be strictly increasing, x[{}] = {} after x[{}] = {}",
                    i,
                    xs[i],
                    i - 1,
                    xs[i - 1]
                )));
            }
        }

        // Linear maps onto [0,1]: sx(x0) = 0, sx(x_{n-1}) = 1 and the
        // same for y. Flat data has no y span; shift only in that case.
        let ax = 1.0 / (xs[n - 1] - xs[0]);
        let bx = -xs[0] * ax;
        let (ay, by) = if ys[n - 1] != ys[0] {
            let ay = 1.0 / (ys[n - 1] - ys[0]);
            (ay, -ys[0] * ay)
        } else {
            (1.0, -ys[0])
        };

        let t: Vec<f64> = xs.iter().map(|&x| ax * x + bx).collect();
        let u: Vec<f64> = ys.iter().map(|&y| ay * y + by).collect();

        let nseg = n - 1;
        let dim = 3 * nseg;
        let mut m: Array2<f64> = Array2::zeros((dim, dim));
        let mut rhs = vec![0.0; dim];
        let mut row = 0;

        // Interpolation: each segment passes through its two knots
        for i in 0..nseg {
            for &(tk, uk) in &[(t[i], u[i]), (t[i + 1], u[i + 1])] {
                m[[row, 3 * i]] = tk * tk;
                m[[row, 3 * i + 1]] = tk;
                m[[row, 3 * i + 2]] = 1.0;
                rhs[row] = uk;
                row += 1;
            }
        }

        // C¹ continuity at interior knots
        for i in 1..nseg {
            let tk = t[i];
            m[[row, 3 * (i - 1)]] = 2.0 * tk;
            m[[row, 3 * (i - 1) + 1]] = 1.0;
            m[[row, 3 * i]] = -2.0 * tk;
            m[[row, 3 * i + 1]] = -1.0;
            row += 1;
        }

        // Closure
        match rule {
            ClosureRule::MatchedLeadingCoefficient => {
                m[[row, 0]] = 1.0;
                if nseg >= 2 {
                    m[[row, 3]] = -1.0;
                }
            }
            ClosureRule::ClampedStartSlope => {
                m[[row, 0]] = 2.0 * t[0];
                m[[row, 1]] = 1.0;
                rhs[row] = (u[1] - u[0]) / (t[1] - t[0]);
            }
        }

        let solution = gauss_solve(&m, &rhs)?;
        let coeffs = solution
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();

        Ok(PiecewiseQuadratic {
            xs: xs.to_vec(),
            coeffs,
            ax,
            bx,
            ay,
            by,
        })
    }

    /// Evaluate at x. Returns NaN outside [x_0, x_{n-1}]; the
    /// boundaries themselves are in-domain.
    pub fn eval(&self, x: f64) -> f64 {
        let n = self.xs.len();
        if x < self.xs[0] || x > self.xs[n - 1] {
            return f64::NAN;
        }
        let mut seg = n - 2;
        for i in 0..n - 1 {
            if x <= self.xs[i + 1] {
                seg = i;
                break;
            }
        }
        let t = self.ax * x + self.bx;
        let [p0, p1, p2] = self.coeffs[seg];
        let u = p0 * t * t + p1 * t + p2;
        (u - self.by) / self.ay
    }

    /// Domain of the interpolant.
    pub fn domain(&self) -> (f64, f64) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}

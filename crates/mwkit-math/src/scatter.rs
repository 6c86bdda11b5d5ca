// ─────────────────────────────────────────────────────────────────────
// SCPN Microwave Kit — Scattered N-D Interpolator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Scattered linear interpolation in N dimensions.
//!
//! Builds a local affine model a·p + k from the support points nearest
//! the query instead of a global triangulation, which keeps the cost at
//! O(M log M) per query and works in arbitrary dimension. Suitable for
//! table-lookup scales of a few thousand support points.
//!
//! Queries outside the per-axis bounding box return NaN; a query that
//! lands exactly on a support point returns that point's value.

use crate::gauss::gauss_solve;
use mwkit_types::error::{MwError, MwResult};
use ndarray::Array2;

/// Scattered (x_i in R^N, f_i) dataset with its bounding box.
#[derive(Debug, Clone)]
pub struct ScatteredLinear {
    points: Array2<f64>,
    values: Vec<f64>,
    lo: Vec<f64>,
    hi: Vec<f64>,
}

impl ScatteredLinear {
    /// Build from an M x N matrix of support points and M values.
    pub fn new(points: Array2<f64>, values: Vec<f64>) -> MwResult<Self> {
        let (m, n) = points.dim();
        if m != values.len() {
            return Err(MwError::ShapeMismatch(format!(
                "scatter: {m} support points vs {} values",
                values.len()
            )));
        }
        if m == 0 || n == 0 {
            return Err(MwError::ShapeMismatch(
                "scatter: dataset must be non-empty".into(),
            ));
        }

        let mut lo = vec![f64::INFINITY; n];
        let mut hi = vec![f64::NEG_INFINITY; n];
        for i in 0..m {
            for j in 0..n {
                let v = points[[i, j]];
                lo[j] = lo[j].min(v);
                hi[j] = hi[j].max(v);
            }
        }

        Ok(ScatteredLinear {
            points,
            values,
            lo,
            hi,
        })
    }

    /// Number of support points.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Dimension N of the support points.
    pub fn dim(&self) -> usize {
        self.points.dim().1
    }

    /// Per-axis (min, max) of the support points.
    pub fn bounds(&self, axis: usize) -> (f64, f64) {
        (self.lo[axis], self.hi[axis])
    }

    /// Estimate f(p). Out-of-bounds queries return Ok(NaN).
    pub fn eval(&self, p: &[f64]) -> MwResult<f64> {
        let (m, n) = self.points.dim();
        if p.len() != n {
            return Err(MwError::ShapeMismatch(format!(
                "scatter eval: query has dimension {}, dataset has {n}",
                p.len()
            )));
        }
        for j in 0..n {
            if p[j] < self.lo[j] || p[j] > self.hi[j] {
                return Ok(f64::NAN);
            }
        }

        // Normalised squared distance; coordinates equal in both
        // operands contribute zero, so the denominator never vanishes.
        let mut dist = vec![0.0; m];
        for i in 0..m {
            let mut d = 0.0;
            for j in 0..n {
                let xij = self.points[[i, j]];
                if xij != p[j] {
                    let diff = xij - p[j];
                    d += diff * diff / (xij * xij + p[j] * p[j]);
                }
            }
            dist[i] = d;
        }

        let mut order: Vec<usize> = (0..m).collect();
        // Stable sort keeps the original ordering on ties
        order.sort_by(|&i, &j| dist[i].partial_cmp(&dist[j]).unwrap_or(std::cmp::Ordering::Equal));

        if dist[order[0]] == 0.0 {
            return Ok(self.values[order[0]]);
        }

        // Seed with the nearest point; per axis, admit the first
        // candidate introducing a coordinate not yet present in that
        // column, so the admitted rows span every axis.
        let mut admitted = vec![order[0]];
        for axis in 0..n {
            let found = order[1..].iter().copied().find(|&c| {
                !admitted.contains(&c)
                    && admitted
                        .iter()
                        .all(|&a| self.points[[a, axis]] != self.points[[c, axis]])
            });
            match found {
                Some(c) => admitted.push(c),
                None => {
                    return Err(MwError::InterpolationFailure(format!(
                        "support points do not span axis {axis}"
                    )))
                }
            }
        }

        match self.fit_affine(&admitted, p) {
            Ok(v) => Ok(v),
            // Axis coverage does not guarantee geometric non-degeneracy;
            // widen the candidate window and retry by substitution.
            Err(MwError::SingularMatrix { .. }) => self.eval_degenerate(order, admitted, p),
            Err(e) => Err(e),
        }
    }

    /// Solve the (N+1)-row affine system over the admitted support
    /// points and evaluate it at p.
    fn fit_affine(&self, admitted: &[usize], p: &[f64]) -> MwResult<f64> {
        let n = self.points.dim().1;
        let mut sys: Array2<f64> = Array2::zeros((n + 1, n + 1));
        let mut rhs = vec![0.0; n + 1];
        for (r, &idx) in admitted.iter().enumerate() {
            for j in 0..n {
                sys[[r, j]] = self.points[[idx, j]];
            }
            sys[[r, n]] = 1.0;
            rhs[r] = self.values[idx];
        }
        let coeff = gauss_solve(&sys, &rhs)?;
        let mut result = coeff[n];
        for j in 0..n {
            result += coeff[j] * p[j];
        }
        Ok(result)
    }

    /// Fallback for a degenerate admitted set: walk the remaining
    /// candidates in distance order and try each in every non-seed row
    /// slot until a full-rank system appears.
    fn eval_degenerate(
        &self,
        order: Vec<usize>,
        mut admitted: Vec<usize>,
        p: &[f64],
    ) -> MwResult<f64> {
        for &c in order[1..].iter() {
            if admitted.contains(&c) {
                continue;
            }
            for slot in 1..admitted.len() {
                let previous = admitted[slot];
                admitted[slot] = c;
                match self.fit_affine(&admitted, p) {
                    Ok(v) => return Ok(v),
                    Err(MwError::SingularMatrix { .. }) => admitted[slot] = previous,
                    Err(e) => return Err(e),
                }
            }
        }
        Err(MwError::InterpolationFailure(
            "no full-rank support set near the query".into(),
        ))
    }
}

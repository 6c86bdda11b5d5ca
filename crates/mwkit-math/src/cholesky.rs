// ─────────────────────────────────────────────────────────────────────
// SCPN Microwave Kit — Cholesky
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Cholesky factorisation A = L·Lᵀ for symmetric positive-definite A.
//!
//! The back-solve reads L by its column index, so Lᵀ is never
//! materialised. Symmetry of the input is not verified; only the lower
//! triangle is read.

use mwkit_types::error::{MwError, MwResult};
use ndarray::Array2;

/// Lower-triangular Cholesky factor of an SPD matrix.
#[derive(Debug, Clone)]
pub struct Cholesky {
    l: Array2<f64>,
}

impl Cholesky {
    /// Factor A into L with L·Lᵀ = A.
    ///
    /// Fails with `NotPositiveDefinite` on a negative diagonal
    /// radicand. A zero radicand is accepted (the factor is then
    /// rank-deficient and `solve` reports `SingularMatrix`).
    pub fn factor(a: &Array2<f64>) -> MwResult<Self> {
        let (n, m) = a.dim();
        if n != m {
            return Err(MwError::ShapeMismatch(format!(
                "cholesky: matrix is {n}x{m}, expected square"
            )));
        }
        let mut l: Array2<f64> = Array2::zeros((n, n));
        for i in 0..n {
            for k in 0..=i {
                let mut s = 0.0;
                for j in 0..k {
                    s += l[[i, j]] * l[[k, j]];
                }
                if i == k {
                    let radicand = a[[i, i]] - s;
                    if radicand < 0.0 {
                        return Err(MwError::NotPositiveDefinite { row: i });
                    }
                    l[[i, i]] = radicand.sqrt();
                } else {
                    l[[i, k]] = (a[[i, k]] - s) / l[[k, k]];
                }
            }
        }
        Ok(Cholesky { l })
    }

    /// Solve L·Lᵀ·x = b by a forward and a backward substitution.
    pub fn solve(&self, b: &[f64]) -> MwResult<Vec<f64>> {
        let n = self.l.dim().0;
        if b.len() != n {
            return Err(MwError::ShapeMismatch(format!(
                "cholesky solve: rhs has length {}, expected {n}",
                b.len()
            )));
        }

        // Forward: L c = b
        let mut c = vec![0.0; n];
        for i in 0..n {
            let diag = self.l[[i, i]];
            if diag == 0.0 {
                return Err(MwError::SingularMatrix { step: i });
            }
            let mut s = b[i];
            for k in 0..i {
                s -= self.l[[i, k]] * c[k];
            }
            c[i] = s / diag;
        }

        // Backward: Lᵀ x = c, reading L by column
        let mut x = vec![0.0; n];
        for i in (0..n).rev() {
            let mut s = c[i];
            for k in i + 1..n {
                s -= self.l[[k, i]] * x[k];
            }
            x[i] = s / self.l[[i, i]];
        }
        Ok(x)
    }

    /// The lower-triangular factor.
    pub fn l(&self) -> &Array2<f64> {
        &self.l
    }
}

/// Factor and solve in one call.
pub fn cholesky_solve(a: &Array2<f64>, b: &[f64]) -> MwResult<Vec<f64>> {
    Cholesky::factor(a)?.solve(b)
}

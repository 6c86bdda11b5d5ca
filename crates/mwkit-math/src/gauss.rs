// ─────────────────────────────────────────────────────────────────────
// SCPN Microwave Kit — Gauss Solver
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Gaussian elimination with total pivoting.
//!
//! Total pivoting searches the whole remaining submatrix for the
//! largest-magnitude pivot (ties resolved in row-major scan order),
//! swapping both rows and columns. Column swaps are recorded in a
//! permutation vector and undone after back-substitution.
//!
//! An exact-zero pivot reports `SingularMatrix`. Numerical
//! near-singularity is not detected; callers that need a condition
//! estimate must compute one externally.

use mwkit_types::error::{MwError, MwResult};
use ndarray::Array2;

/// Solve A x = b for square A and a length-n right-hand side.
pub fn gauss_solve(a: &Array2<f64>, b: &[f64]) -> MwResult<Vec<f64>> {
    let (n, m) = a.dim();
    if n != m {
        return Err(MwError::ShapeMismatch(format!(
            "gauss_solve: matrix is {n}x{m}, expected square"
        )));
    }
    if b.len() != n {
        return Err(MwError::ShapeMismatch(format!(
            "gauss_solve: rhs has length {}, expected {n}",
            b.len()
        )));
    }
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut a = a.to_owned();
    let mut b = b.to_vec();
    // sigma[k] = original column now sitting at position k
    let mut sigma: Vec<usize> = (0..n).collect();

    for k in 0..n - 1 {
        // Largest |a[i,j]| over the remaining submatrix, first found wins
        let mut pi = k;
        let mut pj = k;
        let mut pmax = a[[k, k]].abs();
        for i in k..n {
            for j in k..n {
                let v = a[[i, j]].abs();
                if v > pmax {
                    pmax = v;
                    pi = i;
                    pj = j;
                }
            }
        }

        if pi != k {
            for j in 0..n {
                a.swap([k, j], [pi, j]);
            }
            b.swap(k, pi);
        }
        if pj != k {
            for i in 0..n {
                a.swap([i, k], [i, pj]);
            }
            sigma.swap(k, pj);
        }

        let pivot = a[[k, k]];
        if pivot == 0.0 {
            return Err(MwError::SingularMatrix { step: k });
        }

        for i in k + 1..n {
            let factor = a[[i, k]] / pivot;
            if factor != 0.0 {
                for j in k..n {
                    let akj = a[[k, j]];
                    a[[i, j]] -= factor * akj;
                }
                b[i] -= factor * b[k];
            }
        }
    }

    if a[[n - 1, n - 1]] == 0.0 {
        return Err(MwError::SingularMatrix { step: n - 1 });
    }

    // Back-substitution in the permuted column order
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let mut s = b[i];
        for j in i + 1..n {
            s -= a[[i, j]] * x[j];
        }
        x[i] = s / a[[i, i]];
    }

    // Undo the column permutation
    let mut out = vec![0.0; n];
    for i in 0..n {
        out[sigma[i]] = x[i];
    }
    Ok(out)
}

/// Shape adapter: solve A x = b for an n x 1 right-hand side, returning
/// the solution in the same n x 1 shape.
pub fn solve_column(a: &Array2<f64>, b: &Array2<f64>) -> MwResult<Array2<f64>> {
    let (rows, cols) = b.dim();
    if cols != 1 {
        return Err(MwError::ShapeMismatch(format!(
            "solve_column: rhs is {rows}x{cols}, expected a column vector"
        )));
    }
    let rhs: Vec<f64> = (0..rows).map(|i| b[[i, 0]]).collect();
    let x = gauss_solve(a, &rhs)?;
    let mut out = Array2::zeros((rows, 1));
    for i in 0..rows {
        out[[i, 0]] = x[i];
    }
    Ok(out)
}

/// Matrix inverse, solving A X = I column by column.
///
/// Propagates `SingularMatrix` from the solver.
pub fn inv(a: &Array2<f64>) -> MwResult<Array2<f64>> {
    let (n, m) = a.dim();
    if n != m {
        return Err(MwError::ShapeMismatch(format!(
            "inv: matrix is {n}x{m}, expected square"
        )));
    }
    let mut result = Array2::zeros((n, n));
    let mut e = vec![0.0; n];
    for col in 0..n {
        e[col] = 1.0;
        let x = gauss_solve(a, &e)?;
        for row in 0..n {
            result[[row, col]] = x[row];
        }
        e[col] = 0.0;
    }
    Ok(result)
}

// ─────────────────────────────────────────────────────────────────────
// SCPN Microwave Kit — Dense Matrix Ops
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Shape-checked dense matrix operations over `Array2<f64>`.
//!
//! Replaces the unchecked ad-hoc array class of the original scripts:
//! every binary operation validates shapes and reports `ShapeMismatch`
//! instead of reading out of bounds. User-supplied non-finite values
//! are permitted and propagate through the arithmetic.

use mwkit_types::error::{MwError, MwResult};
use ndarray::Array2;

/// Build a matrix from a sequence of rows.
///
/// Fails with `ShapeMismatch` if the rows are ragged or empty.
pub fn from_rows(rows: &[Vec<f64>]) -> MwResult<Array2<f64>> {
    if rows.is_empty() {
        return Err(MwError::ShapeMismatch("matrix needs at least one row".into()));
    }
    let ncols = rows[0].len();
    if ncols == 0 {
        return Err(MwError::ShapeMismatch("matrix rows must be non-empty".into()));
    }
    for (i, row) in rows.iter().enumerate() {
        if row.len() != ncols {
            return Err(MwError::ShapeMismatch(format!(
                "ragged input: row 0 has {ncols} entries, row {i} has {}",
                row.len()
            )));
        }
    }
    let mut m = Array2::zeros((rows.len(), ncols));
    for (i, row) in rows.iter().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            m[[i, j]] = v;
        }
    }
    Ok(m)
}

/// n x n identity matrix.
pub fn identity(n: usize) -> Array2<f64> {
    Array2::eye(n)
}

/// Materialised transpose.
pub fn transpose(a: &Array2<f64>) -> Array2<f64> {
    a.t().to_owned()
}

/// Matrix product C[i,k] = sum_j A[i,j] * B[j,k].
pub fn matmul(a: &Array2<f64>, b: &Array2<f64>) -> MwResult<Array2<f64>> {
    let (m, n) = a.dim();
    let (n2, p) = b.dim();
    if n != n2 {
        return Err(MwError::ShapeMismatch(format!(
            "matmul: ({m}x{n}) * ({n2}x{p})"
        )));
    }
    let mut c = Array2::zeros((m, p));
    for i in 0..m {
        for j in 0..n {
            let aij = a[[i, j]];
            for k in 0..p {
                c[[i, k]] += aij * b[[j, k]];
            }
        }
    }
    Ok(c)
}

/// Matrix-vector product.
pub fn matvec(a: &Array2<f64>, x: &[f64]) -> MwResult<Vec<f64>> {
    let (m, n) = a.dim();
    if x.len() != n {
        return Err(MwError::ShapeMismatch(format!(
            "matvec: ({m}x{n}) * vector of length {}",
            x.len()
        )));
    }
    let mut y = vec![0.0; m];
    for i in 0..m {
        let mut s = 0.0;
        for j in 0..n {
            s += a[[i, j]] * x[j];
        }
        y[i] = s;
    }
    Ok(y)
}

/// Element-wise sum on matching shapes.
pub fn add(a: &Array2<f64>, b: &Array2<f64>) -> MwResult<Array2<f64>> {
    check_same_shape(a, b, "add")?;
    Ok(a + b)
}

/// Element-wise difference on matching shapes.
pub fn sub(a: &Array2<f64>, b: &Array2<f64>) -> MwResult<Array2<f64>> {
    check_same_shape(a, b, "sub")?;
    Ok(a - b)
}

fn check_same_shape(a: &Array2<f64>, b: &Array2<f64>, op: &str) -> MwResult<()> {
    if a.dim() != b.dim() {
        let (am, an) = a.dim();
        let (bm, bn) = b.dim();
        return Err(MwError::ShapeMismatch(format!(
            "{op}: ({am}x{an}) vs ({bm}x{bn})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_shape() {
        let m = from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.dim(), (2, 3));
        assert!((m[[1, 2]] - 6.0).abs() < 1e-15);
    }

    #[test]
    fn test_from_rows_ragged_rejected() {
        let result = from_rows(&[vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(result, Err(MwError::ShapeMismatch(_))));
    }

    #[test]
    fn test_transpose_swaps_elements() {
        let m = from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
        let t = transpose(&m);
        assert_eq!(t.dim(), (2, 3));
        for i in 0..3 {
            for j in 0..2 {
                assert!((t[[j, i]] - m[[i, j]]).abs() < 1e-15);
            }
        }
    }

    #[test]
    fn test_matmul_identity() {
        let m = from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let prod = matmul(&m, &identity(2)).unwrap();
        for i in 0..2 {
            for j in 0..2 {
                assert!((prod[[i, j]] - m[[i, j]]).abs() < 1e-15);
            }
        }
    }

    #[test]
    fn test_matmul_rectangular() {
        // (2x3) * (3x2) = (2x2)
        let a = from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let b = from_rows(&[vec![7.0, 8.0], vec![9.0, 10.0], vec![11.0, 12.0]]).unwrap();
        let c = matmul(&a, &b).unwrap();
        assert_eq!(c.dim(), (2, 2));
        assert!((c[[0, 0]] - 58.0).abs() < 1e-12);
        assert!((c[[0, 1]] - 64.0).abs() < 1e-12);
        assert!((c[[1, 0]] - 139.0).abs() < 1e-12);
        assert!((c[[1, 1]] - 154.0).abs() < 1e-12);
    }

    #[test]
    fn test_matmul_shape_mismatch() {
        let a = from_rows(&[vec![1.0, 2.0]]).unwrap();
        let b = from_rows(&[vec![1.0, 2.0]]).unwrap();
        assert!(matches!(matmul(&a, &b), Err(MwError::ShapeMismatch(_))));
    }

    #[test]
    fn test_add_sub() {
        let a = from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = from_rows(&[vec![0.5, 0.5], vec![0.5, 0.5]]).unwrap();
        let s = add(&a, &b).unwrap();
        let d = sub(&s, &b).unwrap();
        for i in 0..2 {
            for j in 0..2 {
                assert!((d[[i, j]] - a[[i, j]]).abs() < 1e-15);
            }
        }
        let bad = from_rows(&[vec![1.0]]).unwrap();
        assert!(matches!(add(&a, &bad), Err(MwError::ShapeMismatch(_))));
    }

    #[test]
    fn test_nan_propagates() {
        // Non-finite values are not rejected, only shapes are.
        let a = from_rows(&[vec![f64::NAN, 1.0], vec![0.0, 1.0]]).unwrap();
        let y = matvec(&a, &[1.0, 1.0]).unwrap();
        assert!(y[0].is_nan());
        assert!((y[1] - 1.0).abs() < 1e-15);
    }
}

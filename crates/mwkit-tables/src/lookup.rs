// ─────────────────────────────────────────────────────────────────────
// SCPN Microwave Kit — Table Lookup
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Three-coordinate table lookup over the scattered interpolator.
//!
//! A measurement table carries one sample per row (or per column, see
//! `TableOrientation`): three coordinate entries followed by an
//! arbitrary number of dependent quantities. `lookup` interpolates
//! every dependent column at the query coordinates and returns the
//! augmented row `[x, y, z, f_0, f_1, ...]`. Out-of-bounds queries
//! yield NaN entries, matching the interpolator.

use mwkit_math::scatter::ScatteredLinear;
use mwkit_types::config::{LookupConfig, TableOrientation};
use mwkit_types::error::{MwError, MwResult};
use ndarray::Array2;

/// Interpolate every dependent column of `table` at (x, y, z).
pub fn lookup(
    x: f64,
    y: f64,
    z: f64,
    table: &Array2<f64>,
    cfg: &LookupConfig,
) -> MwResult<Vec<f64>> {
    let data = match cfg.orientation {
        TableOrientation::RowPerSample => table.to_owned(),
        TableOrientation::ColumnPerSample => table.t().to_owned(),
    };
    let (nsamples, ncols) = data.dim();
    if ncols < 4 {
        return Err(MwError::ShapeMismatch(format!(
            "lookup table needs 3 coordinate columns and at least one \
             value column, got {ncols} columns"
        )));
    }
    if nsamples == 0 {
        return Err(MwError::ShapeMismatch("lookup table is empty".into()));
    }

    let mut points = Array2::zeros((nsamples, 3));
    for i in 0..nsamples {
        for j in 0..3 {
            points[[i, j]] = data[[i, j]];
        }
    }

    let query = [x, y, z];
    let mut out = vec![x, y, z];
    for col in 3..ncols {
        let values: Vec<f64> = (0..nsamples).map(|i| data[[i, col]]).collect();
        let interp = ScatteredLinear::new(points.clone(), values)?;
        let mut v = interp.eval(&query)?;
        if let Some(digits) = cfg.sig_digits {
            v = round_sig(v, digits);
        }
        out.push(v);
    }
    Ok(out)
}

/// Round to a number of significant digits. Zero and non-finite values
/// pass through unchanged.
fn round_sig(v: f64, digits: u32) -> f64 {
    if v == 0.0 || !v.is_finite() || digits == 0 {
        return v;
    }
    let exponent = v.abs().log10().floor() as i32;
    let scale = 10f64.powi(digits as i32 - 1 - exponent);
    (v * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 3-D grid table with two dependent columns:
    /// f = 2x + y - z + 1 (affine), g = x + 10.
    fn sample_table() -> Array2<f64> {
        let axis = [-1.0, 0.0, 1.0, 2.0];
        let n = axis.len().pow(3);
        let mut table = Array2::zeros((n, 5));
        let mut row = 0;
        for &x in &axis {
            for &y in &axis {
                for &z in &axis {
                    table[[row, 0]] = x;
                    table[[row, 1]] = y;
                    table[[row, 2]] = z;
                    table[[row, 3]] = 2.0 * x + y - z + 1.0;
                    table[[row, 4]] = x + 10.0;
                    row += 1;
                }
            }
        }
        table
    }

    #[test]
    fn test_lookup_affine_columns() {
        let table = sample_table();
        let cfg = LookupConfig::default();
        let row = lookup(0.3, 0.7, -0.2, &table, &cfg).unwrap();
        assert_eq!(row.len(), 5);
        assert!((row[0] - 0.3).abs() < 1e-15);
        assert!((row[1] - 0.7).abs() < 1e-15);
        assert!((row[2] + 0.2).abs() < 1e-15);
        let f = 2.0 * 0.3 + 0.7 + 0.2 + 1.0;
        assert!((row[3] - f).abs() < 1e-10, "f column: {} vs {f}", row[3]);
        assert!((row[4] - 10.3).abs() < 1e-10, "g column: {}", row[4]);
    }

    #[test]
    fn test_lookup_column_oriented_table() {
        let table = sample_table();
        let transposed = table.t().to_owned();
        let cfg = LookupConfig {
            orientation: TableOrientation::ColumnPerSample,
            ..LookupConfig::default()
        };
        let row = lookup(0.3, 0.7, -0.2, &transposed, &cfg).unwrap();
        let reference = lookup(0.3, 0.7, -0.2, &table, &LookupConfig::default()).unwrap();
        for (a, b) in row.iter().zip(&reference) {
            assert!((a - b).abs() < 1e-14, "orientations disagree: {a} vs {b}");
        }
    }

    #[test]
    fn test_lookup_out_of_bounds_gives_nan() {
        let table = sample_table();
        let row = lookup(5.0, 0.0, 0.0, &table, &LookupConfig::default()).unwrap();
        assert!(row[3].is_nan());
        assert!(row[4].is_nan());
    }

    #[test]
    fn test_lookup_rounding_flag() {
        let table = sample_table();
        let coarse = LookupConfig {
            sig_digits: Some(2),
            ..LookupConfig::default()
        };
        let row = lookup(0.123, 0.456, 0.789, &table, &coarse).unwrap();
        // Two significant digits: the value column must have at most
        // two digits of mantissa
        let v = row[4];
        let rounded = round_sig(v, 2);
        assert!((v - rounded).abs() < 1e-15, "value {v} not rounded");

        let exact = LookupConfig {
            sig_digits: None,
            ..LookupConfig::default()
        };
        let row_exact = lookup(0.123, 0.456, 0.789, &table, &exact).unwrap();
        assert!(
            (row_exact[4] - 10.123).abs() < 1e-9,
            "unrounded lookup: {}",
            row_exact[4]
        );
    }

    #[test]
    fn test_lookup_narrow_table_rejected() {
        let table = Array2::zeros((10, 3));
        assert!(matches!(
            lookup(0.0, 0.0, 0.0, &table, &LookupConfig::default()),
            Err(MwError::ShapeMismatch(_))
        ));
    }

    #[test]
    fn test_round_sig() {
        assert!((round_sig(123.456, 4) - 123.5).abs() < 1e-12);
        assert!((round_sig(0.00123456, 3) - 0.00123).abs() < 1e-15);
        assert!((round_sig(-987654.0, 2) + 990000.0).abs() < 1e-9);
        assert_eq!(round_sig(0.0, 5), 0.0);
        assert!(round_sig(f64::NAN, 5).is_nan());
        // 14 significant digits leave doubles essentially untouched
        let v = 9.200149014586301;
        assert!((round_sig(v, 14) - v).abs() < 1e-12);
    }
}

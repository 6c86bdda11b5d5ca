// ─────────────────────────────────────────────────────────────────────
// SCPN Microwave Kit — Math
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Numeric kernel for the SCPN Microwave Kit.
//!
//! Dense checked matrix operations, direct linear solvers (Gauss with
//! total pivoting, Cholesky), a C¹ piecewise-quadratic 1-D
//! interpolator, a scattered linear N-D interpolator, and the smooth
//! parameter transforms consumed by the curve-fit drivers.

pub mod cholesky;
pub mod dense;
pub mod gauss;
pub mod quad1d;
pub mod scatter;
pub mod transform;

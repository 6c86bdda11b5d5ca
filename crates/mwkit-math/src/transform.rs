// ─────────────────────────────────────────────────────────────────────
// SCPN Microwave Kit — Parameter Transforms
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Smooth box-constraint and scaling transforms for the curve-fit
//! optimisers.
//!
//! The optimisers run unconstrained; these maps fold box constraints
//! into the parameter space. The formulas are contracts: external
//! fit drivers depend on exactly these maps and their analytic
//! inverses, so they must not be "improved".
//!
//! Bound sides given as NaN mean "open"; infinite bounds are
//! equivalent. Bounds supplied in the wrong order are swapped.

use mwkit_types::error::{MwError, MwResult};
use std::f64::consts::PI;

/// Recognised bound configurations of the box transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoxMode {
    /// No constraint: identity map.
    Unbounded,
    /// Degenerate interval: the parameter is pinned to a point.
    Point(f64),
    /// Finite interval, mapped through a half-cosine.
    Interval { lo: f64, hi: f64 },
    /// Lower bound only: parabola opening upward from the bound.
    LowerOnly(f64),
    /// Upper bound only: parabola opening downward from the bound.
    UpperOnly(f64),
}

/// Box-constraint transform with analytic inverse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxTransform {
    mode: BoxMode,
}

impl BoxTransform {
    /// Classify a (min, max) bound pair. Unrecognised combinations
    /// (e.g. an infinite lower together with a NaN upper) fail with
    /// `BadBoundConfig`.
    pub fn new(mut lo: f64, mut hi: f64) -> MwResult<Self> {
        if lo > hi {
            std::mem::swap(&mut lo, &mut hi);
        }

        let lo_open = lo.is_nan() || lo == f64::NEG_INFINITY;
        let hi_open = hi.is_nan() || hi == f64::INFINITY;

        let mode = if lo_open && hi_open {
            BoxMode::Unbounded
        } else if lo.is_finite() && hi.is_finite() {
            if lo == hi {
                BoxMode::Point(lo)
            } else {
                BoxMode::Interval { lo, hi }
            }
        } else if lo.is_finite() && hi_open {
            BoxMode::LowerOnly(lo)
        } else if lo_open && hi.is_finite() {
            BoxMode::UpperOnly(hi)
        } else {
            return Err(MwError::BadBoundConfig { lo, hi });
        };

        Ok(BoxTransform { mode })
    }

    pub fn mode(&self) -> BoxMode {
        self.mode
    }

    /// Forward map φ.
    pub fn apply(&self, x: f64) -> f64 {
        match self.mode {
            BoxMode::Unbounded => x,
            BoxMode::Point(a) => a,
            BoxMode::Interval { lo, hi } => {
                lo + (hi - lo) / 2.0 * (1.0 - ((x - lo) * PI / (hi - lo)).cos())
            }
            BoxMode::LowerOnly(a) => a + (x - a) * (x - a),
            BoxMode::UpperOnly(b) => b - (x - b) * (x - b),
        }
    }

    /// Inverse map φ⁻¹, defined on the image of φ.
    pub fn inverse(&self, y: f64) -> f64 {
        match self.mode {
            BoxMode::Unbounded => y,
            BoxMode::Point(a) => a,
            BoxMode::Interval { lo, hi } => {
                (hi - lo) / PI * (1.0 - 2.0 * (y - lo) / (hi - lo)).acos() + lo
            }
            BoxMode::LowerOnly(a) => (y - a).sqrt() + a,
            BoxMode::UpperOnly(b) => -(b - y).sqrt() + b,
        }
    }
}

/// Pure rescaling transform: φ(x) = x/s, φ⁻¹(y) = y·s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalingTransform {
    scale: f64,
}

impl ScalingTransform {
    /// The scale must be a strictly positive finite number.
    pub fn new(scale: f64) -> MwResult<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(MwError::BadScaling(scale));
        }
        Ok(ScalingTransform { scale })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn apply(&self, x: f64) -> f64 {
        x / self.scale
    }

    pub fn inverse(&self, y: f64) -> f64 {
        y * self.scale
    }
}

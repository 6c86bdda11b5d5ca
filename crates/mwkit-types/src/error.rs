// ─────────────────────────────────────────────────────────────────────
// SCPN Microwave Kit — Errors
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MwError {
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("Singular matrix: zero pivot at elimination step {step}")]
    SingularMatrix { step: usize },

    #[error("Matrix not positive definite: negative radicand on row {row}")]
    NotPositiveDefinite { row: usize },

    #[error("Interpolation failure: {0}")]
    InterpolationFailure(String),

    #[error("Bad bound configuration: ({lo}, {hi})")]
    BadBoundConfig { lo: f64, hi: f64 },

    #[error("Bad scaling factor: {0} (must be a finite positive number)")]
    BadScaling(f64),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type MwResult<T> = Result<T, MwError>;

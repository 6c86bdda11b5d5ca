// ─────────────────────────────────────────────────────────────────────
// SCPN Microwave Kit — Tables
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Measurement-table lookup for the layout generation scripts.

pub mod lookup;

pub use lookup::lookup;
pub use mwkit_types::config::{LookupConfig, TableOrientation};

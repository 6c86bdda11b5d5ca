// ─────────────────────────────────────────────────────────────────────
// SCPN Microwave Kit — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

/// Which axis of a measurement table holds the samples.
///
/// `RowPerSample` is the layout the layout-generation scripts emit:
/// one sample per row, coordinates in the first three columns.
/// `ColumnPerSample` tables are transposed before lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableOrientation {
    #[default]
    RowPerSample,
    ColumnPerSample,
}

/// Settings for the table lookup adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Sample axis of the table.
    #[serde(default)]
    pub orientation: TableOrientation,
    /// Round interpolated values to this many significant digits.
    /// `None` disables rounding (default: 14, matching the tables the
    /// measurement exports were generated with).
    #[serde(default = "default_sig_digits")]
    pub sig_digits: Option<u32>,
}

fn default_sig_digits() -> Option<u32> {
    Some(14)
}

impl Default for LookupConfig {
    fn default() -> Self {
        LookupConfig {
            orientation: TableOrientation::default(),
            sig_digits: default_sig_digits(),
        }
    }
}

impl LookupConfig {
    /// Load from a JSON file.
    pub fn from_file(path: &str) -> crate::error::MwResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = LookupConfig::default();
        assert_eq!(cfg.orientation, TableOrientation::RowPerSample);
        assert_eq!(cfg.sig_digits, Some(14));
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let cfg: LookupConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.orientation, TableOrientation::RowPerSample);
        assert_eq!(cfg.sig_digits, Some(14));
    }

    #[test]
    fn test_explicit_fields() {
        let cfg: LookupConfig = serde_json::from_str(
            r#"{"orientation": "column_per_sample", "sig_digits": null}"#,
        )
        .unwrap();
        assert_eq!(cfg.orientation, TableOrientation::ColumnPerSample);
        assert_eq!(cfg.sig_digits, None);
    }

    #[test]
    fn test_roundtrip_serialization() {
        let cfg = LookupConfig {
            orientation: TableOrientation::ColumnPerSample,
            sig_digits: Some(10),
        };
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        let cfg2: LookupConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg.orientation, cfg2.orientation);
        assert_eq!(cfg.sig_digits, cfg2.sig_digits);
    }
}

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::selection::Dimension;

/// Dashboard presentation settings.
///
/// Stored as a JSON object on disk; every field is optional:
/// ```json
/// {
///   "currency_symbol": "£",
///   "highlight_color": "#0070C0",
///   "base_color": "#000000",
///   "series_color": "#0070C0",
///   "top_routes": 10,
///   "percent_decimals": 1,
///   "seeded_dimension": "city_start"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub currency_symbol: String,
    /// Bar colour for arrival cities inside the current arrival selection.
    pub highlight_color: String,
    /// Bar colour for every other arrival city.
    pub base_color: String,
    /// Single colour used by the refund and delay reason charts.
    pub series_color: String,
    pub top_routes: usize,
    pub percent_decimals: usize,
    /// Dimension pre-seeded with its first option by the filter pane default.
    pub seeded_dimension: Dimension,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "£".to_string(),
            highlight_color: "#0070C0".to_string(),
            base_color: "#000000".to_string(),
            series_color: "#0070C0".to_string(),
            top_routes: 10,
            percent_decimals: 1,
            seeded_dimension: Dimension::CityStart,
        }
    }
}

impl DashboardConfig {
    /// Loads the config from a JSON file at `path`.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read dashboard config '{path}'"))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse dashboard config '{path}'"))?;
        Ok(config)
    }

    /// Loads from `path` when given, otherwise falls back to defaults.
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"currency_symbol": "$", "seeded_dimension": "city_end"}}"#).unwrap();

        let config = DashboardConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.seeded_dimension, Dimension::CityEnd);
        assert_eq!(config.top_routes, 10);
        assert_eq!(config.highlight_color, "#0070C0");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(DashboardConfig::load("/nonexistent/dashboard.json").is_err());
    }

    #[test]
    fn test_no_path_uses_defaults() {
        assert_eq!(
            DashboardConfig::load_or_default(None).unwrap(),
            DashboardConfig::default()
        );
    }
}

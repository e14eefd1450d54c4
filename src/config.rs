//! Configuration for vlchart
//!
//! Settings come from an optional TOML file. `VLCHART_DATASETS_URL`
//! overrides the dataset base URL, and CLI flags override both.
//!
//! ```toml
//! [writer]
//! version = "v5"
//!
//! [datasets]
//! base_url = "https://vega.github.io/vega-datasets/data/"
//!
//! [html]
//! element_id = "vis"
//! ```

use crate::datasets::{DatasetRegistry, DEFAULT_BASE_URL};
use crate::{Result, VlChartError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[cfg(feature = "vegalite")]
use crate::writer::VegaLiteVersion;

/// Environment variable overriding `datasets.base_url`
pub const DATASETS_URL_ENV: &str = "VLCHART_DATASETS_URL";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    #[cfg(feature = "vegalite")]
    pub writer: WriterConfig,
    pub datasets: DatasetsConfig,
    pub html: HtmlConfig,
}

#[cfg(feature = "vegalite")]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WriterConfig {
    pub version: VegaLiteVersion,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatasetsConfig {
    pub base_url: String,
}

impl Default for DatasetsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HtmlConfig {
    pub element_id: String,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            element_id: "vis".to_string(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        toml_edit::de::from_str(text)
            .map_err(|e| VlChartError::ConfigError(format!("Invalid configuration: {}", e)))
    }

    /// Read a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            VlChartError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), "Loaded configuration file");
        Self::from_toml(&text)
    }

    /// Load from an optional file, then apply environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply overrides from an environment lookup
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(DATASETS_URL_ENV).filter(|url| !url.trim().is_empty()) {
            debug!(%url, "Dataset base URL overridden from environment");
            self.datasets.base_url = url;
        }
    }

    /// Dataset registry for the configured base URL
    pub fn registry(&self) -> DatasetRegistry {
        DatasetRegistry::new(self.datasets.base_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.datasets.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.html.element_id, "vis");
    }

    #[cfg(feature = "vegalite")]
    #[test]
    fn test_partial_config() {
        let config = Config::from_toml(
            r#"
            [writer]
            version = "v2"

            [html]
            element_id = "chart"
            "#,
        )
        .unwrap();
        assert_eq!(config.writer.version, VegaLiteVersion::V2);
        assert_eq!(config.html.element_id, "chart");
        assert_eq!(config.datasets.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        let err = Config::from_toml("[writer]\nversion = \"v9\"").unwrap_err();
        assert!(matches!(err, VlChartError::ConfigError(_)));

        let err = Config::from_toml("[datasets]\nbase = 1").unwrap_err();
        assert!(matches!(err, VlChartError::ConfigError(_)));
    }

    #[test]
    fn test_env_override() {
        let mut config = Config::default();
        config.apply_env(|key| {
            (key == DATASETS_URL_ENV).then(|| "http://localhost:8080/data".to_string())
        });
        assert_eq!(config.datasets.base_url, "http://localhost:8080/data");
        assert_eq!(
            config.registry().url("cars").unwrap(),
            "http://localhost:8080/data/cars.json"
        );

        let mut config = Config::default();
        config.apply_env(|_| Some("   ".to_string()));
        assert_eq!(config.datasets.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[datasets]\nbase_url = \"file:///srv/data/\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.datasets.base_url, "file:///srv/data/");

        let missing = Config::from_file(Path::new("/nonexistent/vlchart.toml")).unwrap_err();
        assert!(missing.to_string().contains("Failed to read"));
    }
}

//! Dataset registry
//!
//! Resolves symbolic dataset names (`seattle_weather`, `cars`, ...) to the
//! URL a front-end loads at display time. Charts reference data by URL only;
//! nothing here fetches it.
//!
//! # Example
//!
//! ```rust
//! use vlchart::DatasetRegistry;
//!
//! let registry = DatasetRegistry::default();
//! let url = registry.url("seattle_weather").unwrap();
//! assert_eq!(url, "https://vega.github.io/vega-datasets/data/seattle-weather.csv");
//! ```

mod catalog;

pub use catalog::{DatasetInfo, CATALOG};

use crate::plot::Data;
use crate::{Result, VlChartError};
use tracing::debug;

/// Default location of the vega-datasets files
pub const DEFAULT_BASE_URL: &str = "https://vega.github.io/vega-datasets/data/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetRegistry {
    base_url: String,
}

impl DatasetRegistry {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// All catalogued datasets
    pub fn list(&self) -> &'static [DatasetInfo] {
        CATALOG
    }

    /// Look up a dataset, treating `_` and `-` as equivalent
    pub fn info(&self, name: &str) -> Result<&'static DatasetInfo> {
        let canonical = normalize_name(name);
        CATALOG
            .iter()
            .find(|info| info.name == canonical)
            .ok_or_else(|| unknown_dataset(name, &canonical))
    }

    /// URL of a dataset
    pub fn url(&self, name: &str) -> Result<String> {
        let (info, url) = self.resolve(name)?;
        debug!(dataset = info.name, %url, "Resolved dataset URL");
        Ok(url)
    }

    /// URL data source for a dataset, with its catalogued format
    pub fn data(&self, name: &str) -> Result<Data> {
        let (info, url) = self.resolve(name)?;
        Ok(Data::url_with_format(url, info.format))
    }

    fn resolve(&self, name: &str) -> Result<(&'static DatasetInfo, String)> {
        let info = self.info(name)?;
        if self.base_url.trim().is_empty() {
            return Err(VlChartError::DatasetError(format!(
                "Cannot resolve dataset '{}': base URL is empty",
                info.name
            )));
        }
        Ok((info, join_url(&self.base_url, info.file)))
    }
}

impl Default for DatasetRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace('_', "-")
}

/// Join with exactly one slash between base and file
fn join_url(base: &str, file: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        file.trim_start_matches('/')
    )
}

fn unknown_dataset(name: &str, canonical: &str) -> VlChartError {
    let prefix: String = canonical.chars().take(3).collect();
    let suggestions: Vec<&str> = if prefix.is_empty() {
        Vec::new()
    } else {
        CATALOG
            .iter()
            .filter(|info| info.name.starts_with(&prefix))
            .map(|info| info.name)
            .collect()
    };

    if suggestions.is_empty() {
        VlChartError::DatasetError(format!("Unknown dataset '{}'", name))
    } else {
        VlChartError::DatasetError(format!(
            "Unknown dataset '{}' (did you mean: {}?)",
            name,
            suggestions.join(", ")
        ))
    }
}

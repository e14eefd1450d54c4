//! Data sources and view-level transforms

use super::predicate::Predicate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// File format of URL data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    Csv,
    Tsv,
    Json,
}

impl DataFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataFormat::Csv => "csv",
            DataFormat::Tsv => "tsv",
            DataFormat::Json => "json",
        }
    }

    /// Infer the format from a file name extension
    pub fn from_path(path: &str) -> Option<Self> {
        let ext = path.rsplit_once('.')?.1.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(DataFormat::Csv),
            "tsv" => Some(DataFormat::Tsv),
            "json" => Some(DataFormat::Json),
            _ => None,
        }
    }
}

/// Where a view's data comes from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Data {
    /// Loaded by the front-end at display time
    Url {
        url: String,
        format: Option<DataFormat>,
    },
    /// Inline rows
    Values(Vec<Value>),
    /// Provided to the front-end under a dataset name
    Named(String),
}

impl Data {
    pub fn url(url: impl Into<String>) -> Self {
        Data::Url {
            url: url.into(),
            format: None,
        }
    }

    pub fn url_with_format(url: impl Into<String>, format: DataFormat) -> Self {
        Data::Url {
            url: url.into(),
            format: Some(format),
        }
    }
}

/// Data transformation applied before encoding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Transform {
    Filter(Predicate),
    Calculate { expr: String, as_field: String },
}

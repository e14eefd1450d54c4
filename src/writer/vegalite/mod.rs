//! Vega-Lite JSON writer implementation
//!
//! Converts vlchart specifications into Vega-Lite JSON for web-based
//! interactive visualizations.
//!
//! # Mapping Strategy
//!
//! - vlchart Chart -> Vega-Lite unit spec (`mark`, `encoding`, `transform`)
//! - vlchart ConcatChart -> Vega-Lite `vconcat` / `hconcat`
//! - vlchart Selection -> `selection` (v2) or `params` (v5)
//! - vlchart Data -> `data` with `url`, `values` or `name`
//!
//! # Example
//!
//! ```rust,ignore
//! use vlchart::writer::{Writer, VegaLiteWriter, VegaLiteVersion};
//!
//! let writer = VegaLiteWriter::with_version(VegaLiteVersion::V2);
//! let vega_json = writer.write(&spec)?;
//! // Can be rendered in browser with vega-embed
//! ```

mod encoding;
mod selection;

use crate::plot::{Chart, ChartSpec, ConcatChart, Data, Mark, Title, Transform};
use crate::writer::Writer;
use crate::{Result, VlChartError};
use const_format::concatcp;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use encoding::build_encoding;
use selection::{predicate_to_json, selection_declarations, SelectionContext};

const SCHEMA_BASE: &str = "https://vega.github.io/schema/vega-lite/";

/// Vega-Lite schema version targeted by the writer
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum VegaLiteVersion {
    /// Legacy selection syntax (`selection`, `multi`)
    V2,
    /// Parameter syntax (`params`, `point`)
    #[default]
    V5,
}

impl VegaLiteVersion {
    pub fn schema_url(&self) -> &'static str {
        match self {
            VegaLiteVersion::V2 => concatcp!(SCHEMA_BASE, "v2.json"),
            VegaLiteVersion::V5 => concatcp!(SCHEMA_BASE, "v5.json"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VegaLiteVersion::V2 => "v2",
            VegaLiteVersion::V5 => "v5",
        }
    }
}

impl fmt::Display for VegaLiteVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VegaLiteVersion {
    type Err = VlChartError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v2" | "2" => Ok(VegaLiteVersion::V2),
            "v5" | "5" => Ok(VegaLiteVersion::V5),
            other => Err(VlChartError::ConfigError(format!(
                "Unsupported Vega-Lite version '{}' (expected v2 or v5)",
                other
            ))),
        }
    }
}

/// Vega-Lite JSON writer
#[derive(Debug, Clone, Default)]
pub struct VegaLiteWriter {
    version: VegaLiteVersion,
}

impl VegaLiteWriter {
    /// Create a writer targeting the default (v5) schema
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_version(version: VegaLiteVersion) -> Self {
        Self { version }
    }

    pub fn version(&self) -> VegaLiteVersion {
        self.version
    }

    /// Validate and build the specification as a JSON value
    pub fn to_value(&self, spec: &ChartSpec) -> Result<Value> {
        self.validate(spec)?;

        let ctx = SelectionContext::new(spec, self.version);
        let mut vl_spec = self.build_view(spec, &ctx)?;

        let root = vl_spec.as_object_mut().ok_or_else(|| {
            VlChartError::InternalError("Top-level view is not a JSON object".to_string())
        })?;
        root.insert("$schema".to_string(), json!(self.version.schema_url()));

        Ok(vl_spec)
    }

    fn build_view(&self, spec: &ChartSpec, ctx: &SelectionContext) -> Result<Value> {
        match spec {
            ChartSpec::Unit(chart) => self.build_unit(chart, ctx),
            ChartSpec::Concat(concat) => self.build_concat(concat, ctx),
        }
    }

    fn build_concat(&self, concat: &ConcatChart, ctx: &SelectionContext) -> Result<Value> {
        let views = concat
            .charts
            .iter()
            .map(|child| self.build_view(child, ctx))
            .collect::<Result<Vec<_>>>()?;
        debug!(
            views = views.len(),
            direction = concat.direction.as_str(),
            "Built concatenated views"
        );

        let mut map = Map::new();
        map.insert(concat.direction.as_str().to_string(), json!(views));
        if let Some(data) = &concat.data {
            map.insert("data".to_string(), data_to_json(data));
        }
        if let Some(title) = &concat.title {
            map.insert("title".to_string(), title_to_json(title));
        }
        if let Some(spacing) = concat.spacing {
            map.insert("spacing".to_string(), json!(spacing));
        }
        if let Some(description) = &concat.description {
            map.insert("description".to_string(), json!(description));
        }
        Ok(Value::Object(map))
    }

    fn build_unit(&self, chart: &Chart, ctx: &SelectionContext) -> Result<Value> {
        let mark = chart
            .mark
            .as_ref()
            .ok_or_else(|| VlChartError::WriterError("View has no mark".to_string()))?;

        let mut map = Map::new();
        map.insert("mark".to_string(), mark_to_json(mark));

        let encoding = build_encoding(&chart.encoding, ctx)?;
        if !encoding.is_empty() {
            map.insert("encoding".to_string(), Value::Object(encoding));
        }

        let declarations = selection_declarations(&chart.selections, self.version);
        if let Some((key, declarations)) = declarations {
            map.insert(key.to_string(), declarations);
        }

        if !chart.transforms.is_empty() {
            let transforms: Vec<Value> = chart
                .transforms
                .iter()
                .map(|t| transform_to_json(t, ctx))
                .collect();
            map.insert("transform".to_string(), json!(transforms));
        }

        if let Some(data) = &chart.data {
            map.insert("data".to_string(), data_to_json(data));
        }
        if let Some(title) = &chart.title {
            map.insert("title".to_string(), title_to_json(title));
        }
        if let Some(width) = chart.width {
            map.insert("width".to_string(), json!(width));
        }
        if let Some(height) = chart.height {
            map.insert("height".to_string(), json!(height));
        }
        if let Some(description) = &chart.description {
            map.insert("description".to_string(), json!(description));
        }

        debug!(
            mark = mark.mark_type.as_str(),
            channels = chart.encoding.len(),
            selections = chart.selections.len(),
            "Built unit view"
        );
        Ok(Value::Object(map))
    }
}

impl Writer for VegaLiteWriter {
    type Output = String;

    fn write(&self, spec: &ChartSpec) -> Result<String> {
        let vl_spec = self.to_value(spec)?;
        serde_json::to_string_pretty(&vl_spec).map_err(|e| {
            VlChartError::WriterError(format!("Failed to serialize Vega-Lite JSON: {}", e))
        })
    }

    fn validate(&self, spec: &ChartSpec) -> Result<()> {
        spec.validate()
    }
}

/// Bare marks are written as a string, marks with properties as an object
fn mark_to_json(mark: &Mark) -> Value {
    if mark.is_bare() {
        return json!(mark.mark_type.as_str());
    }

    let mut map = Map::new();
    map.insert("type".to_string(), json!(mark.mark_type.as_str()));
    if let Some(filled) = mark.filled {
        map.insert("filled".to_string(), json!(filled));
    }
    if let Some(opacity) = mark.opacity {
        map.insert("opacity".to_string(), json!(opacity));
    }
    if let Some(size) = mark.size {
        map.insert("size".to_string(), json!(size));
    }
    if let Some(color) = &mark.color {
        map.insert("color".to_string(), json!(color));
    }
    if let Some(tooltip) = mark.tooltip {
        map.insert("tooltip".to_string(), json!(tooltip));
    }
    Value::Object(map)
}

fn data_to_json(data: &Data) -> Value {
    match data {
        Data::Url { url, format } => {
            let mut map = Map::new();
            map.insert("url".to_string(), json!(url));
            if let Some(format) = format {
                map.insert("format".to_string(), json!({"type": format.as_str()}));
            }
            Value::Object(map)
        }
        Data::Values(rows) => json!({"values": rows}),
        Data::Named(name) => json!({"name": name}),
    }
}

fn title_to_json(title: &Title) -> Value {
    match title {
        Title::Text(text) => json!(text),
        Title::Params {
            text,
            subtitle,
            anchor,
        } => {
            let mut map = Map::new();
            map.insert("text".to_string(), json!(text));
            if let Some(subtitle) = subtitle {
                map.insert("subtitle".to_string(), json!(subtitle));
            }
            if let Some(anchor) = anchor {
                map.insert("anchor".to_string(), json!(anchor.as_str()));
            }
            Value::Object(map)
        }
    }
}

fn transform_to_json(transform: &Transform, ctx: &SelectionContext) -> Value {
    match transform {
        Transform::Filter(predicate) => json!({"filter": predicate_to_json(predicate, ctx)}),
        Transform::Calculate { expr, as_field } => json!({"calculate": expr, "as": as_field}),
    }
}

/*!
# vlchart - Declarative Interactive Charts

vlchart is a small grammar of graphics for building interactive
[Vega-Lite](https://vega.github.io/vega-lite/) specifications from Rust.

## Example

```rust
use vlchart::plot::{vconcat, Channel, Chart, ChartSpec, FieldChannel, Selection};
use vlchart::writer::{VegaLiteWriter, Writer};

# fn main() -> vlchart::Result<()> {
let brush = Selection::interval().name("brush").encodings([Channel::X]);

let points = Chart::new()
    .mark_point()
    .encode(Channel::X, FieldChannel::new("date:T")?)
    .encode(Channel::Y, FieldChannel::new("temp_max:Q")?)
    .select(brush.clone());

let bars = Chart::new()
    .mark_bar()
    .encode(Channel::X, FieldChannel::new("count()")?)
    .encode(Channel::Y, FieldChannel::new("weather:N")?)
    .transform_filter(brush.predicate());

let chart = ChartSpec::from(vconcat([points, bars]).data_url("data/seattle-weather.csv"));
let json = VegaLiteWriter::new().write(&chart)?;
# let _ = json;
# Ok(())
# }
```

## Core Components

- [`plot`] - Typed chart grammar (marks, encodings, scales, selections, views)
- [`datasets`] - Symbolic dataset names resolved to URLs
- [`writer`] - Output format writers (Vega-Lite JSON, standalone HTML)
- [`gallery`] - Ready-made example charts
- [`config`] - TOML configuration with environment overrides
*/

pub mod config;
pub mod datasets;
pub mod naming;
pub mod plot;
pub mod writer;

#[cfg(feature = "vegalite")]
pub mod gallery;

pub use config::Config;
pub use datasets::DatasetRegistry;
pub use plot::{Chart, ChartSpec, ConcatChart};

/// Crate version, reported by the CLI
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Main library error type
#[derive(thiserror::Error, Debug)]
pub enum VlChartError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Dataset error: {0}")]
    DatasetError(String),

    #[error("Output generation error: {0}")]
    WriterError(String),

    #[error("Gallery error: {0}")]
    GalleryError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type Result<T> = std::result::Result<T, VlChartError>;

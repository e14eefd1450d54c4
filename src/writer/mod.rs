//! Output writers for vlchart specifications
//!
//! Writers turn a validated [`ChartSpec`] into an output format a front-end
//! can display.
//!
//! # Example
//!
//! ```rust,ignore
//! use vlchart::writer::{Writer, VegaLiteWriter};
//!
//! let writer = VegaLiteWriter::new();
//! let json = writer.write(&spec)?;
//! // Can be rendered in browser with vega-embed
//! ```

use crate::plot::ChartSpec;
use crate::Result;

#[cfg(feature = "vegalite")]
pub mod vegalite;

#[cfg(feature = "html")]
pub mod html;

#[cfg(feature = "vegalite")]
pub use vegalite::{VegaLiteVersion, VegaLiteWriter};

#[cfg(feature = "html")]
pub use html::HtmlWriter;

/// Trait for chart output writers
pub trait Writer {
    /// Output type produced by this writer
    type Output;

    /// Validate the chart and render it
    fn write(&self, spec: &ChartSpec) -> Result<Self::Output>;

    /// Check that the chart can be rendered by this writer
    fn validate(&self, spec: &ChartSpec) -> Result<()>;
}

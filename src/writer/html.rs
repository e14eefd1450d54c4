//! Standalone HTML writer
//!
//! Wraps the Vega-Lite JSON in a page that loads vega, vega-lite and
//! vega-embed from a CDN and renders the chart into a single element.

use super::vegalite::{VegaLiteVersion, VegaLiteWriter};
use super::Writer;
use crate::plot::ChartSpec;
use crate::{Result, VlChartError};
use const_format::concatcp;

const CDN_BASE: &str = "https://cdn.jsdelivr.net/npm/";

/// Default id of the element the chart is embedded into
pub const DEFAULT_ELEMENT_ID: &str = "vis";

/// Script URLs for (vega, vega-lite, vega-embed)
fn script_urls(version: VegaLiteVersion) -> [&'static str; 3] {
    match version {
        VegaLiteVersion::V2 => [
            concatcp!(CDN_BASE, "vega@3"),
            concatcp!(CDN_BASE, "vega-lite@2"),
            concatcp!(CDN_BASE, "vega-embed@3"),
        ],
        VegaLiteVersion::V5 => [
            concatcp!(CDN_BASE, "vega@5"),
            concatcp!(CDN_BASE, "vega-lite@5"),
            concatcp!(CDN_BASE, "vega-embed@6"),
        ],
    }
}

/// HTML page writer
#[derive(Debug, Clone)]
pub struct HtmlWriter {
    inner: VegaLiteWriter,
    element_id: String,
}

impl HtmlWriter {
    pub fn new(inner: VegaLiteWriter) -> Self {
        Self {
            inner,
            element_id: DEFAULT_ELEMENT_ID.to_string(),
        }
    }

    /// Set the id of the element the chart renders into
    pub fn element_id(mut self, id: impl Into<String>) -> Self {
        self.element_id = id.into();
        self
    }

    fn check_element_id(&self) -> Result<()> {
        let valid = !self.element_id.is_empty()
            && self
                .element_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if valid {
            Ok(())
        } else {
            Err(VlChartError::WriterError(format!(
                "Invalid element id '{}' (use letters, digits, '-' or '_')",
                self.element_id
            )))
        }
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new(VegaLiteWriter::new())
    }
}

/// Keep `</script>` (and any other closing tag) inside the JSON from ending the block
fn escape_for_script(json: &str) -> String {
    json.replace("</", "<\\/")
}

impl Writer for HtmlWriter {
    type Output = String;

    fn write(&self, spec: &ChartSpec) -> Result<String> {
        self.check_element_id()?;
        let json = escape_for_script(&self.inner.write(spec)?);
        let [vega, vega_lite, vega_embed] = script_urls(self.inner.version());
        let id = &self.element_id;

        Ok(format!(
            r##"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <style>
    .error {{
        color: red;
    }}
  </style>
  <script src="{vega}"></script>
  <script src="{vega_lite}"></script>
  <script src="{vega_embed}"></script>
</head>
<body>
  <div id="{id}"></div>
  <script>
    (function(vegaEmbed) {{
      var spec = {json};
      var embedOpt = {{"mode": "vega-lite"}};

      function showError(el, error) {{
        el.innerHTML = ('<div class="error" style="color:red;">'
                        + '<p>JavaScript Error: ' + error.message + '</p>'
                        + "<p>This usually means there's a typo in your chart specification. "
                        + "See the javascript console for the full traceback.</p>"
                        + '</div>');
        throw error;
      }}
      const el = document.getElementById('{id}');
      vegaEmbed("#{id}", spec, embedOpt)
        .catch(error => showError(el, error));
    }})(vegaEmbed);
  </script>
</body>
</html>
"##
        ))
    }

    fn validate(&self, spec: &ChartSpec) -> Result<()> {
        self.check_element_id()?;
        self.inner.validate(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::{Channel, Chart, FieldChannel};

    fn spec_with_title(title: &str) -> ChartSpec {
        ChartSpec::from(
            Chart::new()
                .mark_bar()
                .encode(Channel::Y, FieldChannel::new("weather:N").unwrap())
                .data_url("weather.csv")
                .title(title),
        )
    }

    #[test]
    fn test_page_loads_matching_libraries() {
        let html = HtmlWriter::new(VegaLiteWriter::with_version(VegaLiteVersion::V2))
            .write(&spec_with_title("Weather"))
            .unwrap();
        assert!(html.contains("https://cdn.jsdelivr.net/npm/vega@3"));
        assert!(html.contains("https://cdn.jsdelivr.net/npm/vega-lite@2"));
        assert!(html.contains("https://cdn.jsdelivr.net/npm/vega-embed@3"));
        assert!(html.contains("vega-lite/v2.json"));

        let html = HtmlWriter::default()
            .write(&spec_with_title("Weather"))
            .unwrap();
        assert!(html.contains("vega-embed@6"));
    }

    #[test]
    fn test_custom_element_id() {
        let html = HtmlWriter::default()
            .element_id("weather-chart")
            .write(&spec_with_title("Weather"))
            .unwrap();
        assert!(html.contains(r#"<div id="weather-chart"></div>"#));
        assert!(html.contains(r##"vegaEmbed("#weather-chart""##));

        let err = HtmlWriter::default()
            .element_id("bad id\"")
            .write(&spec_with_title("Weather"));
        assert!(err.is_err());
    }

    #[test]
    fn test_script_close_tag_is_escaped() {
        let html = HtmlWriter::default()
            .write(&spec_with_title("</script><b>x</b>"))
            .unwrap();
        assert_eq!(html.matches("</script>").count(), 4);
        assert!(html.contains(r"<\/script>"));
    }
}

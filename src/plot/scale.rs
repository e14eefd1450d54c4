//! Scale and guide types
//!
//! A scale maps data values (domain) to visual values (range). Guides are
//! the axes and legends that explain a scale to the reader.

use super::types::ArrayElement;
use serde::{Deserialize, Serialize};

/// Vega-Lite scale type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleType {
    Linear,
    Log,
    Sqrt,
    Pow,
    Time,
    Utc,
    Ordinal,
    Band,
    Point,
}

impl ScaleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScaleType::Linear => "linear",
            ScaleType::Log => "log",
            ScaleType::Sqrt => "sqrt",
            ScaleType::Pow => "pow",
            ScaleType::Time => "time",
            ScaleType::Utc => "utc",
            ScaleType::Ordinal => "ordinal",
            ScaleType::Band => "band",
            ScaleType::Point => "point",
        }
    }
}

/// Scale configuration for an encoding channel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub scale_type: Option<ScaleType>,
    pub domain: Option<Vec<ArrayElement>>,
    pub range: Option<Vec<ArrayElement>>,
    pub zero: Option<bool>,
    pub nice: Option<bool>,
}

impl Scale {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale_type(mut self, scale_type: ScaleType) -> Self {
        self.scale_type = Some(scale_type);
        self
    }

    /// Set the input domain, e.g. `[-5, 40]` or a list of categories
    pub fn domain<I, T>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ArrayElement>,
    {
        self.domain = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Set the output range, e.g. a list of colors or a size extent
    pub fn range<I, T>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ArrayElement>,
    {
        self.range = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn zero(mut self, zero: bool) -> Self {
        self.zero = Some(zero);
        self
    }

    pub fn nice(mut self, nice: bool) -> Self {
        self.nice = Some(nice);
        self
    }
}

/// Axis guide for positional channels
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: Option<String>,
    pub format: Option<String>,
    pub grid: Option<bool>,
    pub label_angle: Option<f64>,
}

impl Axis {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn grid(mut self, grid: bool) -> Self {
        self.grid = Some(grid);
        self
    }

    pub fn label_angle(mut self, angle: f64) -> Self {
        self.label_angle = Some(angle);
        self
    }
}

/// Legend placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendOrient {
    Left,
    Right,
    Top,
    Bottom,
    None,
}

impl LegendOrient {
    pub fn as_str(&self) -> &'static str {
        match self {
            LegendOrient::Left => "left",
            LegendOrient::Right => "right",
            LegendOrient::Top => "top",
            LegendOrient::Bottom => "bottom",
            LegendOrient::None => "none",
        }
    }
}

/// Legend guide for non-positional channels
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub title: Option<String>,
    pub orient: Option<LegendOrient>,
}

impl Legend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn orient(mut self, orient: LegendOrient) -> Self {
        self.orient = Some(orient);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_builder_collects_mixed_literals() {
        let scale = Scale::new().domain([-5, 40]).range(["#e7ba52", "#a7a7a7"]);
        assert_eq!(
            scale.domain,
            Some(vec![ArrayElement::Number(-5.0), ArrayElement::Number(40.0)])
        );
        assert_eq!(scale.range.as_ref().map(Vec::len), Some(2));
        assert_eq!(scale.scale_type, None);
    }

    #[test]
    fn test_axis_builder() {
        let axis = Axis::new().title("Date").grid(false);
        assert_eq!(axis.title.as_deref(), Some("Date"));
        assert_eq!(axis.grid, Some(false));
        assert_eq!(axis.format, None);
    }
}

//! Mark types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Graphical primitive drawn for each datum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkType {
    Point,
    Circle,
    Square,
    Bar,
    Line,
    Area,
    Rect,
    Rule,
    Tick,
    Text,
}

impl MarkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkType::Point => "point",
            MarkType::Circle => "circle",
            MarkType::Square => "square",
            MarkType::Bar => "bar",
            MarkType::Line => "line",
            MarkType::Area => "area",
            MarkType::Rect => "rect",
            MarkType::Rule => "rule",
            MarkType::Tick => "tick",
            MarkType::Text => "text",
        }
    }
}

impl fmt::Display for MarkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Mark type plus static mark properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    pub mark_type: MarkType,
    pub filled: Option<bool>,
    pub opacity: Option<f64>,
    pub size: Option<f64>,
    pub color: Option<String>,
    pub tooltip: Option<bool>,
}

impl Mark {
    pub fn new(mark_type: MarkType) -> Self {
        Self {
            mark_type,
            filled: None,
            opacity: None,
            size: None,
            color: None,
            tooltip: None,
        }
    }

    pub fn filled(mut self, filled: bool) -> Self {
        self.filled = Some(filled);
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn tooltip(mut self, tooltip: bool) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    /// True when no property beyond the type is set
    pub fn is_bare(&self) -> bool {
        self.filled.is_none()
            && self.opacity.is_none()
            && self.size.is_none()
            && self.color.is_none()
            && self.tooltip.is_none()
    }
}

impl From<MarkType> for Mark {
    fn from(mark_type: MarkType) -> Self {
        Mark::new(mark_type)
    }
}

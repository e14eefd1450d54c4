//! Encoding channels and channel definitions
//!
//! A unit chart maps each visual [`Channel`] to a [`ChannelDef`]: a data
//! field, a literal value, or a condition choosing between the two.

use super::predicate::Predicate;
use super::scale::{Axis, Legend, Scale};
use super::types::{Aggregate, FieldDef, FieldType, LiteralValue, TimeUnit};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual encoding channel
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    X,
    Y,
    X2,
    Y2,
    Color,
    Fill,
    Stroke,
    Opacity,
    Size,
    Shape,
    Detail,
    Text,
    Tooltip,
    Row,
    Column,
}

impl Channel {
    /// Vega-Lite encoding key
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::X => "x",
            Channel::Y => "y",
            Channel::X2 => "x2",
            Channel::Y2 => "y2",
            Channel::Color => "color",
            Channel::Fill => "fill",
            Channel::Stroke => "stroke",
            Channel::Opacity => "opacity",
            Channel::Size => "size",
            Channel::Shape => "shape",
            Channel::Detail => "detail",
            Channel::Text => "text",
            Channel::Tooltip => "tooltip",
            Channel::Row => "row",
            Channel::Column => "column",
        }
    }

    /// Positional channels carry axes; the rest carry legends
    pub fn is_positional(&self) -> bool {
        matches!(self, Channel::X | Channel::Y | Channel::X2 | Channel::Y2)
    }

    /// Channels whose literal values and scale ranges are CSS colors
    pub fn is_color(&self) -> bool {
        matches!(self, Channel::Color | Channel::Fill | Channel::Stroke)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sort order for a field channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        }
    }
}

/// A channel bound to a data field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldChannel {
    pub def: FieldDef,
    pub scale: Option<Scale>,
    pub axis: Option<Axis>,
    pub legend: Option<Legend>,
    pub title: Option<String>,
    pub sort: Option<SortOrder>,
}

impl FieldChannel {
    /// Create a field channel from shorthand such as `"weather:N"` or `"count()"`
    pub fn new(shorthand: &str) -> Result<Self> {
        Ok(Self::from_def(FieldDef::parse(shorthand)?))
    }

    pub fn from_def(def: FieldDef) -> Self {
        Self {
            def,
            scale: None,
            axis: None,
            legend: None,
            title: None,
            sort: None,
        }
    }

    pub fn field_type(mut self, field_type: FieldType) -> Self {
        self.def.field_type = Some(field_type);
        self
    }

    pub fn time_unit(mut self, time_unit: TimeUnit) -> Self {
        self.def.time_unit = Some(time_unit);
        self
    }

    pub fn aggregate(mut self, aggregate: Aggregate) -> Self {
        self.def.aggregate = Some(aggregate);
        self
    }

    pub fn scale(mut self, scale: Scale) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = Some(axis);
        self
    }

    pub fn legend(mut self, legend: Legend) -> Self {
        self.legend = Some(legend);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }
}

/// Definition bound to a single encoding channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChannelDef {
    Field(FieldChannel),
    Value(LiteralValue),
    /// `if_true` where the predicate holds, `if_false` elsewhere
    Condition {
        predicate: Predicate,
        if_true: Box<ChannelDef>,
        if_false: Box<ChannelDef>,
    },
}

impl ChannelDef {
    pub fn is_field(&self) -> bool {
        matches!(self, ChannelDef::Field(_))
    }
}

impl From<FieldChannel> for ChannelDef {
    fn from(field: FieldChannel) -> Self {
        ChannelDef::Field(field)
    }
}

impl From<LiteralValue> for ChannelDef {
    fn from(value: LiteralValue) -> Self {
        ChannelDef::Value(value)
    }
}

/// Literal value channel definition, e.g. `value("lightgray")`
pub fn value(value: impl Into<LiteralValue>) -> ChannelDef {
    ChannelDef::Value(value.into())
}

/// Conditional channel definition
///
/// `if_true` applies to marks satisfying the predicate, `if_false` to all others.
pub fn condition(
    predicate: impl Into<Predicate>,
    if_true: impl Into<ChannelDef>,
    if_false: impl Into<ChannelDef>,
) -> ChannelDef {
    ChannelDef::Condition {
        predicate: predicate.into(),
        if_true: Box::new(if_true.into()),
        if_false: Box::new(if_false.into()),
    }
}

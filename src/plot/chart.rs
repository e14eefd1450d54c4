//! Unit and composite chart views
//!
//! A [`Chart`] is a single view: one mark type with its encodings,
//! selections and transforms. [`vconcat`] and [`hconcat`] stack views into a
//! [`ConcatChart`]. Data and title set on a concat are shared by every
//! nested view.

use super::data::{Data, Transform};
use super::encoding::{Channel, ChannelDef};
use super::mark::{Mark, MarkType};
use super::predicate::Predicate;
use super::selection::Selection;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Chart title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Title {
    Text(String),
    Params {
        text: String,
        subtitle: Option<String>,
        anchor: Option<TitleAnchor>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleAnchor {
    Start,
    Middle,
    End,
}

impl TitleAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TitleAnchor::Start => "start",
            TitleAnchor::Middle => "middle",
            TitleAnchor::End => "end",
        }
    }
}

impl From<&str> for Title {
    fn from(text: &str) -> Self {
        Title::Text(text.to_string())
    }
}

impl From<String> for Title {
    fn from(text: String) -> Self {
        Title::Text(text)
    }
}

/// A single view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub mark: Option<Mark>,
    pub encoding: BTreeMap<Channel, ChannelDef>,
    pub selections: Vec<Selection>,
    pub transforms: Vec<Transform>,
    pub data: Option<Data>,
    pub title: Option<Title>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub description: Option<String>,
}

impl Chart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(mut self, mark: impl Into<Mark>) -> Self {
        self.mark = Some(mark.into());
        self
    }

    pub fn mark_point(self) -> Self {
        self.mark(MarkType::Point)
    }

    pub fn mark_circle(self) -> Self {
        self.mark(MarkType::Circle)
    }

    pub fn mark_square(self) -> Self {
        self.mark(MarkType::Square)
    }

    pub fn mark_bar(self) -> Self {
        self.mark(MarkType::Bar)
    }

    pub fn mark_line(self) -> Self {
        self.mark(MarkType::Line)
    }

    pub fn mark_area(self) -> Self {
        self.mark(MarkType::Area)
    }

    pub fn mark_rect(self) -> Self {
        self.mark(MarkType::Rect)
    }

    pub fn mark_rule(self) -> Self {
        self.mark(MarkType::Rule)
    }

    pub fn mark_tick(self) -> Self {
        self.mark(MarkType::Tick)
    }

    pub fn mark_text(self) -> Self {
        self.mark(MarkType::Text)
    }

    /// Bind a channel; a later call for the same channel replaces the earlier one
    pub fn encode(mut self, channel: Channel, def: impl Into<ChannelDef>) -> Self {
        self.encoding.insert(channel, def.into());
        self
    }

    /// Define a selection on this view
    pub fn select(mut self, selection: Selection) -> Self {
        self.selections.push(selection);
        self
    }

    pub fn transform_filter(mut self, predicate: impl Into<Predicate>) -> Self {
        self.transforms.push(Transform::Filter(predicate.into()));
        self
    }

    pub fn transform_calculate(
        mut self,
        as_field: impl Into<String>,
        expr: impl Into<String>,
    ) -> Self {
        self.transforms.push(Transform::Calculate {
            expr: expr.into(),
            as_field: as_field.into(),
        });
        self
    }

    pub fn data(mut self, data: Data) -> Self {
        self.data = Some(data);
        self
    }

    pub fn data_url(self, url: impl Into<String>) -> Self {
        self.data(Data::url(url))
    }

    pub fn title(mut self, title: impl Into<Title>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConcatDirection {
    Vertical,
    Horizontal,
}

impl ConcatDirection {
    /// Vega-Lite composition operator key
    pub fn as_str(&self) -> &'static str {
        match self {
            ConcatDirection::Vertical => "vconcat",
            ConcatDirection::Horizontal => "hconcat",
        }
    }
}

/// Views stacked top-to-bottom or side-by-side, sharing data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcatChart {
    pub direction: ConcatDirection,
    pub charts: Vec<ChartSpec>,
    pub data: Option<Data>,
    pub title: Option<Title>,
    pub spacing: Option<u32>,
    pub description: Option<String>,
}

impl ConcatChart {
    pub fn new(direction: ConcatDirection) -> Self {
        Self {
            direction,
            charts: Vec::new(),
            data: None,
            title: None,
            spacing: None,
            description: None,
        }
    }

    pub fn push(mut self, chart: impl Into<ChartSpec>) -> Self {
        self.charts.push(chart.into());
        self
    }

    pub fn data(mut self, data: Data) -> Self {
        self.data = Some(data);
        self
    }

    pub fn data_url(self, url: impl Into<String>) -> Self {
        self.data(Data::url(url))
    }

    pub fn title(mut self, title: impl Into<Title>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn spacing(mut self, spacing: u32) -> Self {
        self.spacing = Some(spacing);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

fn concat<I, C>(direction: ConcatDirection, charts: I) -> ConcatChart
where
    I: IntoIterator<Item = C>,
    C: Into<ChartSpec>,
{
    ConcatChart {
        charts: charts.into_iter().map(Into::into).collect(),
        ..ConcatChart::new(direction)
    }
}

/// Stack views top-to-bottom
pub fn vconcat<I, C>(charts: I) -> ConcatChart
where
    I: IntoIterator<Item = C>,
    C: Into<ChartSpec>,
{
    concat(ConcatDirection::Vertical, charts)
}

/// Place views side-by-side
pub fn hconcat<I, C>(charts: I) -> ConcatChart
where
    I: IntoIterator<Item = C>,
    C: Into<ChartSpec>,
{
    concat(ConcatDirection::Horizontal, charts)
}

/// Any chart that can be written out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartSpec {
    Unit(Chart),
    Concat(ConcatChart),
}

impl ChartSpec {
    pub fn data(&self) -> Option<&Data> {
        match self {
            ChartSpec::Unit(chart) => chart.data.as_ref(),
            ChartSpec::Concat(concat) => concat.data.as_ref(),
        }
    }

    pub fn title(&self) -> Option<&Title> {
        match self {
            ChartSpec::Unit(chart) => chart.title.as_ref(),
            ChartSpec::Concat(concat) => concat.title.as_ref(),
        }
    }

    /// All unit views in document order
    pub fn units(&self) -> Vec<&Chart> {
        let mut units = Vec::new();
        self.collect_units(&mut units);
        units
    }

    fn collect_units<'a>(&'a self, units: &mut Vec<&'a Chart>) {
        match self {
            ChartSpec::Unit(chart) => units.push(chart),
            ChartSpec::Concat(concat) => {
                for child in &concat.charts {
                    child.collect_units(units);
                }
            }
        }
    }

    /// Every selection defined anywhere in the composition
    pub fn selections(&self) -> Vec<&Selection> {
        self.units()
            .into_iter()
            .flat_map(|chart| chart.selections.iter())
            .collect()
    }
}

impl From<Chart> for ChartSpec {
    fn from(chart: Chart) -> Self {
        ChartSpec::Unit(chart)
    }
}

impl From<ConcatChart> for ChartSpec {
    fn from(concat: ConcatChart) -> Self {
        ChartSpec::Concat(concat)
    }
}

//! Interactive selections
//!
//! A selection is defined on one unit view and can be referenced anywhere in
//! the same composition: as a condition on an encoding, or as a filter
//! predicate on a linked view.

use super::encoding::Channel;
use super::predicate::Predicate;
use crate::naming;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionKind {
    /// Continuous range chosen by dragging a brush
    Interval,
    /// Discrete values chosen by clicking, shift-click adds
    Multi,
    /// A single discrete value
    Single,
}

/// What an empty selection matches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyBehavior {
    #[default]
    All,
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub name: String,
    pub kind: SelectionKind,
    /// Channels the selection projects over
    pub encodings: Vec<Channel>,
    /// Fields the selection projects over
    pub fields: Vec<String>,
    pub empty: EmptyBehavior,
    /// Bind an interval to the view's scales (pan and zoom)
    pub bind_scales: bool,
    /// Event stream that triggers the selection, e.g. `mouseover`
    pub on: Option<String>,
    /// Event stream that clears the selection
    pub clear: Option<String>,
}

impl Selection {
    fn with_kind(kind: SelectionKind) -> Self {
        Self {
            name: naming::next_selection_name(),
            kind,
            encodings: Vec::new(),
            fields: Vec::new(),
            empty: EmptyBehavior::All,
            bind_scales: false,
            on: None,
            clear: None,
        }
    }

    /// Interval (brush) selection
    pub fn interval() -> Self {
        Self::with_kind(SelectionKind::Interval)
    }

    /// Multi-value (click) selection
    pub fn multi() -> Self {
        Self::with_kind(SelectionKind::Multi)
    }

    pub fn single() -> Self {
        Self::with_kind(SelectionKind::Single)
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn encodings(mut self, channels: impl IntoIterator<Item = Channel>) -> Self {
        self.encodings = channels.into_iter().collect();
        self
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn empty(mut self, empty: EmptyBehavior) -> Self {
        self.empty = empty;
        self
    }

    pub fn bind_scales(mut self) -> Self {
        self.bind_scales = true;
        self
    }

    pub fn on(mut self, events: impl Into<String>) -> Self {
        self.on = Some(events.into());
        self
    }

    pub fn clear(mut self, events: impl Into<String>) -> Self {
        self.clear = Some(events.into());
        self
    }

    /// Predicate holding for data points inside this selection
    pub fn predicate(&self) -> Predicate {
        Predicate::Selection(self.name.clone())
    }
}

impl From<&Selection> for Predicate {
    fn from(selection: &Selection) -> Self {
        selection.predicate()
    }
}

impl From<Selection> for Predicate {
    fn from(selection: Selection) -> Self {
        Predicate::Selection(selection.name)
    }
}

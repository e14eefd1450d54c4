//! Encoding channel construction for Vega-Lite writer
//!
//! This module handles building Vega-Lite encoding channels from channel
//! definitions, including conditional encodings, scales and guides.

use super::selection::{condition_test, SelectionContext};
use crate::plot::{Axis, Channel, ChannelDef, FieldChannel, Legend, Scale};
use crate::{Result, VlChartError};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

fn array_json(values: &[crate::plot::ArrayElement]) -> Value {
    Value::Array(values.iter().map(|v| v.to_json()).collect())
}

pub(super) fn scale_to_json(scale: &Scale) -> Value {
    let mut map = Map::new();
    if let Some(scale_type) = scale.scale_type {
        map.insert("type".to_string(), json!(scale_type.as_str()));
    }
    if let Some(domain) = &scale.domain {
        map.insert("domain".to_string(), array_json(domain));
    }
    if let Some(range) = &scale.range {
        map.insert("range".to_string(), array_json(range));
    }
    if let Some(zero) = scale.zero {
        map.insert("zero".to_string(), json!(zero));
    }
    if let Some(nice) = scale.nice {
        map.insert("nice".to_string(), json!(nice));
    }
    Value::Object(map)
}

pub(super) fn axis_to_json(axis: &Axis) -> Value {
    let mut map = Map::new();
    if let Some(title) = &axis.title {
        map.insert("title".to_string(), json!(title));
    }
    if let Some(format) = &axis.format {
        map.insert("format".to_string(), json!(format));
    }
    if let Some(grid) = axis.grid {
        map.insert("grid".to_string(), json!(grid));
    }
    if let Some(angle) = axis.label_angle {
        map.insert("labelAngle".to_string(), json!(angle));
    }
    Value::Object(map)
}

pub(super) fn legend_to_json(legend: &Legend) -> Value {
    let mut map = Map::new();
    if let Some(title) = &legend.title {
        map.insert("title".to_string(), json!(title));
    }
    if let Some(orient) = legend.orient {
        map.insert("orient".to_string(), json!(orient.as_str()));
    }
    Value::Object(map)
}

/// Field channel properties (`field`, `type`, `aggregate`, `timeUnit`, ...)
fn field_channel_map(channel: Channel, field: &FieldChannel) -> Result<Map<String, Value>> {
    let field_type = field.def.resolved_type().ok_or_else(|| {
        VlChartError::WriterError(format!(
            "Field '{}' on channel '{}' has no type",
            field.def.label(),
            channel
        ))
    })?;

    let mut map = Map::new();
    if let Some(name) = &field.def.field {
        map.insert("field".to_string(), json!(name));
    }
    map.insert("type".to_string(), json!(field_type.as_str()));
    if let Some(aggregate) = field.def.aggregate {
        map.insert("aggregate".to_string(), json!(aggregate.as_str()));
    }
    if let Some(time_unit) = field.def.time_unit {
        map.insert("timeUnit".to_string(), json!(time_unit.as_str()));
    }
    if let Some(scale) = &field.scale {
        map.insert("scale".to_string(), scale_to_json(scale));
    }
    if let Some(axis) = &field.axis {
        map.insert("axis".to_string(), axis_to_json(axis));
    }
    if let Some(legend) = &field.legend {
        map.insert("legend".to_string(), legend_to_json(legend));
    }
    if let Some(title) = &field.title {
        map.insert("title".to_string(), json!(title));
    }
    if let Some(sort) = field.sort {
        map.insert("sort".to_string(), json!(sort.as_str()));
    }
    Ok(map)
}

/// Properties of a non-conditional branch
fn branch_map(channel: Channel, def: &ChannelDef) -> Result<Map<String, Value>> {
    match def {
        ChannelDef::Field(field) => field_channel_map(channel, field),
        ChannelDef::Value(value) => {
            let mut map = Map::new();
            map.insert("value".to_string(), value.to_json());
            Ok(map)
        }
        ChannelDef::Condition { .. } => Err(VlChartError::WriterError(format!(
            "Nested condition on channel '{}' is not supported",
            channel
        ))),
    }
}

/// Build a single encoding channel
///
/// Conditions become `{"condition": {<test>, <if_true>}, <if_false>}`. Vega-Lite
/// allows a field on at most one side, so when the field is on the false
/// branch the value moves into the condition and the field stays outside.
pub(super) fn build_encoding_channel(
    channel: Channel,
    def: &ChannelDef,
    ctx: &SelectionContext,
) -> Result<Value> {
    match def {
        ChannelDef::Condition {
            predicate,
            if_true,
            if_false,
        } => {
            if if_true.is_field() && if_false.is_field() {
                return Err(VlChartError::WriterError(format!(
                    "Condition on channel '{}' has fields on both branches",
                    channel
                )));
            }

            let mut condition = condition_test(predicate, ctx);
            condition.extend(branch_map(channel, if_true)?);

            let mut outer = branch_map(channel, if_false)?;
            outer.insert("condition".to_string(), Value::Object(condition));
            Ok(Value::Object(outer))
        }
        other => Ok(Value::Object(branch_map(channel, other)?)),
    }
}

/// Build the `encoding` object of a unit view
pub(super) fn build_encoding(
    encoding: &BTreeMap<Channel, ChannelDef>,
    ctx: &SelectionContext,
) -> Result<Map<String, Value>> {
    let mut map = Map::new();
    for (channel, def) in encoding {
        map.insert(
            channel.as_str().to_string(),
            build_encoding_channel(*channel, def, ctx)?,
        );
    }
    Ok(map)
}

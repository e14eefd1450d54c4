//! Selection and predicate output for the Vega-Lite writer
//!
//! Vega-Lite v2 declares selections in a per-view `selection` object and
//! references them with `{"selection": name}`. Vega-Lite v5 declares them as
//! `params` and references them with `{"param": name}`, moving the empty
//! behaviour from the definition onto each reference.

use super::VegaLiteVersion;
use crate::plot::{ChartSpec, EmptyBehavior, Predicate, Selection, SelectionKind};
use serde_json::{json, Map, Value};
use std::collections::HashSet;

/// Per-write facts about the selections in a composition
pub(super) struct SelectionContext {
    version: VegaLiteVersion,
    /// Selections whose empty state matches nothing
    empty_none: HashSet<String>,
}

impl SelectionContext {
    pub(super) fn new(spec: &ChartSpec, version: VegaLiteVersion) -> Self {
        let empty_none = spec
            .selections()
            .into_iter()
            .filter(|s| s.empty == EmptyBehavior::None)
            .map(|s| s.name.clone())
            .collect();
        Self {
            version,
            empty_none,
        }
    }

    fn reference(&self, name: &str) -> Map<String, Value> {
        let mut map = Map::new();
        match self.version {
            VegaLiteVersion::V2 => {
                map.insert("selection".to_string(), json!(name));
            }
            VegaLiteVersion::V5 => {
                map.insert("param".to_string(), json!(name));
                if self.empty_none.contains(name) {
                    map.insert("empty".to_string(), json!(false));
                }
            }
        }
        map
    }
}

fn kind_name(kind: SelectionKind, version: VegaLiteVersion) -> &'static str {
    match (version, kind) {
        (_, SelectionKind::Interval) => "interval",
        (VegaLiteVersion::V2, SelectionKind::Multi) => "multi",
        (VegaLiteVersion::V2, SelectionKind::Single) => "single",
        (VegaLiteVersion::V5, SelectionKind::Multi | SelectionKind::Single) => "point",
    }
}

/// Projection and event options shared by both versions
fn selection_options(selection: &Selection, map: &mut Map<String, Value>) {
    if !selection.encodings.is_empty() {
        let encodings: Vec<&str> = selection.encodings.iter().map(|c| c.as_str()).collect();
        map.insert("encodings".to_string(), json!(encodings));
    }
    if !selection.fields.is_empty() {
        map.insert("fields".to_string(), json!(selection.fields));
    }
    if let Some(on) = &selection.on {
        map.insert("on".to_string(), json!(on));
    }
    if let Some(clear) = &selection.clear {
        map.insert("clear".to_string(), json!(clear));
    }
}

/// Declaration of a view's selections: the property key and its value
pub(super) fn selection_declarations(
    selections: &[Selection],
    version: VegaLiteVersion,
) -> Option<(&'static str, Value)> {
    if selections.is_empty() {
        return None;
    }

    match version {
        VegaLiteVersion::V2 => {
            let mut defs = Map::new();
            for selection in selections {
                let mut def = Map::new();
                def.insert(
                    "type".to_string(),
                    json!(kind_name(selection.kind, version)),
                );
                selection_options(selection, &mut def);
                if selection.empty == EmptyBehavior::None {
                    def.insert("empty".to_string(), json!("none"));
                }
                if selection.bind_scales {
                    def.insert("bind".to_string(), json!("scales"));
                }
                defs.insert(selection.name.clone(), Value::Object(def));
            }
            Some(("selection", Value::Object(defs)))
        }
        VegaLiteVersion::V5 => {
            let params: Vec<Value> = selections
                .iter()
                .map(|selection| {
                    let mut select = Map::new();
                    select.insert(
                        "type".to_string(),
                        json!(kind_name(selection.kind, version)),
                    );
                    selection_options(selection, &mut select);
                    if selection.kind == SelectionKind::Single {
                        select.insert("toggle".to_string(), json!(false));
                    }

                    let mut param = Map::new();
                    param.insert("name".to_string(), json!(selection.name));
                    param.insert("select".to_string(), Value::Object(select));
                    if selection.bind_scales {
                        param.insert("bind".to_string(), json!("scales"));
                    }
                    Value::Object(param)
                })
                .collect();
            Some(("params", json!(params)))
        }
    }
}

/// Predicate in filter form (`{"filter": <this>}`)
pub(super) fn predicate_to_json(predicate: &Predicate, ctx: &SelectionContext) -> Value {
    match predicate {
        Predicate::Selection(name) => Value::Object(ctx.reference(name)),
        Predicate::And(operands) => json!({
            "and": operands.iter().map(|p| predicate_to_json(p, ctx)).collect::<Vec<_>>()
        }),
        Predicate::Or(operands) => json!({
            "or": operands.iter().map(|p| predicate_to_json(p, ctx)).collect::<Vec<_>>()
        }),
        Predicate::Not(inner) => json!({"not": predicate_to_json(inner, ctx)}),
        Predicate::Expr(expr) => json!(expr),
        Predicate::FieldEqual { field, equal } => json!({
            "field": field,
            "equal": equal.to_json(),
        }),
        Predicate::FieldOneOf { field, one_of } => json!({
            "field": field,
            "oneOf": one_of.iter().map(|v| v.to_json()).collect::<Vec<_>>(),
        }),
        Predicate::FieldRange { field, range } => json!({
            "field": field,
            "range": [
                crate::plot::types::number_to_json(range[0]),
                crate::plot::types::number_to_json(range[1]),
            ],
        }),
    }
}

/// v2 selection composition: names combined with and/or/not
fn selection_composition(predicate: &Predicate) -> Value {
    match predicate {
        Predicate::Selection(name) => json!(name),
        Predicate::And(operands) => json!({
            "and": operands.iter().map(selection_composition).collect::<Vec<_>>()
        }),
        Predicate::Or(operands) => json!({
            "or": operands.iter().map(selection_composition).collect::<Vec<_>>()
        }),
        Predicate::Not(inner) => json!({"not": selection_composition(inner)}),
        _ => Value::Null,
    }
}

/// Keys identifying the predicate inside a `condition` object
pub(super) fn condition_test(predicate: &Predicate, ctx: &SelectionContext) -> Map<String, Value> {
    if let Predicate::Selection(name) = predicate {
        return ctx.reference(name);
    }

    let mut map = Map::new();
    if ctx.version == VegaLiteVersion::V2 && predicate.is_selection_only() {
        map.insert("selection".to_string(), selection_composition(predicate));
    } else {
        map.insert("test".to_string(), predicate_to_json(predicate, ctx));
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::{Channel, Chart};

    fn ctx_for(selections: Vec<Selection>, version: VegaLiteVersion) -> SelectionContext {
        let chart = selections
            .into_iter()
            .fold(Chart::new(), |chart, s| chart.select(s));
        SelectionContext::new(&ChartSpec::from(chart), version)
    }

    #[test]
    fn test_v2_declarations() {
        let selections = vec![
            Selection::interval().name("brush").encodings([Channel::X]),
            Selection::multi()
                .name("click")
                .encodings([Channel::Color])
                .empty(EmptyBehavior::None),
        ];
        let (key, value) = selection_declarations(&selections, VegaLiteVersion::V2).unwrap();
        assert_eq!(key, "selection");
        assert_eq!(
            value,
            json!({
                "brush": {"type": "interval", "encodings": ["x"]},
                "click": {"type": "multi", "encodings": ["color"], "empty": "none"}
            })
        );
    }

    #[test]
    fn test_v5_declarations() {
        let selections = vec![
            Selection::interval().name("zoom").bind_scales(),
            Selection::single()
                .name("pick")
                .fields(["weather"])
                .on("mouseover"),
        ];
        let (key, value) = selection_declarations(&selections, VegaLiteVersion::V5).unwrap();
        assert_eq!(key, "params");
        assert_eq!(
            value,
            json!([
                {"name": "zoom", "select": {"type": "interval"}, "bind": "scales"},
                {"name": "pick", "select": {
                    "type": "point", "fields": ["weather"], "on": "mouseover", "toggle": false
                }}
            ])
        );
    }

    #[test]
    fn test_no_selections_no_declaration() {
        assert!(selection_declarations(&[], VegaLiteVersion::V5).is_none());
    }

    #[test]
    fn test_v5_empty_none_moves_to_reference() {
        let click = Selection::multi().name("click").empty(EmptyBehavior::None);
        let ctx = ctx_for(vec![click.clone()], VegaLiteVersion::V5);
        assert_eq!(
            predicate_to_json(&click.predicate(), &ctx),
            json!({"param": "click", "empty": false})
        );
    }

    #[test]
    fn test_field_predicates() {
        let ctx = ctx_for(vec![], VegaLiteVersion::V5);
        assert_eq!(
            predicate_to_json(&Predicate::field_range("temp_max", -5.0, 40.5), &ctx),
            json!({"field": "temp_max", "range": [-5, 40.5]})
        );
        assert_eq!(
            predicate_to_json(&!Predicate::field_equal("weather", "sun"), &ctx),
            json!({"not": {"field": "weather", "equal": "sun"}})
        );
        assert_eq!(
            predicate_to_json(&Predicate::expr("datum.wind > 3"), &ctx),
            json!("datum.wind > 3")
        );
    }

    #[test]
    fn test_condition_test_forms() {
        let pred = Predicate::selection("brush") & Predicate::selection("click");

        let v2 = ctx_for(vec![], VegaLiteVersion::V2);
        assert_eq!(
            Value::Object(condition_test(&pred, &v2)),
            json!({"selection": {"and": ["brush", "click"]}})
        );

        let v5 = ctx_for(vec![], VegaLiteVersion::V5);
        assert_eq!(
            Value::Object(condition_test(&pred, &v5)),
            json!({"test": {"and": [{"param": "brush"}, {"param": "click"}]}})
        );

        let mixed = Predicate::selection("brush") | Predicate::expr("datum.x > 0");
        assert_eq!(
            Value::Object(condition_test(&mixed, &v2)),
            json!({"test": {"or": [{"selection": "brush"}, "datum.x > 0"]}})
        );
    }
}

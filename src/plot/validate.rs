//! Structural validation of chart specifications
//!
//! Checks the rules a composition must satisfy before it can be written:
//! selection names are unique and every referenced selection is defined,
//! every view has a mark and data, and guides sit on matching channels.
//! Literal numbers must be finite and color literals must be valid CSS colors.

use super::chart::{Chart, ChartSpec};
use super::data::Transform;
use super::encoding::{Channel, ChannelDef, FieldChannel};
use super::mark::Mark;
use super::predicate::Predicate;
use super::scale::Scale;
use super::selection::SelectionKind;
use super::types::{ArrayElement, LiteralValue};
use crate::{Result, VlChartError};
use std::collections::HashSet;
use tracing::debug;

fn invalid(msg: String) -> VlChartError {
    VlChartError::ValidationError(msg)
}

impl ChartSpec {
    /// Validate the whole composition
    pub fn validate(&self) -> Result<()> {
        let defined = collect_selection_names(self)?;
        debug!(selections = defined.len(), "Collected selections");
        validate_view(self, &defined, false, "view")
    }
}

fn collect_selection_names(spec: &ChartSpec) -> Result<HashSet<String>> {
    let mut names = HashSet::new();
    for selection in spec.selections() {
        if !names.insert(selection.name.clone()) {
            return Err(invalid(format!(
                "Selection '{}' is defined more than once",
                selection.name
            )));
        }
    }
    Ok(names)
}

fn validate_view(
    spec: &ChartSpec,
    defined: &HashSet<String>,
    inherits_data: bool,
    path: &str,
) -> Result<()> {
    match spec {
        ChartSpec::Unit(chart) => validate_unit(chart, defined, inherits_data, path),
        ChartSpec::Concat(concat) => {
            let key = concat.direction.as_str();
            if concat.charts.is_empty() {
                return Err(invalid(format!("{}: {} has no views", path, key)));
            }
            let has_data = inherits_data || concat.data.is_some();
            for (idx, child) in concat.charts.iter().enumerate() {
                let child_path = format!("{}.{}[{}]", path, key, idx);
                validate_view(child, defined, has_data, &child_path)?;
            }
            Ok(())
        }
    }
}

fn validate_unit(
    chart: &Chart,
    defined: &HashSet<String>,
    inherits_data: bool,
    path: &str,
) -> Result<()> {
    let mark = chart
        .mark
        .as_ref()
        .ok_or_else(|| invalid(format!("{}: view has no mark", path)))?;
    validate_mark(mark, path)?;
    if !inherits_data && chart.data.is_none() {
        return Err(invalid(format!(
            "{}: view has no data and none is inherited from an enclosing chart",
            path
        )));
    }

    for selection in &chart.selections {
        if selection.kind != SelectionKind::Single {
            for channel in &selection.encodings {
                if !chart.encoding.contains_key(channel) {
                    return Err(invalid(format!(
                        "{}: selection '{}' projects over channel '{}' which is not encoded",
                        path, selection.name, channel
                    )));
                }
            }
        }
        if selection.bind_scales && selection.kind != SelectionKind::Interval {
            return Err(invalid(format!(
                "{}: only interval selections can be bound to scales ('{}')",
                path, selection.name
            )));
        }
    }

    for transform in &chart.transforms {
        if let Transform::Filter(predicate) = transform {
            check_predicate(predicate, defined, path)?;
        }
    }

    for (channel, def) in &chart.encoding {
        validate_channel_def(*channel, def, defined, path, false)?;
    }

    Ok(())
}

fn validate_mark(mark: &Mark, path: &str) -> Result<()> {
    if let Some(opacity) = mark.opacity {
        check_finite(opacity, "mark", path)?;
    }
    if let Some(size) = mark.size {
        check_finite(size, "mark", path)?;
    }
    if let Some(color) = &mark.color {
        check_color(color, "mark", path)?;
    }
    Ok(())
}

/// Selection references must resolve and literal numbers must be finite
fn check_predicate(predicate: &Predicate, defined: &HashSet<String>, path: &str) -> Result<()> {
    for name in predicate.selection_names() {
        if !defined.contains(name) {
            return Err(invalid(format!(
                "{}: selection '{}' is referenced but never defined",
                path, name
            )));
        }
    }
    check_predicate_numbers(predicate, path)
}

fn check_predicate_numbers(predicate: &Predicate, path: &str) -> Result<()> {
    match predicate {
        Predicate::And(operands) | Predicate::Or(operands) => {
            for operand in operands {
                check_predicate_numbers(operand, path)?;
            }
            Ok(())
        }
        Predicate::Not(inner) => check_predicate_numbers(inner, path),
        Predicate::FieldEqual { field, equal } => {
            let location = format!("predicate on field '{}'", field);
            check_finite_element(equal, &location, path)
        }
        Predicate::FieldOneOf { field, one_of } => {
            let location = format!("predicate on field '{}'", field);
            for elem in one_of {
                check_finite_element(elem, &location, path)?;
            }
            Ok(())
        }
        Predicate::FieldRange { field, range } => {
            let location = format!("predicate on field '{}'", field);
            for bound in range {
                check_finite(*bound, &location, path)?;
            }
            Ok(())
        }
        Predicate::Selection(_) | Predicate::Expr(_) => Ok(()),
    }
}

fn validate_channel_def(
    channel: Channel,
    def: &ChannelDef,
    defined: &HashSet<String>,
    path: &str,
    in_condition: bool,
) -> Result<()> {
    match def {
        ChannelDef::Field(field) => validate_field_channel(channel, field, path),
        ChannelDef::Value(value) => validate_literal(channel, value, path),
        ChannelDef::Condition {
            predicate,
            if_true,
            if_false,
        } => {
            if in_condition {
                return Err(invalid(format!(
                    "{}: nested condition on channel '{}'",
                    path, channel
                )));
            }
            check_predicate(predicate, defined, path)?;
            if if_true.is_field() && if_false.is_field() {
                return Err(invalid(format!(
                    "{}: condition on channel '{}' needs a value on at least one branch",
                    path, channel
                )));
            }
            validate_channel_def(channel, if_true, defined, path, true)?;
            validate_channel_def(channel, if_false, defined, path, true)
        }
    }
}

fn validate_field_channel(channel: Channel, field: &FieldChannel, path: &str) -> Result<()> {
    if field.def.resolved_type().is_none() {
        return Err(invalid(format!(
            "{}: field '{}' on channel '{}' has no type (use shorthand like '{}:Q')",
            path,
            field.def.label(),
            channel,
            field.def.label()
        )));
    }
    if field.axis.is_some() && !channel.is_positional() {
        return Err(invalid(format!(
            "{}: axis set on non-positional channel '{}'",
            path, channel
        )));
    }
    if field.legend.is_some() && channel.is_positional() {
        return Err(invalid(format!(
            "{}: legend set on positional channel '{}'",
            path, channel
        )));
    }
    if let Some(scale) = &field.scale {
        validate_scale(channel, scale, path)?;
    }
    Ok(())
}

fn validate_scale(channel: Channel, scale: &Scale, path: &str) -> Result<()> {
    let location = format!("scale of channel '{}'", channel);
    if let Some(domain) = &scale.domain {
        if domain.is_empty() {
            return Err(invalid(format!(
                "{}: empty scale domain on channel '{}'",
                path, channel
            )));
        }
        // Domains of color channels hold categories, not colors
        for elem in domain {
            check_finite_element(elem, &location, path)?;
        }
    }
    if let Some(range) = &scale.range {
        if range.is_empty() {
            return Err(invalid(format!(
                "{}: empty scale range on channel '{}'",
                path, channel
            )));
        }
        for elem in range {
            check_element(channel, elem, &location, path)?;
        }
    }
    Ok(())
}

fn validate_literal(channel: Channel, value: &LiteralValue, path: &str) -> Result<()> {
    let location = format!("value of channel '{}'", channel);
    match value {
        LiteralValue::Scalar(elem) => check_element(channel, elem, &location, path),
        LiteralValue::Array(elems) => {
            for elem in elems {
                check_element(channel, elem, &location, path)?;
            }
            Ok(())
        }
        LiteralValue::Null => Ok(()),
    }
}

fn check_element(channel: Channel, elem: &ArrayElement, location: &str, path: &str) -> Result<()> {
    match elem {
        ArrayElement::Number(n) => check_finite(*n, location, path),
        ArrayElement::String(color) if channel.is_color() => check_color(color, location, path),
        _ => Ok(()),
    }
}

fn check_finite_element(elem: &ArrayElement, location: &str, path: &str) -> Result<()> {
    match elem {
        ArrayElement::Number(n) => check_finite(*n, location, path),
        _ => Ok(()),
    }
}

/// Vega-Lite JSON has no NaN or infinity
fn check_finite(number: f64, location: &str, path: &str) -> Result<()> {
    if number.is_finite() {
        return Ok(());
    }
    Err(invalid(format!(
        "{}: {} in {} is not a finite number",
        path, number, location
    )))
}

fn check_color(color: &str, location: &str, path: &str) -> Result<()> {
    csscolorparser::parse(color).map(|_| ()).map_err(|e| {
        invalid(format!(
            "{}: '{}' in {} is not a valid CSS color: {}",
            path, color, location, e
        ))
    })
}

#[cfg(test)]
mod tests {
    use crate::plot::*;

    fn point_chart() -> Chart {
        Chart::new()
            .mark_point()
            .encode(Channel::X, FieldChannel::new("date:T").unwrap())
            .encode(Channel::Y, FieldChannel::new("temp_max:Q").unwrap())
    }

    fn err_of(spec: impl Into<ChartSpec>) -> String {
        spec.into().validate().unwrap_err().to_string()
    }

    #[test]
    fn test_valid_linked_views() {
        let brush = Selection::interval().name("brush").encodings([Channel::X]);
        let top = point_chart().select(brush.clone());
        let bottom = Chart::new()
            .mark_bar()
            .encode(Channel::X, FieldChannel::new("count()").unwrap())
            .transform_filter(&brush);
        let spec = ChartSpec::from(vconcat([top, bottom]).data_url("weather.csv"));
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_undefined_selection_reference() {
        let chart = point_chart()
            .data_url("weather.csv")
            .transform_filter(Predicate::selection("missing"));
        let err = err_of(chart);
        assert!(err.contains("'missing'"));
        assert!(err.contains("never defined"));
    }

    #[test]
    fn test_undefined_selection_in_condition() {
        let chart = point_chart().data_url("weather.csv").encode(
            Channel::Color,
            condition(Predicate::selection("nope"), value("red"), value("gray")),
        );
        assert!(err_of(chart).contains("never defined"));
    }

    #[test]
    fn test_duplicate_selection_names() {
        let top = point_chart().select(Selection::interval().name("s"));
        let bottom = point_chart().select(Selection::single().name("s"));
        let err = err_of(vconcat([top, bottom]).data_url("weather.csv"));
        assert!(err.contains("more than once"));
    }

    #[test]
    fn test_missing_mark_and_data() {
        assert!(err_of(Chart::new().data_url("x.csv")).contains("no mark"));
        assert!(err_of(point_chart()).contains("no data"));
    }

    #[test]
    fn test_data_inherited_from_concat() {
        let spec = ChartSpec::from(vconcat([point_chart()]).data_url("x.csv"));
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_empty_concat() {
        let spec = ChartSpec::from(vconcat(Vec::<Chart>::new()).data_url("x.csv"));
        let err = spec.validate().unwrap_err().to_string();
        assert!(err.contains("no views"));
    }

    #[test]
    fn test_projection_must_be_encoded() {
        let chart = point_chart()
            .data_url("x.csv")
            .select(Selection::multi().name("click").encodings([Channel::Color]));
        let err = err_of(chart);
        assert!(err.contains("'click'"));
        assert!(err.contains("'color'"));
    }

    #[test]
    fn test_untyped_field_rejected() {
        let chart = Chart::new()
            .mark_point()
            .data_url("x.csv")
            .encode(Channel::X, FieldChannel::new("precipitation").unwrap());
        assert!(err_of(chart).contains("has no type"));
    }

    #[test]
    fn test_guide_on_wrong_channel() {
        let chart = point_chart().data_url("x.csv").encode(
            Channel::Size,
            FieldChannel::new("precipitation:Q")
                .unwrap()
                .axis(Axis::new()),
        );
        assert!(err_of(chart).contains("axis set on non-positional"));

        let chart = point_chart().data_url("x.csv").encode(
            Channel::Y,
            FieldChannel::new("temp_max:Q")
                .unwrap()
                .legend(Legend::new()),
        );
        assert!(err_of(chart).contains("legend set on positional"));
    }

    #[test]
    fn test_invalid_colors() {
        let chart = point_chart()
            .data_url("x.csv")
            .encode(Channel::Color, value("not-a-color"));
        assert!(err_of(chart).contains("not a valid CSS color"));

        let chart = point_chart().data_url("x.csv").encode(
            Channel::Color,
            FieldChannel::new("weather:N")
                .unwrap()
                .scale(Scale::new().range(["#e7ba52", "#zzzzzz"])),
        );
        assert!(err_of(chart).contains("#zzzzzz"));

        let chart = point_chart()
            .data_url("x.csv")
            .encode(Channel::Color, value("lightgray"));
        assert!(ChartSpec::from(chart).validate().is_ok());
    }

    #[test]
    fn test_empty_scale_domain() {
        let chart = point_chart().data_url("x.csv").encode(
            Channel::Y,
            FieldChannel::new("temp_max:Q")
                .unwrap()
                .scale(Scale::new().domain(Vec::<f64>::new())),
        );
        assert!(err_of(chart).contains("empty scale domain"));
    }

    #[test]
    fn test_empty_scale_range() {
        let chart = point_chart().data_url("x.csv").encode(
            Channel::Color,
            FieldChannel::new("weather:N")
                .unwrap()
                .scale(Scale::new().range(Vec::<&str>::new())),
        );
        let err = err_of(chart);
        assert!(err.contains("empty scale range on channel 'color'"));
    }

    #[test]
    fn test_color_domain_holds_categories() {
        let scale = Scale::new()
            .domain(["sun", "fog"])
            .range(["#e7ba52", "#c7c7c7"]);
        let chart = point_chart().data_url("x.csv").encode(
            Channel::Color,
            FieldChannel::new("weather:N").unwrap().scale(scale),
        );
        assert!(ChartSpec::from(chart).validate().is_ok());
    }

    #[test]
    fn test_invalid_color_on_condition_branch() {
        let brush = Selection::interval().name("brush").encodings([Channel::X]);
        let color = condition(&brush, value("notacolor"), value("gray"));
        let chart = point_chart()
            .data_url("x.csv")
            .select(brush.clone())
            .encode(Channel::Color, color);
        let err = err_of(chart);
        assert!(err.contains("'notacolor' in value of channel 'color'"));

        let color = condition(&brush, value("gray"), value("#12345g"));
        let chart = point_chart()
            .data_url("x.csv")
            .select(brush)
            .encode(Channel::Color, color);
        assert!(err_of(chart).contains("not a valid CSS color"));
    }

    #[test]
    fn test_mark_color_checked() {
        let chart = Chart::new()
            .mark(Mark::new(MarkType::Point).color("notacolor"))
            .data_url("x.csv");
        let err = err_of(chart);
        assert!(err.contains("'notacolor' in mark is not a valid CSS color"));

        let chart = Chart::new()
            .mark(Mark::new(MarkType::Point).color("steelblue"))
            .data_url("x.csv");
        assert!(ChartSpec::from(chart).validate().is_ok());
    }

    #[test]
    fn test_non_finite_numbers_rejected() {
        let chart = point_chart()
            .data_url("x.csv")
            .transform_filter(Predicate::field_range("a", f64::NAN, 1.0));
        let err = err_of(chart);
        assert!(err.contains("NaN in predicate on field 'a'"));
        assert!(err.contains("not a finite number"));

        let chart = point_chart()
            .data_url("x.csv")
            .encode(Channel::Size, value(f64::NAN));
        assert!(err_of(chart).contains("NaN in value of channel 'size'"));

        let chart = point_chart().data_url("x.csv").encode(
            Channel::Y,
            FieldChannel::new("temp_max:Q")
                .unwrap()
                .scale(Scale::new().domain([0.0, f64::INFINITY])),
        );
        assert!(err_of(chart).contains("inf in scale of channel 'y'"));

        let brush = Selection::interval().name("brush").encodings([Channel::X]);
        let pred = Predicate::from(&brush) & !Predicate::field_equal("b", f64::NEG_INFINITY);
        let chart = point_chart()
            .data_url("x.csv")
            .select(brush)
            .encode(Channel::Color, condition(pred, value("red"), value("gray")));
        assert!(err_of(chart).contains("-inf in predicate on field 'b'"));

        let chart = Chart::new()
            .mark(Mark::new(MarkType::Point).opacity(f64::INFINITY))
            .data_url("x.csv");
        assert!(err_of(chart).contains("inf in mark"));
    }

    #[test]
    fn test_condition_shape_rules() {
        let brush = Selection::interval().name("brush").encodings([Channel::X]);
        let both_fields = condition(
            &brush,
            FieldChannel::new("weather:N").unwrap(),
            FieldChannel::new("wind:Q").unwrap(),
        );
        let chart = point_chart()
            .data_url("x.csv")
            .select(brush.clone())
            .encode(Channel::Color, both_fields);
        assert!(err_of(chart).contains("needs a value"));

        let nested = condition(
            &brush,
            condition(&brush, value("red"), value("blue")),
            value("gray"),
        );
        let chart = point_chart()
            .data_url("x.csv")
            .select(brush)
            .encode(Channel::Color, nested);
        assert!(err_of(chart).contains("nested condition"));
    }

    #[test]
    fn test_bind_scales_requires_interval() {
        let chart = point_chart()
            .data_url("x.csv")
            .select(Selection::single().name("pick").bind_scales());
        assert!(err_of(chart).contains("bound to scales"));
    }
}

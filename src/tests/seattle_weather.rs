//! Snapshot tests for the Seattle Weather Interactive gallery chart

use serde_json::{json, Value};
use vlchart::gallery::seattle_weather_interactive;
use vlchart::plot::{ChartSpec, ConcatDirection, MarkType};
use vlchart::writer::{HtmlWriter, VegaLiteVersion, VegaLiteWriter, Writer};
use vlchart::DatasetRegistry;

const DATA_URL: &str = "https://vega.github.io/vega-datasets/data/seattle-weather.csv";

fn weather_scale() -> Value {
    json!({
        "domain": ["sun", "fog", "drizzle", "rain", "snow"],
        "range": ["#e7ba52", "#a7a7a7", "#aec7e8", "#1f77b4", "#9467bd"]
    })
}

fn build() -> ChartSpec {
    seattle_weather_interactive(&DatasetRegistry::default()).unwrap()
}

#[test]
fn test_model_structure() {
    let spec = build();
    let ChartSpec::Concat(concat) = &spec else {
        panic!("expected a concatenated chart");
    };
    assert_eq!(concat.direction, ConcatDirection::Vertical);
    assert_eq!(concat.charts.len(), 2);

    let units = spec.units();
    assert_eq!(
        units[0].mark.as_ref().map(|m| m.mark_type),
        Some(MarkType::Point)
    );
    assert_eq!(
        units[1].mark.as_ref().map(|m| m.mark_type),
        Some(MarkType::Bar)
    );

    let names: Vec<&str> = spec.selections().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["brush", "click"]);
    spec.validate().unwrap();
}

#[test]
fn test_vega_lite_v5_snapshot() {
    let actual = VegaLiteWriter::new().to_value(&build()).unwrap();

    let expected = json!({
        "$schema": "https://vega.github.io/schema/vega-lite/v5.json",
        "data": {"url": DATA_URL},
        "title": "Seattle Weather: 2012-2015",
        "vconcat": [
            {
                "mark": "point",
                "encoding": {
                    "x": {
                        "field": "date",
                        "type": "temporal",
                        "timeUnit": "monthdate",
                        "axis": {"title": "Date"}
                    },
                    "y": {
                        "field": "temp_max",
                        "type": "quantitative",
                        "axis": {"title": "Maximum Daily Temperature (C)"},
                        "scale": {"domain": [-5, 40]}
                    },
                    "color": {
                        "condition": {
                            "param": "brush",
                            "field": "weather",
                            "type": "nominal",
                            "scale": weather_scale()
                        },
                        "value": "lightgray"
                    },
                    "size": {
                        "field": "precipitation",
                        "type": "quantitative",
                        "scale": {"range": [5, 200]}
                    }
                },
                "params": [
                    {"name": "brush", "select": {"type": "interval", "encodings": ["x"]}}
                ],
                "transform": [{"filter": {"param": "click"}}],
                "width": 600,
                "height": 300
            },
            {
                "mark": "bar",
                "encoding": {
                    "x": {"aggregate": "count", "type": "quantitative"},
                    "y": {"field": "weather", "type": "nominal"},
                    "color": {
                        "condition": {
                            "param": "click",
                            "field": "weather",
                            "type": "nominal",
                            "scale": weather_scale()
                        },
                        "value": "lightgray"
                    }
                },
                "params": [
                    {"name": "click", "select": {"type": "point", "encodings": ["color"]}}
                ],
                "transform": [{"filter": {"param": "brush"}}],
                "width": 600
            }
        ]
    });

    assert_eq!(actual, expected);
}

#[test]
fn test_vega_lite_v2_selection_syntax() {
    let actual = VegaLiteWriter::with_version(VegaLiteVersion::V2)
        .to_value(&build())
        .unwrap();

    assert_eq!(
        actual["$schema"],
        "https://vega.github.io/schema/vega-lite/v2.json"
    );
    let top = &actual["vconcat"][0];
    let bottom = &actual["vconcat"][1];

    assert_eq!(
        top["selection"],
        json!({"brush": {"type": "interval", "encodings": ["x"]}})
    );
    assert_eq!(
        top["transform"],
        json!([{"filter": {"selection": "click"}}])
    );
    assert_eq!(top["encoding"]["color"]["condition"]["selection"], "brush");
    assert!(top.get("params").is_none());

    assert_eq!(
        bottom["selection"],
        json!({"click": {"type": "multi", "encodings": ["color"]}})
    );
    assert_eq!(
        bottom["transform"],
        json!([{"filter": {"selection": "brush"}}])
    );
    assert_eq!(
        bottom["encoding"]["color"]["condition"]["selection"],
        "click"
    );
}

#[test]
fn test_registry_base_url_flows_into_chart() {
    let registry = DatasetRegistry::new("http://localhost:8000/vega-datasets");
    let spec = seattle_weather_interactive(&registry).unwrap();
    let actual = VegaLiteWriter::new().to_value(&spec).unwrap();
    assert_eq!(
        actual["data"]["url"],
        "http://localhost:8000/vega-datasets/seattle-weather.csv"
    );
}

#[test]
fn test_pretty_json_and_html_output() {
    let spec = build();
    let json = VegaLiteWriter::new().write(&spec).unwrap();
    let reparsed: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(reparsed["title"], "Seattle Weather: 2012-2015");

    let html = HtmlWriter::default().write(&spec).unwrap();
    assert!(html.contains("Seattle Weather: 2012-2015"));
    assert!(html.contains(r#"<div id="vis"></div>"#));
}

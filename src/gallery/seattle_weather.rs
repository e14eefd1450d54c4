//! Seattle Weather Interactive
//!
//! An interactive look at Seattle weather over the course of the year. A
//! one-axis brush on the top panel shows the distribution of weather types
//! for a date range. Clicking weather types in the bottom panel filters the
//! scatter plot.

use crate::datasets::DatasetRegistry;
use crate::plot::{
    condition, value, vconcat, Axis, Channel, Chart, ChartSpec, FieldChannel, Scale, Selection,
    TimeUnit,
};
use crate::Result;

pub const TITLE: &str = "Seattle Weather: 2012-2015";

const WEATHER_TYPES: [&str; 5] = ["sun", "fog", "drizzle", "rain", "snow"];
const WEATHER_COLORS: [&str; 5] = ["#e7ba52", "#a7a7a7", "#aec7e8", "#1f77b4", "#9467bd"];
const UNSELECTED: &str = "lightgray";

pub fn seattle_weather_interactive(registry: &DatasetRegistry) -> Result<ChartSpec> {
    let scale = Scale::new().domain(WEATHER_TYPES).range(WEATHER_COLORS);
    let color = FieldChannel::new("weather:N")?.scale(scale);

    // brush is active on the top panel, click on the bottom panel
    let brush = Selection::interval().name("brush").encodings([Channel::X]);
    let click = Selection::multi().name("click").encodings([Channel::Color]);

    // Top panel is scatter plot of temperature vs time
    let points = Chart::new()
        .mark_point()
        .encode(
            Channel::X,
            FieldChannel::new("date:T")?
                .time_unit(TimeUnit::MonthDate)
                .axis(Axis::new().title("Date")),
        )
        .encode(
            Channel::Y,
            FieldChannel::new("temp_max:Q")?
                .axis(Axis::new().title("Maximum Daily Temperature (C)"))
                .scale(Scale::new().domain([-5, 40])),
        )
        .encode(
            Channel::Color,
            condition(&brush, color.clone(), value(UNSELECTED)),
        )
        .encode(
            Channel::Size,
            FieldChannel::new("precipitation:Q")?.scale(Scale::new().range([5, 200])),
        )
        .width(600)
        .height(300)
        .select(brush.clone())
        .transform_filter(&click);

    // Bottom panel is a bar chart of weather type
    let bars = Chart::new()
        .mark_bar()
        .encode(Channel::X, FieldChannel::new("count()")?)
        .encode(Channel::Y, FieldChannel::new("weather:N")?)
        .encode(Channel::Color, condition(&click, color, value(UNSELECTED)))
        .transform_filter(&brush)
        .width(600)
        .select(click);

    let chart = vconcat([points, bars])
        .data_url(registry.url("seattle_weather")?)
        .title(TITLE);

    Ok(chart.into())
}

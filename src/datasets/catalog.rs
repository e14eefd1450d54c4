//! Built-in catalogue of the vega-datasets collection

use crate::plot::DataFormat;

/// A catalogued dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetInfo {
    /// Canonical (dash-separated) name
    pub name: &'static str,
    /// File name relative to the registry base URL
    pub file: &'static str,
    pub format: DataFormat,
    pub description: &'static str,
}

const fn entry(
    name: &'static str,
    file: &'static str,
    format: DataFormat,
    description: &'static str,
) -> DatasetInfo {
    DatasetInfo {
        name,
        file,
        format,
        description,
    }
}

use DataFormat::{Csv, Json};

pub const CATALOG: &[DatasetInfo] = &[
    entry(
        "airports",
        "airports.csv",
        Csv,
        "US airports with locations",
    ),
    entry("anscombe", "anscombe.json", Json, "Anscombe's quartet"),
    entry(
        "barley",
        "barley.json",
        Json,
        "Barley yields in Minnesota, 1931-1932",
    ),
    entry(
        "burtin",
        "burtin.json",
        Json,
        "Antibiotic effectiveness (Burtin, 1951)",
    ),
    entry(
        "cars",
        "cars.json",
        Json,
        "Automobile specifications, 1970-1982",
    ),
    entry(
        "co2-concentration",
        "co2-concentration.csv",
        Csv,
        "Mauna Loa CO2 measurements",
    ),
    entry(
        "countries",
        "countries.json",
        Json,
        "Country life expectancy and fertility",
    ),
    entry("crimea", "crimea.json", Json, "Crimean War mortality"),
    entry(
        "disasters",
        "disasters.csv",
        Csv,
        "Global deaths from natural disasters",
    ),
    entry(
        "driving",
        "driving.json",
        Json,
        "Miles driven vs. gas prices",
    ),
    entry(
        "earthquakes",
        "earthquakes.json",
        Json,
        "USGS earthquake feed",
    ),
    entry(
        "flights-2k",
        "flights-2k.json",
        Json,
        "2,000 US domestic flights",
    ),
    entry(
        "gapminder",
        "gapminder.json",
        Json,
        "Gapminder country statistics",
    ),
    entry(
        "iowa-electricity",
        "iowa-electricity.csv",
        Csv,
        "Iowa electricity sources",
    ),
    entry("iris", "iris.json", Json, "Fisher's iris measurements"),
    entry(
        "jobs",
        "jobs.json",
        Json,
        "US occupations by sex, 1850-2000",
    ),
    entry(
        "la-riots",
        "la-riots.csv",
        Csv,
        "Deaths during the 1992 LA riots",
    ),
    entry("movies", "movies.json", Json, "Film grosses and ratings"),
    entry(
        "population",
        "population.json",
        Json,
        "US population by age and sex",
    ),
    entry(
        "seattle-weather",
        "seattle-weather.csv",
        Csv,
        "Daily Seattle weather, 2012-2015",
    ),
    entry(
        "sf-temps",
        "sf-temps.csv",
        Csv,
        "Hourly San Francisco temperatures",
    ),
    entry("sp500", "sp500.csv", Csv, "S&P 500 index prices"),
    entry(
        "stocks",
        "stocks.csv",
        Csv,
        "Monthly stock prices of five tech companies",
    ),
    entry(
        "unemployment-across-industries",
        "unemployment-across-industries.json",
        Json,
        "US unemployment by industry, 2000-2010",
    ),
    entry(
        "us-employment",
        "us-employment.csv",
        Csv,
        "US employment by sector",
    ),
    entry(
        "weather",
        "weather.csv",
        Csv,
        "Daily weather for Seattle and New York",
    ),
    entry(
        "wheat",
        "wheat.json",
        Json,
        "Wheat prices and wages (Playfair)",
    ),
    entry(
        "windvectors",
        "windvectors.csv",
        Csv,
        "Wind vectors over Northwestern Europe",
    ),
    entry("zipcodes", "zipcodes.csv", Csv, "US zip code locations"),
];

//! Example chart gallery
//!
//! Each example builds a complete chart against the dataset registry, so
//! the CLI can render it by name.

mod seattle_weather;

pub use seattle_weather::seattle_weather_interactive;

use crate::datasets::DatasetRegistry;
use crate::plot::ChartSpec;
use crate::{Result, VlChartError};
use std::fmt;

/// A named, buildable example chart
#[derive(Clone, Copy)]
pub struct Example {
    pub name: &'static str,
    pub title: &'static str,
    /// Gallery section, e.g. `interactive`
    pub category: &'static str,
    pub description: &'static str,
    pub build: fn(&DatasetRegistry) -> Result<ChartSpec>,
}

impl fmt::Debug for Example {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Example")
            .field("name", &self.name)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

const EXAMPLES: &[Example] = &[Example {
    name: "seattle_weather_interactive",
    title: "Seattle Weather Interactive",
    category: "interactive",
    description: "Temperature scatter with a date brush, linked to a bar chart of weather types",
    build: seattle_weather_interactive,
}];

/// All gallery examples
pub fn examples() -> &'static [Example] {
    EXAMPLES
}

/// Look up an example by name (`-` and `_` are interchangeable)
pub fn find(name: &str) -> Result<&'static Example> {
    let wanted = name.trim().replace('-', "_");
    EXAMPLES
        .iter()
        .find(|example| example.name == wanted)
        .ok_or_else(|| {
            let known: Vec<&str> = EXAMPLES.iter().map(|e| e.name).collect();
            VlChartError::GalleryError(format!(
                "Unknown example '{}' (available: {})",
                name,
                known.join(", ")
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_accepts_dashes() {
        let example = find("seattle-weather-interactive").unwrap();
        assert_eq!(example.name, "seattle_weather_interactive");
        assert_eq!(example.category, "interactive");
    }

    #[test]
    fn test_unknown_example_lists_available() {
        let err = find("nope").unwrap_err().to_string();
        assert!(err.contains("seattle_weather_interactive"));
    }

    #[test]
    fn test_every_example_builds_and_validates() {
        let registry = DatasetRegistry::default();
        for example in examples() {
            let spec = (example.build)(&registry).unwrap();
            spec.validate().unwrap();
        }
    }
}

//! Value types for chart specifications
//!
//! Field definitions (parsed from `"field:T"` shorthand), measurement types,
//! aggregates, time units and literal values.

use crate::{Result, VlChartError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::sync::OnceLock;

// =============================================================================
// Measurement types
// =============================================================================

/// Measurement type of an encoded field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Nominal,
    Ordinal,
    Quantitative,
    Temporal,
}

impl FieldType {
    /// Parse a shorthand type code (`N`, `O`, `Q`, `T`) or a full type name
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "N" | "nominal" => Some(FieldType::Nominal),
            "O" | "ordinal" => Some(FieldType::Ordinal),
            "Q" | "quantitative" => Some(FieldType::Quantitative),
            "T" | "temporal" => Some(FieldType::Temporal),
            _ => None,
        }
    }

    /// Vega-Lite name of the type
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Nominal => "nominal",
            FieldType::Ordinal => "ordinal",
            FieldType::Quantitative => "quantitative",
            FieldType::Temporal => "temporal",
        }
    }

    /// Single-letter shorthand code
    pub fn code(&self) -> char {
        match self {
            FieldType::Nominal => 'N',
            FieldType::Ordinal => 'O',
            FieldType::Quantitative => 'Q',
            FieldType::Temporal => 'T',
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Aggregates and time units
// =============================================================================

/// Aggregation operation applied to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregate {
    Count,
    Sum,
    Mean,
    Average,
    Median,
    Min,
    Max,
    Distinct,
    Variance,
    Stdev,
    Q1,
    Q3,
    Argmin,
    Argmax,
    Valid,
    Missing,
}

impl Aggregate {
    const ALL: &'static [Aggregate] = &[
        Aggregate::Count,
        Aggregate::Sum,
        Aggregate::Mean,
        Aggregate::Average,
        Aggregate::Median,
        Aggregate::Min,
        Aggregate::Max,
        Aggregate::Distinct,
        Aggregate::Variance,
        Aggregate::Stdev,
        Aggregate::Q1,
        Aggregate::Q3,
        Aggregate::Argmin,
        Aggregate::Argmax,
        Aggregate::Valid,
        Aggregate::Missing,
    ];

    /// Look up an aggregate by its Vega-Lite name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|agg| agg.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Aggregate::Count => "count",
            Aggregate::Sum => "sum",
            Aggregate::Mean => "mean",
            Aggregate::Average => "average",
            Aggregate::Median => "median",
            Aggregate::Min => "min",
            Aggregate::Max => "max",
            Aggregate::Distinct => "distinct",
            Aggregate::Variance => "variance",
            Aggregate::Stdev => "stdev",
            Aggregate::Q1 => "q1",
            Aggregate::Q3 => "q3",
            Aggregate::Argmin => "argmin",
            Aggregate::Argmax => "argmax",
            Aggregate::Valid => "valid",
            Aggregate::Missing => "missing",
        }
    }
}

/// Time unit used to discretize temporal fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Year,
    Quarter,
    Month,
    Date,
    Day,
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
    YearQuarter,
    YearMonth,
    YearMonthDate,
    QuarterMonth,
    MonthDate,
    HoursMinutes,
    HoursMinutesSeconds,
    MinutesSeconds,
}

impl TimeUnit {
    const ALL: &'static [TimeUnit] = &[
        TimeUnit::Year,
        TimeUnit::Quarter,
        TimeUnit::Month,
        TimeUnit::Date,
        TimeUnit::Day,
        TimeUnit::Hours,
        TimeUnit::Minutes,
        TimeUnit::Seconds,
        TimeUnit::Milliseconds,
        TimeUnit::YearQuarter,
        TimeUnit::YearMonth,
        TimeUnit::YearMonthDate,
        TimeUnit::QuarterMonth,
        TimeUnit::MonthDate,
        TimeUnit::HoursMinutes,
        TimeUnit::HoursMinutesSeconds,
        TimeUnit::MinutesSeconds,
    ];

    /// Look up a time unit by its Vega-Lite name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|unit| unit.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Year => "year",
            TimeUnit::Quarter => "quarter",
            TimeUnit::Month => "month",
            TimeUnit::Date => "date",
            TimeUnit::Day => "day",
            TimeUnit::Hours => "hours",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Seconds => "seconds",
            TimeUnit::Milliseconds => "milliseconds",
            TimeUnit::YearQuarter => "yearquarter",
            TimeUnit::YearMonth => "yearmonth",
            TimeUnit::YearMonthDate => "yearmonthdate",
            TimeUnit::QuarterMonth => "quartermonth",
            TimeUnit::MonthDate => "monthdate",
            TimeUnit::HoursMinutes => "hoursminutes",
            TimeUnit::HoursMinutesSeconds => "hoursminutesseconds",
            TimeUnit::MinutesSeconds => "minutesseconds",
        }
    }
}

// =============================================================================
// Field definitions
// =============================================================================

/// A reference to a data field, optionally aggregated or time-binned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field name (None only for `count()`)
    pub field: Option<String>,
    /// Measurement type (None means not yet specified)
    pub field_type: Option<FieldType>,
    pub aggregate: Option<Aggregate>,
    pub time_unit: Option<TimeUnit>,
}

/// `op(inner):type` or `bare:type`, the type suffix being optional
const SHORTHAND_PATTERN: &str = concat!(
    r"^(?:(?P<op>[A-Za-z0-9_]+)\((?P<inner>[^()]*)\)|(?P<bare>[^:()]+))",
    r"(?::(?P<type>[A-Za-z]+))?$"
);

fn shorthand_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SHORTHAND_PATTERN).expect("shorthand regex"))
}

impl FieldDef {
    /// Create an untyped reference to a field
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            field: Some(name.into()),
            field_type: None,
            aggregate: None,
            time_unit: None,
        }
    }

    /// Parse encoding shorthand
    ///
    /// Accepted forms:
    /// - `name` / `name:T` - a field with an optional type code
    /// - `agg(name):Q` - an aggregated field (e.g. `mean(temp_max):Q`)
    /// - `unit(name):T` - a time-unit field (e.g. `month(date):T`)
    /// - `count()` - a field-less count, quantitative by default
    pub fn parse(shorthand: &str) -> Result<Self> {
        let trimmed = shorthand.trim();
        let caps = shorthand_regex().captures(trimmed).ok_or_else(|| {
            VlChartError::ParseError(format!("Invalid field shorthand '{}'", shorthand))
        })?;

        let field_type = match caps.name("type") {
            Some(code) => Some(FieldType::from_code(code.as_str()).ok_or_else(|| {
                VlChartError::ParseError(format!(
                    "Unknown type code '{}' in shorthand '{}' (expected N, O, Q or T)",
                    code.as_str(),
                    shorthand
                ))
            })?),
            None => None,
        };

        if let Some(bare) = caps.name("bare") {
            let name = bare.as_str().trim();
            if name.is_empty() {
                return Err(VlChartError::ParseError(format!(
                    "Empty field name in shorthand '{}'",
                    shorthand
                )));
            }
            return Ok(Self {
                field: Some(name.to_string()),
                field_type,
                aggregate: None,
                time_unit: None,
            });
        }

        // Function form: op(inner)
        let op = caps.name("op").map(|m| m.as_str()).unwrap_or_default();
        let inner = caps
            .name("inner")
            .map(|m| m.as_str().trim())
            .unwrap_or_default();
        let field = (!inner.is_empty()).then(|| inner.to_string());

        if let Some(aggregate) = Aggregate::from_name(op) {
            if field.is_none() && aggregate != Aggregate::Count {
                return Err(VlChartError::ParseError(format!(
                    "Aggregate '{}' requires a field in shorthand '{}'",
                    op, shorthand
                )));
            }
            let field_type = match (field_type, aggregate) {
                (None, Aggregate::Count) => Some(FieldType::Quantitative),
                (t, _) => t,
            };
            return Ok(Self {
                field,
                field_type,
                aggregate: Some(aggregate),
                time_unit: None,
            });
        }

        if let Some(time_unit) = TimeUnit::from_name(op) {
            let field = field.ok_or_else(|| {
                VlChartError::ParseError(format!(
                    "Time unit '{}' requires a field in shorthand '{}'",
                    op, shorthand
                ))
            })?;
            return Ok(Self {
                field: Some(field),
                field_type,
                aggregate: None,
                time_unit: Some(time_unit),
            });
        }

        Err(VlChartError::ParseError(format!(
            "Unknown aggregate or time unit '{}' in shorthand '{}'",
            op, shorthand
        )))
    }

    /// Resolved measurement type: explicit type, or quantitative for a bare count
    pub fn resolved_type(&self) -> Option<FieldType> {
        self.field_type.or(match self.aggregate {
            Some(Aggregate::Count) => Some(FieldType::Quantitative),
            _ => None,
        })
    }

    /// Human-readable label used in error messages
    pub fn label(&self) -> String {
        match (&self.aggregate, &self.field) {
            (Some(agg), Some(field)) => format!("{}({})", agg.as_str(), field),
            (Some(agg), None) => format!("{}()", agg.as_str()),
            (None, Some(field)) => field.clone(),
            (None, None) => "<none>".to_string(),
        }
    }
}

// =============================================================================
// Literal values
// =============================================================================

/// Scalar literal used in scale domains/ranges and predicates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArrayElement {
    String(String),
    Number(f64),
    Boolean(bool),
}

impl ArrayElement {
    /// Convert to JSON, emitting whole numbers as integers
    pub fn to_json(&self) -> Value {
        match self {
            ArrayElement::String(s) => json!(s),
            ArrayElement::Number(n) => number_to_json(*n),
            ArrayElement::Boolean(b) => json!(b),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArrayElement::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Integral floats within the exactly-representable range become JSON integers
pub(crate) fn number_to_json(n: f64) -> Value {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    if n.is_finite() && n.fract() == 0.0 && n.abs() < MAX_EXACT {
        json!(n as i64)
    } else {
        json!(n)
    }
}

impl From<&str> for ArrayElement {
    fn from(s: &str) -> Self {
        ArrayElement::String(s.to_string())
    }
}

impl From<String> for ArrayElement {
    fn from(s: String) -> Self {
        ArrayElement::String(s)
    }
}

impl From<f64> for ArrayElement {
    fn from(n: f64) -> Self {
        ArrayElement::Number(n)
    }
}

impl From<i32> for ArrayElement {
    fn from(n: i32) -> Self {
        ArrayElement::Number(n.into())
    }
}

impl From<bool> for ArrayElement {
    fn from(b: bool) -> Self {
        ArrayElement::Boolean(b)
    }
}

/// Literal value for `value` channel definitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    Scalar(ArrayElement),
    Array(Vec<ArrayElement>),
    Null,
}

impl LiteralValue {
    pub fn to_json(&self) -> Value {
        match self {
            LiteralValue::Scalar(elem) => elem.to_json(),
            LiteralValue::Array(items) => {
                Value::Array(items.iter().map(ArrayElement::to_json).collect())
            }
            LiteralValue::Null => Value::Null,
        }
    }
}

impl From<ArrayElement> for LiteralValue {
    fn from(elem: ArrayElement) -> Self {
        LiteralValue::Scalar(elem)
    }
}

macro_rules! literal_from_scalar {
    ($($t:ty),*) => {
        $(
            impl From<$t> for LiteralValue {
                fn from(value: $t) -> Self {
                    LiteralValue::Scalar(value.into())
                }
            }
        )*
    };
}

literal_from_scalar!(&str, String, f64, i32, bool);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_typed_field() {
        let def = FieldDef::parse("date:T").unwrap();
        assert_eq!(def.field.as_deref(), Some("date"));
        assert_eq!(def.field_type, Some(FieldType::Temporal));
        assert_eq!(def.aggregate, None);
        assert_eq!(def.time_unit, None);
    }

    #[test]
    fn test_parse_full_type_name() {
        let def = FieldDef::parse("weather:nominal").unwrap();
        assert_eq!(def.field_type, Some(FieldType::Nominal));
    }

    #[test]
    fn test_parse_count_without_field() {
        let def = FieldDef::parse("count()").unwrap();
        assert_eq!(def.field, None);
        assert_eq!(def.aggregate, Some(Aggregate::Count));
        assert_eq!(def.field_type, Some(FieldType::Quantitative));
    }

    #[test]
    fn test_parse_aggregate_over_field() {
        let def = FieldDef::parse("mean(temp_max):Q").unwrap();
        assert_eq!(def.field.as_deref(), Some("temp_max"));
        assert_eq!(def.aggregate, Some(Aggregate::Mean));
        assert_eq!(def.field_type, Some(FieldType::Quantitative));
    }

    #[test]
    fn test_parse_time_unit() {
        let def = FieldDef::parse("month(date):T").unwrap();
        assert_eq!(def.field.as_deref(), Some("date"));
        assert_eq!(def.time_unit, Some(TimeUnit::Month));
        assert_eq!(def.aggregate, None);
    }

    #[test]
    fn test_parse_untyped_field() {
        let def = FieldDef::parse("precipitation").unwrap();
        assert_eq!(def.field_type, None);
        assert_eq!(def.resolved_type(), None);
    }

    #[test]
    fn test_parse_errors() {
        let err = FieldDef::parse("date:X").unwrap_err();
        assert!(err.to_string().contains("Unknown type code"));

        let err = FieldDef::parse("frobnicate(date)").unwrap_err();
        assert!(err.to_string().contains("frobnicate"));

        let err = FieldDef::parse("mean()").unwrap_err();
        assert!(err.to_string().contains("requires a field"));

        assert!(FieldDef::parse("").is_err());
        assert!(FieldDef::parse(":Q").is_err());
    }

    #[test]
    fn test_whole_numbers_serialize_as_integers() {
        assert_eq!(ArrayElement::Number(-5.0).to_json(), json!(-5));
        assert_eq!(ArrayElement::Number(2.5).to_json(), json!(2.5));
        assert_eq!(ArrayElement::from("sun").to_json(), json!("sun"));
    }

    #[test]
    fn test_literal_value_array() {
        let value = LiteralValue::Array(vec![1.into(), 2.into()]);
        assert_eq!(value.to_json(), json!([1, 2]));
        assert_eq!(LiteralValue::Null.to_json(), Value::Null);
    }

    proptest! {
        #[test]
        fn prop_identifier_fields_keep_their_name(
            name in "[a-z_][a-z0-9_]{0,15}",
            code in "[NOQT]"
        ) {
            let def = FieldDef::parse(&format!("{}:{}", name, code)).unwrap();
            prop_assert_eq!(def.field.as_deref(), Some(name.as_str()));
            prop_assert_eq!(def.field_type.map(|t| t.code().to_string()), Some(code));
        }

        #[test]
        fn prop_parse_never_panics(input in "\\PC{0,24}") {
            let _ = FieldDef::parse(&input);
        }
    }
}

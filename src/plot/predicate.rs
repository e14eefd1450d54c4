//! Predicates used by filter transforms and conditional encodings
//!
//! A predicate is either a reference to a named selection or a data test.
//! Predicates compose with `&`, `|` and `!`:
//!
//! ```rust
//! use vlchart::plot::{Predicate, Selection};
//!
//! let brush = Selection::interval().name("brush");
//! let click = Selection::multi().name("click");
//! let both = brush.predicate() & click.predicate();
//! assert_eq!(both.selection_names(), vec!["brush", "click"]);
//! ```

use super::types::ArrayElement;
use serde::{Deserialize, Serialize};
use std::ops::{BitAnd, BitOr, Not};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Predicate {
    /// Holds for data points inside the named selection
    Selection(String),
    And(Vec<Predicate>),
    Or(Vec<Predicate>),
    Not(Box<Predicate>),
    /// Vega expression string, e.g. `datum.temp_max > 30`
    Expr(String),
    FieldEqual {
        field: String,
        equal: ArrayElement,
    },
    FieldOneOf {
        field: String,
        one_of: Vec<ArrayElement>,
    },
    FieldRange {
        field: String,
        range: [f64; 2],
    },
}

impl Predicate {
    /// Reference a selection by name
    pub fn selection(name: impl Into<String>) -> Self {
        Predicate::Selection(name.into())
    }

    pub fn expr(expr: impl Into<String>) -> Self {
        Predicate::Expr(expr.into())
    }

    pub fn field_equal(field: impl Into<String>, equal: impl Into<ArrayElement>) -> Self {
        Predicate::FieldEqual {
            field: field.into(),
            equal: equal.into(),
        }
    }

    pub fn field_one_of<I, T>(field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ArrayElement>,
    {
        Predicate::FieldOneOf {
            field: field.into(),
            one_of: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn field_range(field: impl Into<String>, min: f64, max: f64) -> Self {
        Predicate::FieldRange {
            field: field.into(),
            range: [min, max],
        }
    }

    /// Names of every selection referenced anywhere in this predicate, in order
    pub fn selection_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_selection_names(&mut names);
        names
    }

    fn collect_selection_names<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Predicate::Selection(name) => names.push(name),
            Predicate::And(operands) | Predicate::Or(operands) => {
                for operand in operands {
                    operand.collect_selection_names(names);
                }
            }
            Predicate::Not(inner) => inner.collect_selection_names(names),
            Predicate::Expr(_)
            | Predicate::FieldEqual { .. }
            | Predicate::FieldOneOf { .. }
            | Predicate::FieldRange { .. } => {}
        }
    }

    /// True when the predicate is built only from selection references
    pub fn is_selection_only(&self) -> bool {
        match self {
            Predicate::Selection(_) => true,
            Predicate::And(operands) | Predicate::Or(operands) => {
                operands.iter().all(Predicate::is_selection_only)
            }
            Predicate::Not(inner) => inner.is_selection_only(),
            _ => false,
        }
    }
}

impl BitAnd for Predicate {
    type Output = Predicate;

    fn bitand(self, rhs: Predicate) -> Predicate {
        match self {
            Predicate::And(mut operands) => {
                operands.push(rhs);
                Predicate::And(operands)
            }
            lhs => Predicate::And(vec![lhs, rhs]),
        }
    }
}

impl BitOr for Predicate {
    type Output = Predicate;

    fn bitor(self, rhs: Predicate) -> Predicate {
        match self {
            Predicate::Or(mut operands) => {
                operands.push(rhs);
                Predicate::Or(operands)
            }
            lhs => Predicate::Or(vec![lhs, rhs]),
        }
    }
}

impl Not for Predicate {
    type Output = Predicate;

    fn not(self) -> Predicate {
        match self {
            Predicate::Not(inner) => *inner,
            other => Predicate::Not(Box::new(other)),
        }
    }
}

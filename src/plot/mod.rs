//! Chart grammar for vlchart specifications
//!
//! This module contains the types that describe an interactive chart:
//! views, marks, encodings, scales, selections and data sources.
//!
//! # Architecture
//!
//! The module is organized into submodules:
//!
//! - `types` - Field shorthand, measurement types, aggregates and literals
//! - `scale` - Scales plus axis and legend guides
//! - `encoding` - Channels and channel definitions (field, value, condition)
//! - `selection` - Interval, multi and single selections
//! - `predicate` - Selection references and data tests
//! - `mark` - Mark types and properties
//! - `data` - Data sources and transforms
//! - `chart` - Unit views and concatenation
//! - `validate` - Structural validation of a composition

pub mod chart;
pub mod data;
pub mod encoding;
pub mod mark;
pub mod predicate;
pub mod scale;
pub mod selection;
pub mod types;
mod validate;

// Re-export all types for convenience
pub use chart::*;
pub use data::*;
pub use encoding::*;
pub use mark::*;
pub use predicate::*;
pub use scale::*;
pub use selection::*;
pub use types::*;

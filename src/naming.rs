//! Naming conventions for generated identifiers
//!
//! Selections that are not given an explicit name are numbered from a
//! process-wide counter, producing `selector001`, `selector002`, ...

use std::sync::atomic::{AtomicUsize, Ordering};

/// Prefix for automatically named selections
pub const SELECTION_PREFIX: &str = "selector";

static SELECTION_COUNTER: AtomicUsize = AtomicUsize::new(1);

/// Format the automatic name for the selection with the given index
pub fn selection_name(index: usize) -> String {
    format!("{}{:03}", SELECTION_PREFIX, index)
}

/// Allocate the next automatic selection name
pub fn next_selection_name() -> String {
    selection_name(SELECTION_COUNTER.fetch_add(1, Ordering::Relaxed))
}

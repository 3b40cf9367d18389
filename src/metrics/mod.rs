//! Metrics calculation module
//!
//! Line classification for the static engine and the metric identifiers
//! shared by the static and AI sides.

pub mod kind;
pub mod loc_counter;

pub use kind::MetricKind;
pub use loc_counter::{classify_line, count_loc, is_testable_line, LineType, LocCount, LocCounter};

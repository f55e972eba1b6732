//! Canonicalization and statistics for tagged rhythm-game charts.
//!
//! Raw charts arrive as JSON arrays of records tagged by `type`
//! (`Single`, `Directional`, `BPM`, `Slide`, legacy `Long`). [`normalize`]
//! turns them into a sorted, zero-anchored [`Chart`]; [`analyze`] derives
//! duration, note count, and BPM profile from it.

pub mod chart;
pub mod error;
pub mod note;
pub mod stats;

pub use chart::{Chart, normalize};
pub use error::{Error, Result};
pub use note::{
    Beat, BpmMarker, Connection, Direction, Directional, Note, Record, Single, Slide,
};
pub use stats::{Statistics, analyze};

//! Chart container and normalization.
//!
//! - `Chart` - ordered note sequence with wire-format conversion
//! - `normalize` - canonicalize raw records into a sorted, zero-anchored chart

mod normalize;

pub use normalize::*;

use serde_json::Value as JsonValue;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::note::{Note, Record};
use crate::stats::{Statistics, analyze};

/// Ordered sequence of notes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chart {
    notes: Vec<Note>,
}

impl Chart {
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    /// Build a chart from raw records without normalizing it.
    ///
    /// Unknown or malformed records are dropped.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        let mut dropped = 0usize;
        let notes = records
            .into_iter()
            .filter_map(|record| {
                let note = Note::from_record(record);
                if note.is_none() {
                    dropped += 1;
                }
                note
            })
            .collect::<Vec<_>>();

        if dropped > 0 {
            debug!("Dropped {} unusable records", dropped);
        }
        Self { notes }
    }

    /// Parse a JSON array of records and normalize it
    pub fn from_json(data: &str) -> Result<Self> {
        let value: JsonValue = serde_json::from_str(data)?;
        let JsonValue::Array(items) = value else {
            return Err(Error::InvalidChart(
                "expected a JSON array of note records".to_string(),
            ));
        };

        let records = items.into_iter().filter_map(|item| match item {
            JsonValue::Object(record) => Some(record),
            other => {
                warn!("Dropping non-object chart entry: {}", other);
                None
            }
        });
        normalize(records)
    }

    /// Canonicalize this chart. See [`normalize()`].
    pub fn normalize(self) -> Result<Self> {
        normalize::normalize_notes(self.notes)
    }

    /// Aggregate statistics. The chart must already be beat-ordered.
    pub fn analyze(&self) -> Statistics {
        analyze(self)
    }

    /// True if any slide has a hidden connection or any directional note exists
    pub fn is_sp_rhythm(&self) -> bool {
        self.notes.iter().any(|note| match note {
            Note::Slide(slide) => slide.has_hidden(),
            Note::Directional(_) => true,
            _ => false,
        })
    }

    pub fn to_records(&self) -> Vec<Record> {
        self.notes.iter().map(Note::to_record).collect()
    }

    /// Compact JSON of [`Chart::to_records`]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_records())?)
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn into_notes(self) -> Vec<Note> {
        self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }
}

impl IntoIterator for Chart {
    type Item = Note;
    type IntoIter = std::vec::IntoIter<Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.into_iter()
    }
}

impl<'a> IntoIterator for &'a Chart {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}

//! Wire-format conversion for notes.
//!
//! A record is a JSON object tagged by its `type` key. Parsing is lenient:
//! unknown types and malformed records are dropped rather than reported.
//! Serialization omits `false` flags on singles and connections, and the
//! top-level beat on slides.

use serde::Deserialize;
use serde_json::{Map, Value as JsonValue, json};
use tracing::{debug, warn};

use crate::note::{BpmMarker, Connection, Directional, Note, Single, Slide};

/// A raw tagged chart record
pub type Record = Map<String, JsonValue>;

pub const TYPE_KEY: &str = "type";

pub mod kind {
    pub const SINGLE: &str = "Single";
    pub const DIRECTIONAL: &str = "Directional";
    pub const BPM: &str = "BPM";
    pub const SLIDE: &str = "Slide";
    /// Legacy alias of `Slide`
    pub const LONG: &str = "Long";
}

#[derive(Deserialize)]
struct SlideRecord {
    connections: Vec<Connection>,
}

impl Note {
    /// Classify a raw record. Returns `None` when the record should be dropped.
    pub fn from_record(record: Record) -> Option<Self> {
        let Some(tag) = record.get(TYPE_KEY).and_then(JsonValue::as_str) else {
            debug!("Dropping record without a type tag");
            return None;
        };
        let tag = tag.to_owned();
        let value = JsonValue::Object(record);

        let parsed = match tag.as_str() {
            kind::SINGLE => serde_json::from_value::<Single>(value).map(Note::Single),
            kind::DIRECTIONAL => {
                serde_json::from_value::<Directional>(value).map(Note::Directional)
            }
            kind::BPM => serde_json::from_value::<BpmMarker>(value).map(Note::Bpm),
            kind::SLIDE | kind::LONG => match serde_json::from_value::<SlideRecord>(value) {
                Ok(slide) => match Slide::new(slide.connections) {
                    Some(slide) => Ok(Note::Slide(slide)),
                    None => {
                        warn!("Dropping {} record with no connections", tag);
                        return None;
                    }
                },
                Err(e) => Err(e),
            },
            other => {
                debug!("Dropping record of unsupported type {:?}", other);
                return None;
            }
        };

        match parsed {
            Ok(note) => Some(note),
            Err(e) => {
                warn!("Dropping malformed {} record: {}", tag, e);
                None
            }
        }
    }

    /// Serialize back to the compact wire format
    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        match self {
            Note::Single(single) => {
                record.insert("beat".into(), json!(single.beat));
                record.insert("lane".into(), lane_value(single.lane));
                record.insert(TYPE_KEY.into(), json!(kind::SINGLE));
                insert_flag(&mut record, "flick", single.flick);
                insert_flag(&mut record, "skill", single.skill);
            }
            Note::Directional(directional) => {
                record.insert("beat".into(), json!(directional.beat));
                record.insert("lane".into(), lane_value(directional.lane));
                record.insert(TYPE_KEY.into(), json!(kind::DIRECTIONAL));
                record.insert("width".into(), json!(directional.width));
                record.insert("direction".into(), json!(directional.direction.as_str()));
            }
            Note::Bpm(marker) => {
                record.insert("bpm".into(), json!(marker.bpm));
                record.insert("beat".into(), json!(marker.beat));
                record.insert(TYPE_KEY.into(), json!(kind::BPM));
            }
            Note::Slide(slide) => {
                let connections = slide
                    .connections()
                    .iter()
                    .map(|c| JsonValue::Object(c.to_record()))
                    .collect();
                record.insert(TYPE_KEY.into(), json!(kind::SLIDE));
                record.insert("connections".into(), JsonValue::Array(connections));
            }
        }
        record
    }
}

impl Connection {
    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert("beat".into(), json!(self.beat));
        record.insert("lane".into(), lane_value(self.lane));
        insert_flag(&mut record, "hidden", self.hidden);
        insert_flag(&mut record, "flick", self.flick);
        insert_flag(&mut record, "skill", self.skill);
        record
    }
}

/// Integral lanes are written as JSON integers.
fn lane_value(lane: f64) -> JsonValue {
    if lane.fract() == 0.0 && lane.abs() <= i64::MAX as f64 {
        json!(lane as i64)
    } else {
        json!(lane)
    }
}

fn insert_flag(record: &mut Record, key: &str, flag: bool) {
    if flag {
        record.insert(key.into(), JsonValue::Bool(true));
    }
}

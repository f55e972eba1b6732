//! Note model.
//!
//! This module contains the types for a single chart event:
//! - `Note` - tagged union over the four note kinds
//! - `Single`, `Directional`, `BpmMarker`, `Slide` / `Connection` - per-kind data
//! - `Record` - the raw JSON wire form, with parse and serialize helpers

mod record;
mod types;

pub use record::*;
pub use types::*;

/// One chart event
#[derive(Debug, Clone, PartialEq)]
pub enum Note {
    Single(Single),
    Directional(Directional),
    Bpm(BpmMarker),
    Slide(Slide),
}

impl Note {
    /// Timeline position. For slides this is the first connection's beat.
    pub fn beat(&self) -> Beat {
        match self {
            Note::Single(n) => n.beat,
            Note::Directional(n) => n.beat,
            Note::Bpm(n) => n.beat,
            Note::Slide(n) => n.beat(),
        }
    }

    /// Move the note along the timeline by `delta` beats
    pub fn shift(&mut self, delta: Beat) {
        match self {
            Note::Single(n) => n.beat += delta,
            Note::Directional(n) => n.beat += delta,
            Note::Bpm(n) => n.beat += delta,
            Note::Slide(n) => n.shift(delta),
        }
    }

    /// Wire tag written to the `type` key
    pub fn kind(&self) -> &'static str {
        match self {
            Note::Single(_) => kind::SINGLE,
            Note::Directional(_) => kind::DIRECTIONAL,
            Note::Bpm(_) => kind::BPM,
            Note::Slide(_) => kind::SLIDE,
        }
    }

    pub fn is_playable(&self) -> bool {
        !matches!(self, Note::Bpm(_))
    }

    pub fn is_bpm(&self) -> bool {
        matches!(self, Note::Bpm(_))
    }
}

impl From<Single> for Note {
    fn from(note: Single) -> Self {
        Note::Single(note)
    }
}

impl From<Directional> for Note {
    fn from(note: Directional) -> Self {
        Note::Directional(note)
    }
}

impl From<BpmMarker> for Note {
    fn from(note: BpmMarker) -> Self {
        Note::Bpm(note)
    }
}

impl From<Slide> for Note {
    fn from(note: Slide) -> Self {
        Note::Slide(note)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_slide() -> Note {
        Slide::new(vec![
            Connection {
                beat: 3.0,
                lane: 1.0,
                ..Default::default()
            },
            Connection {
                beat: 4.0,
                lane: 2.0,
                ..Default::default()
            },
        ])
        .map(Note::Slide)
        .unwrap()
    }

    #[test]
    fn test_note_beat_and_shift() {
        let mut single: Note = Single {
            beat: 2.0,
            lane: 0.0,
            ..Default::default()
        }
        .into();
        single.shift(-0.5);
        assert_eq!(single.beat(), 1.5);

        let mut slide = make_slide();
        assert_eq!(slide.beat(), 3.0);
        slide.shift(1.0);
        assert_eq!(slide.beat(), 4.0);
        match slide {
            Note::Slide(s) => assert_eq!(s.connections()[1].beat, 5.0),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_note_kind() {
        let bpm: Note = BpmMarker {
            beat: 0.0,
            bpm: 120.0,
        }
        .into();
        assert_eq!(bpm.kind(), "BPM");
        assert!(bpm.is_bpm());
        assert!(!bpm.is_playable());

        let slide = make_slide();
        assert_eq!(slide.kind(), "Slide");
        assert!(slide.is_playable());
    }
}

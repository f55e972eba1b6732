//! Chart statistics.
//!
//! - `Statistics` - duration, playable note count, BPM range, main BPM
//! - `analyze` - single forward pass over a normalized chart

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::chart::Chart;
use crate::note::{Beat, Note};

/// Analyzer constants.
pub mod defaults {
    /// Tempo assumed before the first effective BPM marker.
    pub const DEFAULT_BPM: f64 = 120.0;

    pub const SECONDS_PER_MINUTE: f64 = 60.0;
}

/// Aggregate metrics of a chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Playable length in seconds
    pub duration: f64,
    /// Playable note units (hidden slide connections excluded)
    pub notes: u32,
    /// `[min]` when the tempo never changes, otherwise `[min, max]`
    pub bpm: Vec<f64>,
    /// BPM held for the longest accumulated time
    pub main_bpm: f64,
}

impl Statistics {
    pub fn min_bpm(&self) -> f64 {
        self.bpm.first().copied().unwrap_or(self.main_bpm)
    }

    pub fn max_bpm(&self) -> f64 {
        self.bpm.last().copied().unwrap_or(self.main_bpm)
    }

    pub fn has_tempo_changes(&self) -> bool {
        self.bpm.len() > 1
    }
}

/// Seconds spent at each BPM, in the order each BPM was first credited
#[derive(Debug, Default)]
struct BpmDurations {
    entries: Vec<(f64, f64)>,
}

impl BpmDurations {
    fn credit(&mut self, bpm: f64, seconds: f64) {
        match self.entries.iter_mut().find(|(b, _)| *b == bpm) {
            Some((_, total)) => *total += seconds,
            None => self.entries.push((bpm, seconds)),
        }
    }

    fn total(&self) -> f64 {
        self.entries.iter().map(|(_, seconds)| seconds).sum()
    }

    /// Longest-held BPM. Ties go to the entry credited first.
    fn main_bpm(&self) -> Option<f64> {
        let mut best: Option<(f64, f64)> = None;
        for &(bpm, seconds) in &self.entries {
            if best.is_none_or(|(_, longest)| seconds > longest) {
                best = Some((bpm, seconds));
            }
        }
        best.map(|(bpm, _)| bpm)
    }

    fn range(&self) -> Option<(f64, f64)> {
        self.entries.iter().fold(None, |range, &(bpm, _)| match range {
            None => Some((bpm, bpm)),
            Some((min, max)) => Some((min.min(bpm), max.max(bpm))),
        })
    }
}

struct Accumulator {
    start_beat: Option<Beat>,
    end_beat: Option<Beat>,
    total_notes: u32,
    prev_bpm: f64,
    prev_bpm_beat: Beat,
    durations: BpmDurations,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            start_beat: None,
            end_beat: None,
            total_notes: 0,
            prev_bpm: defaults::DEFAULT_BPM,
            prev_bpm_beat: 0.0,
            durations: BpmDurations::default(),
        }
    }

    fn count(&mut self, beat: Beat) {
        self.start_beat = Some(self.start_beat.map_or(beat, |start| start.min(beat)));
        self.end_beat = Some(self.end_beat.map_or(beat, |end| end.max(beat)));
        self.total_notes += 1;
    }

    /// Credit the running tempo from its marker (or the first playable note,
    /// whichever is later) up to `until`.
    fn close_segment(&mut self, until: Beat) {
        let Some(start_beat) = self.start_beat else {
            return;
        };
        if self.prev_bpm <= 0.0 {
            return;
        }
        let from = self.prev_bpm_beat.max(start_beat);
        let seconds = (until - from) * defaults::SECONDS_PER_MINUTE / self.prev_bpm;
        trace!(
            "Tempo segment {} -> {} at {} BPM: {}s",
            from, until, self.prev_bpm, seconds
        );
        if seconds > 0.0 {
            self.durations.credit(self.prev_bpm, seconds);
        }
    }

    fn finish(mut self) -> Statistics {
        if let Some(end_beat) = self.end_beat {
            if self.prev_bpm_beat < end_beat {
                self.close_segment(end_beat);
            }
        }

        let main_bpm = self.durations.main_bpm().unwrap_or(self.prev_bpm);
        let (min, max) = self
            .durations
            .range()
            .unwrap_or((self.prev_bpm, self.prev_bpm));
        let bpm = if min == max { vec![min] } else { vec![min, max] };

        Statistics {
            duration: self.durations.total(),
            notes: self.total_notes,
            bpm,
            main_bpm,
        }
    }
}

/// Compute statistics for a beat-ordered chart.
///
/// Only playable units (singles, directionals, non-hidden slide connections)
/// are counted and bound the timed range. BPM markers with a negative tempo
/// are ignored.
pub fn analyze(chart: &Chart) -> Statistics {
    let mut acc = Accumulator::new();

    for (index, note) in chart.iter().enumerate() {
        match note {
            Note::Bpm(marker) => {
                if marker.bpm < 0.0 {
                    trace!("Ignoring negative BPM marker at beat {}", marker.beat);
                    continue;
                }
                if index > 0 && acc.total_notes > 0 {
                    acc.close_segment(marker.beat);
                }
                acc.prev_bpm = marker.bpm;
                acc.prev_bpm_beat = marker.beat;
            }
            Note::Single(single) => acc.count(single.beat),
            Note::Directional(directional) => acc.count(directional.beat),
            Note::Slide(slide) => {
                for connection in slide.connections().iter().filter(|c| !c.hidden) {
                    acc.count(connection.beat);
                }
            }
        }
    }

    acc.finish()
}

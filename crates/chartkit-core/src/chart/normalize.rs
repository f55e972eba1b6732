use tracing::debug;

use crate::chart::Chart;
use crate::error::{Error, Result};
use crate::note::{Note, Record, Slide};

/// Canonicalize raw records into a chart.
///
/// The result is sorted by beat, starts at beat 0, and has slide flick/skill
/// flags only where the authoring rules allow them. Fails with
/// [`Error::MissingTempoAnchor`] when the chart does not open with a BPM
/// marker and contains none to anchor to.
pub fn normalize<I>(records: I) -> Result<Chart>
where
    I: IntoIterator<Item = Record>,
{
    normalize_notes(Chart::from_records(records).into_notes())
}

pub(crate) fn normalize_notes(mut notes: Vec<Note>) -> Result<Chart> {
    // sort_by is stable: equal beats keep input order
    notes.sort_by(|a, b| a.beat().total_cmp(&b.beat()));

    anchor_to_tempo(&mut notes)?;

    for note in notes.iter_mut() {
        if let Note::Slide(slide) = note {
            sanitize_slide(slide);
        }
    }

    align_to_zero(&mut notes);

    Ok(Chart::new(notes))
}

/// Shift the chart so the first BPM marker sits at beat 0, unless the chart
/// already opens with one.
fn anchor_to_tempo(notes: &mut [Note]) -> Result<()> {
    if notes.first().is_some_and(Note::is_bpm) {
        return Ok(());
    }

    let offset = notes
        .iter()
        .find(|note| note.is_bpm())
        .map(Note::beat)
        .ok_or(Error::MissingTempoAnchor)?;

    debug!("Anchoring chart to BPM marker at beat {}", offset);
    for note in notes.iter_mut() {
        note.shift(-offset);
    }

    clamp_leading_underflow(notes);
    Ok(())
}

/// Clamp negative beats to 0 at the head of the chart only. Stops at the
/// first note that is already non-negative; interior values are left alone.
fn clamp_leading_underflow(notes: &mut [Note]) {
    for note in notes.iter_mut() {
        if note.beat() >= 0.0 {
            break;
        }
        match note {
            Note::Slide(slide) => {
                for connection in slide.connections_mut() {
                    if connection.beat >= 0.0 {
                        break;
                    }
                    connection.beat = 0.0;
                }
            }
            Note::Single(n) => n.beat = 0.0,
            Note::Directional(n) => n.beat = 0.0,
            Note::Bpm(n) => n.beat = 0.0,
        }
    }
}

/// Flick survives only on the last connection; skill only on the endpoints.
fn sanitize_slide(slide: &mut Slide) {
    let connections = slide.connections_mut();
    let last = connections.len() - 1;

    for (index, connection) in connections.iter_mut().enumerate() {
        if index != last {
            connection.flick = false;
        }
        if index != 0 && index != last {
            connection.skill = false;
        }
    }
}

fn align_to_zero(notes: &mut [Note]) {
    let Some(first) = notes.first().map(Note::beat) else {
        return;
    };
    if first != 0.0 {
        debug!("Realigning chart start from beat {}", first);
        for note in notes.iter_mut() {
            note.shift(-first);
        }
    }
}

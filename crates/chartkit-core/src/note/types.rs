use serde::{Deserialize, Deserializer};
use strum::{EnumString, IntoStaticStr};

/// Position along the chart timeline, in beats.
pub type Beat = f64;

/// Tap note
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Single {
    pub beat: Beat,
    pub lane: f64,
    #[serde(default)]
    pub flick: bool,
    #[serde(default)]
    pub skill: bool,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, EnumString, IntoStaticStr,
)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Directional flick note
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Directional {
    pub beat: Beat,
    pub lane: f64,
    #[serde(deserialize_with = "deserialize_width")]
    pub width: u32,
    pub direction: Direction,
}

/// Accepts any integral JSON number (`2` or `2.0`).
fn deserialize_width<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.fract() != 0.0 || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(serde::de::Error::custom(format!(
            "width must be a non-negative integer, got {}",
            value
        )));
    }
    Ok(value as u32)
}

/// Tempo change marker. Not playable.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BpmMarker {
    pub beat: Beat,
    pub bpm: f64,
}

/// One waypoint of a slide
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Connection {
    pub beat: Beat,
    pub lane: f64,
    #[serde(default)]
    pub flick: bool,
    #[serde(default)]
    pub skill: bool,
    /// Not rendered or counted as a tap (SP-key authoring)
    #[serde(default)]
    pub hidden: bool,
}

/// Sustained note made of one or more ordered connections.
///
/// The connection list is never empty and its length is fixed after
/// construction, so [`Slide::beat`] always reflects the first connection.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    connections: Vec<Connection>,
}

impl Slide {
    /// Build a slide. Returns `None` for an empty connection list.
    pub fn new(connections: Vec<Connection>) -> Option<Self> {
        if connections.is_empty() {
            return None;
        }
        Some(Self { connections })
    }

    pub fn beat(&self) -> Beat {
        self.connections[0].beat
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn connections_mut(&mut self) -> &mut [Connection] {
        &mut self.connections
    }

    /// Move every connection by `delta` beats
    pub fn shift(&mut self, delta: Beat) {
        for connection in &mut self.connections {
            connection.beat += delta;
        }
    }

    pub fn has_hidden(&self) -> bool {
        self.connections.iter().any(|c| c.hidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connection(beat: Beat, lane: f64) -> Connection {
        Connection {
            beat,
            lane,
            ..Default::default()
        }
    }

    #[test]
    fn test_slide_rejects_empty_connections() {
        assert!(Slide::new(Vec::new()).is_none());
    }

    #[test]
    fn test_slide_beat_follows_first_connection() {
        let mut slide = Slide::new(vec![connection(2.0, 1.0), connection(3.0, 2.0)]).unwrap();
        assert_eq!(slide.beat(), 2.0);

        slide.connections_mut()[0].beat = 1.5;
        assert_eq!(slide.beat(), 1.5);

        slide.shift(-1.5);
        assert_eq!(slide.beat(), 0.0);
        assert_eq!(slide.connections()[1].beat, 1.5);
    }

    #[test]
    fn test_slide_has_hidden() {
        let mut slide = Slide::new(vec![connection(0.0, 1.0), connection(1.0, 1.0)]).unwrap();
        assert!(!slide.has_hidden());

        slide.connections_mut()[1].hidden = true;
        assert!(slide.has_hidden());
    }

    #[test]
    fn test_direction_names() {
        assert_eq!(Direction::Left.as_str(), "Left");
        assert_eq!(Direction::Right.to_string(), "Right");
        assert_eq!("Right".parse::<Direction>().unwrap(), Direction::Right);
        assert!("Up".parse::<Direction>().is_err());
    }
}

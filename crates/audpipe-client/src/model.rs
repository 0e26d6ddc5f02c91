use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A string did not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
}

impl UnknownVariant {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// One entry of the JSON `Tracks` listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackInfo {
    pub name: String,
    #[serde(default, deserialize_with = "flag")]
    pub focused: bool,
    #[serde(default, deserialize_with = "flag")]
    pub selected: bool,
    /// `wave`, `label`, `time` or `note`.
    #[serde(default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pan: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gain: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<u32>,
    #[serde(default, deserialize_with = "flag")]
    pub solo: bool,
    #[serde(default, deserialize_with = "flag")]
    pub mute: bool,
    #[serde(rename = "VZoomMin", default, skip_serializing_if = "Option::is_none")]
    pub vzoom_min: Option<f64>,
    #[serde(rename = "VZoomMax", default, skip_serializing_if = "Option::is_none")]
    pub vzoom_max: Option<f64>,
    /// Keys this version of the client does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TrackInfo {
    pub fn is_label_track(&self) -> bool {
        self.kind == "label"
    }
}

/// Audacity reports flags as 0/1; accept booleans too.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Bool(b) => Ok(b),
        Value::Number(n) => Ok(n.as_f64().is_some_and(|v| v != 0.0)),
        Value::Null => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "expected 0/1 or boolean flag, got {other}"
        ))),
    }
}

/// A labeled time interval, in seconds.
///
/// The host encodes labels as `[start, end, text]`; audpipe writes them as
/// `{"start", "end", "text"}` records. Both forms deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "LabelIntervalRepr")]
pub struct LabelInterval {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

impl LabelInterval {
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LabelIntervalRepr {
    Host(f64, f64, String),
    Record { start: f64, end: f64, text: String },
}

impl From<LabelIntervalRepr> for LabelInterval {
    fn from(repr: LabelIntervalRepr) -> Self {
        match repr {
            LabelIntervalRepr::Host(start, end, text)
            | LabelIntervalRepr::Record { start, end, text } => Self { start, end, text },
        }
    }
}

/// The labels of one label track.
///
/// The host encodes each label track as `[track_index, [label, ...]]`;
/// audpipe writes `{"index", "labels"}` records. Both forms deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "LabelTrackRepr")]
pub struct LabelTrack {
    pub index: usize,
    pub labels: Vec<LabelInterval>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LabelTrackRepr {
    Host(usize, Vec<LabelInterval>),
    Record {
        index: usize,
        labels: Vec<LabelInterval>,
    },
}

impl From<LabelTrackRepr> for LabelTrack {
    fn from(repr: LabelTrackRepr) -> Self {
        match repr {
            LabelTrackRepr::Host(index, labels) | LabelTrackRepr::Record { index, labels } => {
                Self { index, labels }
            }
        }
    }
}

/// Kind of track created with `New<Kind>Track:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackKind {
    Mono,
    Stereo,
    Label,
    Time,
}

impl TrackKind {
    pub const ALL: [TrackKind; 4] = [
        TrackKind::Mono,
        TrackKind::Stereo,
        TrackKind::Label,
        TrackKind::Time,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TrackKind::Mono => "Mono",
            TrackKind::Stereo => "Stereo",
            TrackKind::Label => "Label",
            TrackKind::Time => "Time",
        }
    }
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrackKind {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownVariant::new("track kind", s))
    }
}

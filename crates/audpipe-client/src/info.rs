use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::model::UnknownVariant;

/// Category requested with `GetInfo: Type=...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfoType {
    Commands,
    Menus,
    Preferences,
    Tracks,
    Clips,
    Envelopes,
    Labels,
    Boxes,
}

impl InfoType {
    pub const ALL: [InfoType; 8] = [
        InfoType::Commands,
        InfoType::Menus,
        InfoType::Preferences,
        InfoType::Tracks,
        InfoType::Clips,
        InfoType::Envelopes,
        InfoType::Labels,
        InfoType::Boxes,
    ];

    /// Name as it appears on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            InfoType::Commands => "Commands",
            InfoType::Menus => "Menus",
            InfoType::Preferences => "Preferences",
            InfoType::Tracks => "Tracks",
            InfoType::Clips => "Clips",
            InfoType::Envelopes => "Envelopes",
            InfoType::Labels => "Labels",
            InfoType::Boxes => "Boxes",
        }
    }
}

impl fmt::Display for InfoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InfoType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownVariant::new("info type", s))
    }
}

/// Output format requested with `GetInfo: Format=...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InfoFormat {
    #[default]
    Json,
    Lisp,
    Brief,
}

impl InfoFormat {
    pub const ALL: [InfoFormat; 3] = [InfoFormat::Json, InfoFormat::Lisp, InfoFormat::Brief];

    /// Name as it appears on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            InfoFormat::Json => "JSON",
            InfoFormat::Lisp => "LISP",
            InfoFormat::Brief => "Brief",
        }
    }
}

impl fmt::Display for InfoFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InfoFormat {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownVariant::new("info format", s))
    }
}

/// Decoded `GetInfo` body.
#[derive(Debug, Clone, PartialEq)]
pub enum InfoReply {
    /// Parsed body of a `JSON` request.
    Json(Value),
    /// Trimmed body of a `LISP` or `Brief` request.
    Text(String),
}

impl InfoReply {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            InfoReply::Json(value) => Some(value),
            InfoReply::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            InfoReply::Json(_) => None,
            InfoReply::Text(text) => Some(text),
        }
    }
}

impl fmt::Display for InfoReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InfoReply::Json(value) => write!(f, "{value}"),
            InfoReply::Text(text) => f.write_str(text),
        }
    }
}

use bytes::{BufMut, BytesMut};

use crate::error::{FrameError, Result};

/// Marker the host places before the status token of every response.
pub const STATUS_MARKER: &str = "BatchCommand finished:";

/// Status token for a command the host executed.
pub const STATUS_OK: &str = "OK";

/// Status token for a command the host rejected.
pub const STATUS_FAILED: &str = "Failed!";

/// Outcome the host reported for a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// `OK`
    Success,
    /// `Failed!`
    Failure,
    /// Any other token.
    Unrecognized(String),
}

impl Status {
    /// Classify a trimmed status token.
    pub fn from_token(token: &str) -> Self {
        match token {
            STATUS_OK => Self::Success,
            STATUS_FAILED => Self::Failure,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

/// A delimited response split at the status marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Text before the marker, trimmed.
    pub body: String,
    /// Classified status token.
    pub status: Status,
}

impl Reply {
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}

/// Encode a command followed by `terminator`.
///
/// Commands may not contain CR, LF or NUL; any of them would split the
/// command on the host side.
pub fn encode_command(command: &str, terminator: &str, dst: &mut BytesMut) -> Result<()> {
    if command.contains(['\r', '\n', '\0']) {
        return Err(FrameError::EmbeddedTerminator(command.to_string()));
    }
    dst.reserve(command.len() + terminator.len());
    dst.put_slice(command.as_bytes());
    dst.put_slice(terminator.as_bytes());
    Ok(())
}

/// Split a raw response at the first status marker.
///
/// Everything before the marker is the body, everything after it is the
/// status token; both are trimmed.
pub fn decode_reply(raw: &str) -> Result<Reply> {
    let pos = raw.find(STATUS_MARKER).ok_or(FrameError::MissingStatusMarker)?;
    let body = raw[..pos].trim().to_string();
    let token = raw[pos + STATUS_MARKER.len()..].trim();

    Ok(Reply {
        body,
        status: Status::from_token(token),
    })
}

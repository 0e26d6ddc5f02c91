use std::path::PathBuf;

use audpipe_frame::FrameError;
use audpipe_transport::TransportError;

/// Errors that can occur in client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The script pipes do not exist: Audacity is not running or
    /// mod-script-pipe is not enabled.
    #[error(
        "script pipe {} not found: ensure Audacity is running with mod-script-pipe enabled",
        .path.display()
    )]
    HostUnavailable { path: PathBuf },

    /// The host answered with text outside the response grammar, or claimed
    /// success with an unparsable body.
    #[error("protocol violation: {0}")]
    ProtocolViolation(String),

    /// The host reported `Failed!` for a well-formed exchange.
    #[error("command `{command}` failed{}: {message}", interval_suffix(.interval))]
    CommandFailed {
        command: String,
        message: String,
        /// Position of the label interval being applied, if any.
        interval: Option<usize>,
    },

    /// A label text contains a character the host cannot receive.
    #[error("label text {text:?} at label interval {interval} contains {character:?}")]
    InvalidLabelText {
        interval: usize,
        text: String,
        character: char,
    },

    /// The track is absent from the host's label listing.
    #[error("track {0} is not a label track")]
    LabelTrackNotFound(usize),

    /// Transport-level error other than a missing endpoint.
    #[error("transport error: {0}")]
    Transport(TransportError),

    /// Framing or stream error.
    #[error("frame error: {0}")]
    Frame(FrameError),
}

impl ClientError {
    pub(crate) fn command_failed(command: &str, message: &str) -> Self {
        Self::CommandFailed {
            command: command.to_string(),
            message: message.to_string(),
            interval: None,
        }
    }
}

fn interval_suffix(interval: &Option<usize>) -> String {
    match interval {
        Some(index) => format!(" at label interval {index}"),
        None => String::new(),
    }
}

impl From<TransportError> for ClientError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::HostUnavailable { path } => Self::HostUnavailable { path },
            other => Self::Transport(other),
        }
    }
}

impl From<FrameError> for ClientError {
    fn from(err: FrameError) -> Self {
        match err {
            FrameError::MissingStatusMarker => {
                Self::ProtocolViolation("response has no status marker".to_string())
            }
            other => Self::Frame(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_unavailable_is_lifted_from_transport() {
        let err: ClientError = TransportError::HostUnavailable {
            path: PathBuf::from("/tmp/x"),
        }
        .into();
        assert!(matches!(err, ClientError::HostUnavailable { .. }));
        assert!(err.to_string().contains("mod-script-pipe"));
    }

    #[test]
    fn missing_marker_is_protocol_violation() {
        let err: ClientError = FrameError::MissingStatusMarker.into();
        assert!(matches!(err, ClientError::ProtocolViolation(_)));
    }

    #[test]
    fn command_failed_names_interval() {
        let err = ClientError::CommandFailed {
            command: "AddLabel:".to_string(),
            message: "no track".to_string(),
            interval: Some(2),
        };
        assert_eq!(
            err.to_string(),
            "command `AddLabel:` failed at label interval 2: no track"
        );
        let err = ClientError::command_failed("AddLabel:", "no track");
        assert_eq!(err.to_string(), "command `AddLabel:` failed: no track");
    }
}

use std::fmt;
use std::io;

use audpipe_client::ClientError;
use audpipe_frame::FrameError;
use audpipe_transport::TransportError;

pub const SUCCESS: i32 = 0;
/// The host rejected a command (`Failed!`).
pub const COMMAND_FAILED: i32 = 1;
/// The script pipes are missing: Audacity is not running or the bridge is off.
pub const HOST_UNAVAILABLE: i32 = 3;
pub const HEALTH_CHECK_FAILED: i32 = 30;
pub const PERMISSION_DENIED: i32 = 50;
/// The host answered outside the protocol grammar.
pub const PROTOCOL_VIOLATION: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::NotFound => HOST_UNAVAILABLE,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn transport_error(context: &str, err: TransportError) -> CliError {
    match err {
        TransportError::HostUnavailable { .. } => {
            CliError::new(HOST_UNAVAILABLE, format!("{context}: {err}"))
        }
        TransportError::Open { source, .. } | TransportError::Io(source) => {
            io_error(context, source)
        }
        other => CliError::new(INTERNAL, format!("{context}: {other}")),
    }
}

pub fn frame_error(context: &str, err: FrameError) -> CliError {
    match err {
        FrameError::Io(source) => io_error(context, source),
        FrameError::EmbeddedTerminator(_) => CliError::new(USAGE, format!("{context}: {err}")),
        FrameError::MissingStatusMarker | FrameError::ResponseTooLarge { .. } => {
            CliError::new(PROTOCOL_VIOLATION, format!("{context}: {err}"))
        }
        FrameError::ConnectionClosed => {
            CliError::new(HOST_UNAVAILABLE, format!("{context}: Audacity closed the pipe"))
        }
    }
}

pub fn client_error(context: &str, err: ClientError) -> CliError {
    match err {
        ClientError::HostUnavailable { .. } => {
            CliError::new(HOST_UNAVAILABLE, format!("{context}: {err}"))
        }
        ClientError::ProtocolViolation(_) => CliError::new(
            PROTOCOL_VIOLATION,
            format!("{context}: unexpected response from Audacity: {err}"),
        ),
        ClientError::CommandFailed { .. } => CliError::new(
            COMMAND_FAILED,
            format!("{context}: Audacity rejected the command: {err}"),
        ),
        ClientError::LabelTrackNotFound(_) | ClientError::InvalidLabelText { .. } => {
            CliError::new(USAGE, format!("{context}: {err}"))
        }
        ClientError::Transport(err) => transport_error(context, err),
        ClientError::Frame(err) => frame_error(context, err),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn distinguishes_the_three_failure_kinds() {
        let unavailable = client_error(
            "connect failed",
            ClientError::HostUnavailable {
                path: PathBuf::from("/tmp/audacity_script_pipe.to.1000"),
            },
        );
        let rejected = client_error(
            "call failed",
            ClientError::CommandFailed {
                command: "Bogus:".to_string(),
                message: String::new(),
                interval: None,
            },
        );
        let violation = client_error(
            "call failed",
            ClientError::ProtocolViolation("no marker".to_string()),
        );

        assert_eq!(unavailable.code, HOST_UNAVAILABLE);
        assert_eq!(rejected.code, COMMAND_FAILED);
        assert_eq!(violation.code, PROTOCOL_VIOLATION);
        assert!(rejected.message.contains("rejected"));
        assert!(violation.message.contains("unexpected response"));
    }

    #[test]
    fn closed_pipe_maps_to_host_unavailable() {
        let err = client_error("call failed", ClientError::Frame(FrameError::ConnectionClosed));
        assert_eq!(err.code, HOST_UNAVAILABLE);
    }

    #[test]
    fn invalid_label_text_is_a_usage_error() {
        let err = client_error(
            "add label failed",
            ClientError::InvalidLabelText {
                interval: 0,
                text: "a\nb".to_string(),
                character: '\n',
            },
        );
        assert_eq!(err.code, USAGE);
        assert!(err.message.contains("label interval 0"));
    }
}

use std::path::PathBuf;

/// Errors that can occur while opening or using the channel pair.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// A pipe endpoint does not exist: the host is not running or the
    /// scripting bridge is disabled.
    #[error(
        "script pipe {} not found: ensure Audacity is running with mod-script-pipe enabled",
        .path.display()
    )]
    HostUnavailable { path: PathBuf },

    /// The endpoint exists but could not be opened.
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The channel pair has not been opened yet.
    #[error("script pipes are not open")]
    NotOpen,

    /// An I/O error occurred on an open pipe.
    #[error("pipe I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TransportError>;

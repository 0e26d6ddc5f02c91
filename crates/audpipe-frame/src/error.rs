/// Errors that can occur while framing commands or delimiting responses.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The command contains a character that would end the line early.
    #[error("command contains an embedded line terminator: {0:?}")]
    EmbeddedTerminator(String),

    /// The accumulated response exceeds the configured maximum size.
    #[error("response too large ({size} bytes, max {max})")]
    ResponseTooLarge { size: usize, max: usize },

    /// The response carries no `BatchCommand finished:` marker.
    #[error("response has no status marker")]
    MissingStatusMarker,

    /// An I/O error occurred while reading or writing the pipes.
    #[error("frame I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The pipe was closed before a complete response was received.
    #[error("connection closed (incomplete response)")]
    ConnectionClosed,
}

pub type Result<T> = std::result::Result<T, FrameError>;

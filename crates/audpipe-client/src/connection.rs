use std::io::{BufRead, Write};

use audpipe_frame::{CommandWriter, LineConfig, ResponseReader};
use audpipe_transport::{ChannelPair, PipeEndpoints};

use crate::error::Result;

/// One request/response exchange with the host.
///
/// Implementations write the command, block until the terminated response
/// arrives and return the raw response text. Only one exchange is ever in
/// flight: `&mut self` serializes callers.
pub trait CommandChannel {
    fn exchange(&mut self, command: &str) -> Result<String>;
}

/// Exchanges commands over the real script pipes.
#[derive(Debug)]
pub struct PipeConnection {
    pair: ChannelPair,
    config: LineConfig,
}

impl PipeConnection {
    /// Wrap a channel pair without opening it.
    pub fn new(pair: ChannelPair) -> Self {
        Self::with_config(pair, LineConfig::default())
    }

    /// Wrap a channel pair with explicit line configuration.
    pub fn with_config(pair: ChannelPair, config: LineConfig) -> Self {
        Self { pair, config }
    }

    /// Open the endpoints and wrap them.
    pub fn open(endpoints: PipeEndpoints) -> Result<Self> {
        Ok(Self::new(ChannelPair::open(endpoints)?))
    }

    /// Open the underlying pipes if they are not open yet.
    pub fn ensure_open(&mut self) -> Result<()> {
        self.pair.ensure_open()?;
        Ok(())
    }

    /// Borrow the underlying channel pair.
    pub fn pair(&self) -> &ChannelPair {
        &self.pair
    }
}

impl CommandChannel for PipeConnection {
    fn exchange(&mut self, command: &str) -> Result<String> {
        let (to_host, from_host) = self.pair.handles_mut()?;
        CommandWriter::with_config(to_host, self.config.clone()).send(command)?;
        let response =
            ResponseReader::with_config(from_host, self.config.clone()).read_response()?;
        Ok(response)
    }
}

/// Exchanges commands over an arbitrary writer/reader pair.
pub struct StreamConnection<W, R> {
    writer: CommandWriter<W>,
    reader: ResponseReader<R>,
}

impl<W: Write, R: BufRead> StreamConnection<W, R> {
    /// Create a connection with default line configuration.
    pub fn new(to_host: W, from_host: R) -> Self {
        Self::with_config(to_host, from_host, LineConfig::default())
    }

    /// Create a connection with explicit line configuration.
    pub fn with_config(to_host: W, from_host: R, config: LineConfig) -> Self {
        Self {
            writer: CommandWriter::with_config(to_host, config.clone()),
            reader: ResponseReader::with_config(from_host, config),
        }
    }

    /// Consume the connection and return the writer and reader.
    pub fn into_inner(self) -> (W, R) {
        (self.writer.into_inner(), self.reader.into_inner())
    }
}

impl<W: Write, R: BufRead> CommandChannel for StreamConnection<W, R> {
    fn exchange(&mut self, command: &str) -> Result<String> {
        self.writer.send(command)?;
        Ok(self.reader.read_response()?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use audpipe_frame::{FrameError, LINE_TERMINATOR};
    use audpipe_transport::TransportError;

    use super::*;
    use crate::error::ClientError;

    #[test]
    fn stream_exchange_writes_command_and_reads_batch() {
        let replies = Cursor::new(b"\nHello\nBatchCommand finished: OK\n\n".to_vec());
        let mut conn = StreamConnection::new(Vec::new(), replies);

        let raw = conn.exchange("Help: Command=Help").unwrap();
        assert_eq!(raw, "Hello\nBatchCommand finished: OK\n");

        let (written, _) = conn.into_inner();
        assert_eq!(written, format!("Help: Command=Help{LINE_TERMINATOR}").into_bytes());
    }

    #[test]
    fn stream_exchange_surfaces_closed_pipe() {
        let mut conn = StreamConnection::new(Vec::new(), Cursor::new(Vec::new()));
        let err = conn.exchange("Help:").unwrap_err();
        assert!(matches!(err, ClientError::Frame(FrameError::ConnectionClosed)));
    }

    #[test]
    fn unopened_pipe_connection_is_not_open() {
        let pair = ChannelPair::new(PipeEndpoints::new("/nonexistent/to", "/nonexistent/from"));
        let mut conn = PipeConnection::new(pair);
        let err = conn.exchange("Help:").unwrap_err();
        assert!(matches!(err, ClientError::Transport(TransportError::NotOpen)));
    }

    #[test]
    fn missing_pipes_are_host_unavailable() {
        let err = PipeConnection::open(PipeEndpoints::new("/nonexistent/to", "/nonexistent/from"))
            .unwrap_err();
        assert!(matches!(err, ClientError::HostUnavailable { .. }));
    }
}

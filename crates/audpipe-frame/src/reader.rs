use std::io::{BufRead, ErrorKind, Read};

use tracing::{debug, trace};

use crate::error::{FrameError, Result};
use crate::line::{is_blank_line, LineConfig};

/// Position of the reader within one response batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReadState {
    /// Nothing accumulated yet; blank lines are spurious and skipped.
    Scanning,
    /// Content seen; the next blank line closes the batch.
    Accumulating,
    /// Sentinel consumed.
    Terminated,
}

/// Reads blank-line delimited responses from any `BufRead` stream.
///
/// Reading blocks on the next line; that is the only suspension point.
pub struct ResponseReader<T> {
    inner: T,
    config: LineConfig,
}

impl<T: BufRead> ResponseReader<T> {
    /// Create a new response reader with default configuration.
    pub fn new(inner: T) -> Self {
        Self::with_config(inner, LineConfig::default())
    }

    /// Create a new response reader with explicit configuration.
    pub fn with_config(inner: T, config: LineConfig) -> Self {
        Self { inner, config }
    }

    /// Read the next complete response (blocking).
    ///
    /// Lines are accumulated with their terminators until a blank line
    /// arrives after at least one content line. The closing blank line is
    /// consumed but not returned.
    ///
    /// Each line is read through a limit derived from the remaining budget,
    /// so a line that never ends cannot grow past `max_response_size`.
    ///
    /// Returns `Err(FrameError::ConnectionClosed)` when EOF is reached first.
    pub fn read_response(&mut self) -> Result<String> {
        let max = self.config.max_response_size;
        let mut state = ReadState::Scanning;
        let mut response = String::new();
        let mut line = Vec::new();

        while state != ReadState::Terminated {
            line.clear();
            // Room for the rest of the budget plus a CRLF blank line.
            let limit = max.saturating_sub(response.len()).saturating_add(2) as u64;
            let read = match (&mut self.inner).take(limit).read_until(b'\n', &mut line) {
                Ok(n) => n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(FrameError::Io(err)),
            };

            if read == 0 {
                return Err(FrameError::ConnectionClosed);
            }

            let blank = is_blank_line(&line);
            if !blank && response.len() + line.len() > max {
                return Err(FrameError::ResponseTooLarge {
                    size: response.len() + line.len(),
                    max,
                });
            }

            state = match (state, blank) {
                (ReadState::Scanning, true) => {
                    trace!("skipping blank line before response");
                    ReadState::Scanning
                }
                (_, true) => ReadState::Terminated,
                (_, false) => {
                    let text = std::str::from_utf8(&line).map_err(|err| {
                        FrameError::Io(std::io::Error::new(ErrorKind::InvalidData, err))
                    })?;
                    response.push_str(text);
                    ReadState::Accumulating
                }
            };
        }

        debug!(len = response.len(), "received response");
        Ok(response)
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Consume the reader and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Current reader configuration.
    pub fn config(&self) -> &LineConfig {
        &self.config
    }
}

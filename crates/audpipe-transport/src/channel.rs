use std::fs::{File, OpenOptions};
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use tracing::{debug, info};

use crate::endpoint::PipeEndpoints;
use crate::error::{Result, TransportError};

/// The open handles of a channel pair.
struct OpenPipes {
    to_host: File,
    from_host: BufReader<File>,
}

/// Owned pair of script pipes: a write sink towards the host and a
/// line-buffered read source from it.
///
/// The pair is either fully closed or fully open. [`ensure_open`] opens both
/// handles once and is a no-op afterwards; there is no implicit reopen.
///
/// [`ensure_open`]: ChannelPair::ensure_open
pub struct ChannelPair {
    endpoints: PipeEndpoints,
    pipes: Option<OpenPipes>,
}

impl ChannelPair {
    /// Create a closed channel pair for the given endpoints.
    pub fn new(endpoints: PipeEndpoints) -> Self {
        Self {
            endpoints,
            pipes: None,
        }
    }

    /// Create a channel pair and open it immediately.
    pub fn open(endpoints: PipeEndpoints) -> Result<Self> {
        let mut pair = Self::new(endpoints);
        pair.ensure_open()?;
        Ok(pair)
    }

    /// Open both pipes unless they are already open.
    ///
    /// The to-host pipe is opened first. On Unix, opening a FIFO blocks until
    /// the host has the other end open, so this waits for the host.
    pub fn ensure_open(&mut self) -> Result<()> {
        if self.pipes.is_some() {
            debug!("script pipes already open");
            return Ok(());
        }

        let to_host = open_endpoint(self.endpoints.to_host(), true)?;
        let from_host = open_endpoint(self.endpoints.from_host(), false)?;

        self.pipes = Some(OpenPipes {
            to_host,
            from_host: BufReader::new(from_host),
        });
        info!(
            to_host = ?self.endpoints.to_host(),
            from_host = ?self.endpoints.from_host(),
            "opened script pipes"
        );
        Ok(())
    }

    /// Whether both handles are open.
    pub fn is_open(&self) -> bool {
        self.pipes.is_some()
    }

    /// The endpoints this pair opens.
    pub fn endpoints(&self) -> &PipeEndpoints {
        &self.endpoints
    }

    /// Borrow both handles mutably.
    ///
    /// Returns `Err(TransportError::NotOpen)` before [`ensure_open`] succeeded.
    ///
    /// [`ensure_open`]: ChannelPair::ensure_open
    pub fn handles_mut(&mut self) -> Result<(&mut File, &mut BufReader<File>)> {
        match &mut self.pipes {
            Some(pipes) => Ok((&mut pipes.to_host, &mut pipes.from_host)),
            None => Err(TransportError::NotOpen),
        }
    }
}

impl std::fmt::Debug for ChannelPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelPair")
            .field("endpoints", &self.endpoints)
            .field("open", &self.is_open())
            .finish()
    }
}

fn open_endpoint(path: &Path, write: bool) -> Result<File> {
    let mut options = OpenOptions::new();
    if write {
        options.write(true);
    } else {
        options.read(true);
    }

    options.open(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => TransportError::HostUnavailable {
            path: path.to_path_buf(),
        },
        _ => TransportError::Open {
            path: path.to_path_buf(),
            source: err,
        },
    })
}

use audpipe_frame::{decode_reply, Reply, Status};
use audpipe_transport::PipeEndpoints;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::command;
use crate::connection::{CommandChannel, PipeConnection};
use crate::error::{ClientError, Result};
use crate::info::{InfoFormat, InfoReply, InfoType};
use crate::model::{LabelTrack, TrackInfo, TrackKind};

/// Scripting client for a running Audacity instance.
///
/// Every operation is a strict sequence of request/response exchanges on
/// the underlying [`CommandChannel`]. Host-side effects of earlier steps are
/// never rolled back when a later step fails.
#[derive(Debug)]
pub struct ScriptClient<C> {
    channel: C,
}

impl ScriptClient<PipeConnection> {
    /// Open the given script pipes.
    pub fn connect(endpoints: PipeEndpoints) -> Result<Self> {
        Ok(Self::new(PipeConnection::open(endpoints)?))
    }

    /// Open the platform's default script pipes, honoring env overrides.
    pub fn connect_default() -> Result<Self> {
        Self::connect(PipeEndpoints::from_env())
    }
}

impl<C: CommandChannel> ScriptClient<C> {
    pub fn new(channel: C) -> Self {
        Self { channel }
    }

    /// Send one command and classify the response.
    ///
    /// The returned reply's status is always `Success` or `Failure`; an
    /// unrecognized status token or a missing marker is a
    /// [`ClientError::ProtocolViolation`].
    pub fn call(&mut self, command: &str) -> Result<Reply> {
        let raw = self.channel.exchange(command)?;
        let reply = decode_reply(&raw)?;

        match &reply.status {
            Status::Success => {
                debug!(command, "command succeeded");
                Ok(reply)
            }
            Status::Failure => {
                warn!(command, body = %reply.body, "host reported failure");
                Ok(reply)
            }
            Status::Unrecognized(token) => Err(ClientError::ProtocolViolation(format!(
                "unrecognized status {token:?} for `{command}`"
            ))),
        }
    }

    /// Send one command and require success, returning the body.
    pub fn run(&mut self, command: &str) -> Result<String> {
        let reply = self.call(command)?;
        if reply.is_success() {
            Ok(reply.body)
        } else {
            Err(ClientError::command_failed(command, &reply.body))
        }
    }

    /// Fetch structured info.
    ///
    /// `JSON` bodies are parsed; other formats are returned as trimmed text.
    pub fn get_info(&mut self, info_type: InfoType, format: InfoFormat) -> Result<InfoReply> {
        let command = command::get_info(info_type, format);
        let body = self.run(&command)?;

        match format {
            InfoFormat::Json => serde_json::from_str::<Value>(&body)
                .map(InfoReply::Json)
                .map_err(|err| invalid_json(&command, err)),
            InfoFormat::Lisp | InfoFormat::Brief => Ok(InfoReply::Text(body)),
        }
    }

    /// Fetch `JSON` info and decode it into `T`.
    pub fn get_json<T: DeserializeOwned>(&mut self, info_type: InfoType) -> Result<T> {
        let command = command::get_info(info_type, InfoFormat::Json);
        let body = self.run(&command)?;
        serde_json::from_str(&body).map_err(|err| invalid_json(&command, err))
    }

    /// Number of tracks, counted from the `Brief` listing.
    pub fn track_count(&mut self) -> Result<usize> {
        let body = self.run(&command::get_info(InfoType::Tracks, InfoFormat::Brief))?;
        Ok(body.lines().filter(|line| !line.trim().is_empty()).count())
    }

    /// All tracks, in host order.
    pub fn tracks(&mut self) -> Result<Vec<TrackInfo>> {
        self.get_json(InfoType::Tracks)
    }

    /// All label tracks with their labels, in host order.
    pub fn label_tracks(&mut self) -> Result<Vec<LabelTrack>> {
        self.get_json(InfoType::Labels)
    }

    /// Append a new track and return its index.
    pub fn create_track(&mut self, kind: TrackKind) -> Result<usize> {
        self.run(&command::new_track(kind))?;
        let count = self.track_count()?;
        count.checked_sub(1).ok_or_else(|| {
            ClientError::ProtocolViolation(format!(
                "host reports no tracks after creating a {kind} track"
            ))
        })
    }

    pub fn create_label_track(&mut self) -> Result<usize> {
        self.create_track(TrackKind::Label)
    }

    /// Borrow the underlying channel.
    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// Consume the client and return the underlying channel.
    pub fn into_inner(self) -> C {
        self.channel
    }
}

fn invalid_json(command: &str, err: serde_json::Error) -> ClientError {
    ClientError::ProtocolViolation(format!("invalid JSON from `{command}`: {err}"))
}

//! High-level Audacity scripting client.
//!
//! This is the layer applications talk to. Send raw commands and get back
//! a classified reply, fetch structured `GetInfo` data, and add labels to
//! label tracks in order.
//!
//! ```no_run
//! use audpipe_client::{LabelInterval, ScriptClient};
//!
//! let mut client = ScriptClient::connect_default()?;
//! let track = client.create_label_track()?;
//! client.add_labels(
//!     track,
//!     &[
//!         LabelInterval::new(0.0, 4.5, "intro"),
//!         LabelInterval::new(4.5, 30.0, "verse"),
//!     ],
//! )?;
//! # Ok::<(), audpipe_client::ClientError>(())
//! ```

pub mod client;
pub mod command;
pub mod connection;
pub mod error;
pub mod info;
pub mod labels;
pub mod model;

#[cfg(test)]
mod testing;

pub use audpipe_frame::{Reply, Status};
pub use client::ScriptClient;
pub use connection::{CommandChannel, PipeConnection, StreamConnection};
pub use error::{ClientError, Result};
pub use info::{InfoFormat, InfoReply, InfoType};
pub use labels::{locate_label_range, LabelRange};
pub use model::{LabelInterval, LabelTrack, TrackInfo, TrackKind, UnknownVariant};

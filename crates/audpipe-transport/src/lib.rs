//! Discovery and lifecycle of the Audacity script pipes.
//!
//! `mod-script-pipe` exposes two unidirectional channels:
//! - a "to-host" pipe the client writes commands into
//! - a "from-host" pipe the client reads responses from
//!
//! On Linux/macOS these are FIFOs under `/tmp` suffixed with the user id.
//! On Windows they are the named pipes `ToSrvPipe` and `FromSrvPipe`.
//!
//! This is the lowest layer of audpipe. Everything else builds on the
//! [`ChannelPair`] type provided here.

pub mod channel;
pub mod endpoint;
pub mod error;

pub use channel::ChannelPair;
pub use endpoint::{PipeEndpoints, FROM_PIPE_ENV, TO_PIPE_ENV};
pub use error::{Result, TransportError};

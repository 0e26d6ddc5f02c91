//! Command framing and response delimiting for the Audacity script pipes.
//!
//! The protocol is plain text:
//! - each command is one line closed by the platform terminator
//!   (`"\r\n\0"` on Windows, `"\n"` elsewhere)
//! - each response is a batch of lines closed by a single blank line
//! - the batch ends with `BatchCommand finished: <status>`
//!
//! [`CommandWriter`] and [`ResponseReader`] work over any `Write`/`BufRead`,
//! and [`decode_reply`] splits a delimited response into body and status.

pub mod codec;
pub mod error;
pub mod line;
pub mod reader;
pub mod writer;

pub use codec::{decode_reply, encode_command, Reply, Status, STATUS_FAILED, STATUS_MARKER, STATUS_OK};
pub use error::{FrameError, Result};
pub use line::{LineConfig, DEFAULT_MAX_RESPONSE, LINE_TERMINATOR};
pub use reader::ResponseReader;
pub use writer::CommandWriter;

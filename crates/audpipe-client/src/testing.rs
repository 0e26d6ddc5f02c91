//! Scripted host double for unit tests.

use std::collections::VecDeque;

use audpipe_frame::FrameError;

use crate::connection::CommandChannel;
use crate::error::{ClientError, Result};

/// Replays canned raw responses and records every command it receives.
pub(crate) struct ScriptedHost {
    pub sent: Vec<String>,
    replies: VecDeque<String>,
}

impl ScriptedHost {
    pub fn new(replies: impl IntoIterator<Item = String>) -> Self {
        Self {
            sent: Vec::new(),
            replies: replies.into_iter().collect(),
        }
    }
}

impl CommandChannel for ScriptedHost {
    fn exchange(&mut self, command: &str) -> Result<String> {
        self.sent.push(command.to_string());
        self.replies
            .pop_front()
            .ok_or(ClientError::Frame(FrameError::ConnectionClosed))
    }
}

pub(crate) fn ok(body: &str) -> String {
    format!("{body}\nBatchCommand finished: OK\n")
}

pub(crate) fn failed(body: &str) -> String {
    format!("{body}\nBatchCommand finished: Failed!\n")
}

//! Line terminators and limits.
//!
//! The terminator asymmetry is part of the wire contract with
//! `mod-script-pipe`: the Windows named pipe expects a trailing NUL.

/// Terminator appended to every command on Windows.
pub const WINDOWS_TERMINATOR: &str = "\r\n\0";

/// Terminator appended to every command on other platforms.
pub const UNIX_TERMINATOR: &str = "\n";

/// Terminator for the platform this crate is compiled for.
#[cfg(windows)]
pub const LINE_TERMINATOR: &str = WINDOWS_TERMINATOR;
#[cfg(not(windows))]
pub const LINE_TERMINATOR: &str = UNIX_TERMINATOR;

/// Default maximum accumulated response size: 64 MiB.
pub const DEFAULT_MAX_RESPONSE: usize = 64 * 1024 * 1024;

/// Returns true if `line` is a blank sentinel line.
pub fn is_blank_line(line: &[u8]) -> bool {
    line == b"\n" || line == b"\r\n"
}

/// Configuration shared by the command writer and response reader.
#[derive(Debug, Clone)]
pub struct LineConfig {
    /// Sequence appended to each outgoing command.
    pub terminator: &'static str,
    /// Maximum accumulated response size in bytes. Default: 64 MiB.
    pub max_response_size: usize,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            terminator: LINE_TERMINATOR,
            max_response_size: DEFAULT_MAX_RESPONSE,
        }
    }
}

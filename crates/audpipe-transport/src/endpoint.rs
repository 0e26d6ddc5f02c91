use std::path::{Path, PathBuf};

/// Environment variable overriding the to-host pipe path.
pub const TO_PIPE_ENV: &str = "AUDPIPE_TO_PIPE";
/// Environment variable overriding the from-host pipe path.
pub const FROM_PIPE_ENV: &str = "AUDPIPE_FROM_PIPE";

#[cfg(not(any(unix, windows)))]
compile_error!("audpipe supports the Unix FIFO and Windows named-pipe script bridges only");

#[cfg(unix)]
const UNIX_PIPE_PREFIX: &str = "/tmp/audacity_script_pipe";

#[cfg(windows)]
const WINDOWS_TO_PIPE: &str = r"\\.\pipe\ToSrvPipe";
#[cfg(windows)]
const WINDOWS_FROM_PIPE: &str = r"\\.\pipe\FromSrvPipe";

/// Locations of the two script pipes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipeEndpoints {
    to_host: PathBuf,
    from_host: PathBuf,
}

impl PipeEndpoints {
    /// Explicit endpoint pair.
    pub fn new(to_host: impl Into<PathBuf>, from_host: impl Into<PathBuf>) -> Self {
        Self {
            to_host: to_host.into(),
            from_host: from_host.into(),
        }
    }

    /// The endpoints `mod-script-pipe` creates on this platform.
    ///
    /// On Unix the paths carry the real user id so that several users on one
    /// machine get distinct pipes.
    #[cfg(unix)]
    pub fn platform_default() -> Self {
        // SAFETY: getuid has no preconditions and cannot fail.
        let uid = unsafe { libc::getuid() };
        Self::for_uid(uid)
    }

    /// The endpoints `mod-script-pipe` creates on this platform.
    #[cfg(windows)]
    pub fn platform_default() -> Self {
        Self::new(WINDOWS_TO_PIPE, WINDOWS_FROM_PIPE)
    }

    /// Unix endpoints for an explicit user id.
    #[cfg(unix)]
    pub fn for_uid(uid: u32) -> Self {
        Self::new(
            format!("{UNIX_PIPE_PREFIX}.to.{uid}"),
            format!("{UNIX_PIPE_PREFIX}.from.{uid}"),
        )
    }

    /// Platform defaults, with each path individually overridable through
    /// [`TO_PIPE_ENV`] and [`FROM_PIPE_ENV`].
    pub fn from_env() -> Self {
        let defaults = Self::platform_default();
        let to_host = std::env::var_os(TO_PIPE_ENV)
            .map(PathBuf::from)
            .unwrap_or(defaults.to_host);
        let from_host = std::env::var_os(FROM_PIPE_ENV)
            .map(PathBuf::from)
            .unwrap_or(defaults.from_host);
        Self { to_host, from_host }
    }

    /// Pipe the client writes commands into.
    pub fn to_host(&self) -> &Path {
        &self.to_host
    }

    /// Pipe the client reads responses from.
    pub fn from_host(&self) -> &Path {
        &self.from_host
    }
}

impl Default for PipeEndpoints {
    fn default() -> Self {
        Self::platform_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn unix_paths_carry_uid() {
        let endpoints = PipeEndpoints::for_uid(1000);
        assert_eq!(
            endpoints.to_host(),
            Path::new("/tmp/audacity_script_pipe.to.1000")
        );
        assert_eq!(
            endpoints.from_host(),
            Path::new("/tmp/audacity_script_pipe.from.1000")
        );
    }

    #[test]
    #[cfg(unix)]
    fn platform_default_uses_current_uid() {
        // SAFETY: getuid has no preconditions and cannot fail.
        let uid = unsafe { libc::getuid() };
        assert_eq!(PipeEndpoints::platform_default(), PipeEndpoints::for_uid(uid));
    }

    #[test]
    #[cfg(windows)]
    fn windows_named_pipes() {
        let endpoints = PipeEndpoints::platform_default();
        assert_eq!(endpoints.to_host(), Path::new(r"\\.\pipe\ToSrvPipe"));
        assert_eq!(endpoints.from_host(), Path::new(r"\\.\pipe\FromSrvPipe"));
    }

    #[test]
    fn explicit_endpoints() {
        let endpoints = PipeEndpoints::new("/run/a", "/run/b");
        assert_eq!(endpoints.to_host(), Path::new("/run/a"));
        assert_eq!(endpoints.from_host(), Path::new("/run/b"));
    }
}

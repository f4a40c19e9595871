//! External tool execution
//!
//! Spawns the ffmpeg binary co-located with the process's working directory
//! and blocks until it exits, optionally forwarding its stderr output to the
//! log line by line.

use std::ffi::OsString;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use tracing::{debug, error};

use crate::error::{SegmuxError, SegmuxResult};

/// Fixed name of the external media tool.
pub const FFMPEG_EXECUTABLE: &str = "ffmpeg";

/// Runs the external media tool and waits for it to finish.
pub struct ProcessRunner {
    executable: PathBuf,
}

impl ProcessRunner {
    /// Resolve the tool against the current working directory. The binary
    /// is expected to sit next to the running program, not on the PATH.
    pub fn from_current_dir() -> SegmuxResult<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self {
            executable: cwd.join(FFMPEG_EXECUTABLE),
        })
    }

    /// Point the runner at an explicit executable path.
    pub fn with_executable(executable: PathBuf) -> Self {
        Self { executable }
    }

    /// Spawn the tool with `args` and block until it exits, returning the
    /// exit status. The argument vector is handed to the OS as-is; no
    /// command-line string is joined, so paths containing spaces are safe.
    ///
    /// With `capture_stderr` set, every line the tool writes to stderr is
    /// forwarded to the log at error level as it arrives. ffmpeg emits its
    /// normal progress output there, so these entries are not necessarily
    /// true errors. The child handle is released on every exit path.
    pub fn run(&self, args: &[OsString], capture_stderr: bool) -> SegmuxResult<ExitStatus> {
        let mut command = Command::new(&self.executable);
        command.args(args);
        if capture_stderr {
            command.stderr(Stdio::piped());
        }

        debug!(
            "Spawning {} with {} arguments",
            self.executable.display(),
            args.len()
        );

        let mut child = command.spawn().map_err(|source| SegmuxError::SpawnFailed {
            executable: self.executable.display().to_string(),
            source,
        })?;

        if let Some(stderr) = child.stderr.take() {
            for line in BufReader::new(stderr).lines() {
                error!("{}", line?);
            }
        }

        let status = child.wait()?;
        debug!("{} exited with {}", self.executable.display(), status);

        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn run_reports_exit_status() {
        let runner = ProcessRunner::with_executable(PathBuf::from("false"));
        let status = runner.run(&[], false).unwrap();
        assert!(!status.success());
    }

    #[cfg(unix)]
    #[test]
    fn run_with_capture_drains_stderr_and_succeeds() {
        let runner = ProcessRunner::with_executable(PathBuf::from("sh"));
        let args = vec![
            OsString::from("-c"),
            OsString::from("echo 'frame=  1' >&2; echo 'frame=  2' >&2"),
        ];
        let status = runner.run(&args, true).unwrap();
        assert!(status.success());
    }

    #[test]
    fn run_surfaces_spawn_failure() {
        let runner = ProcessRunner::with_executable(PathBuf::from("no-such-binary-here"));
        let err = runner.run(&[], false).unwrap_err();
        assert!(matches!(err, SegmuxError::SpawnFailed { .. }));
    }
}

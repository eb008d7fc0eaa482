//! How a launch ended.
//!
//! A started child yields an [`Outcome`]; failing to start or wait yields a
//! [`LaunchError`]. Only `Outcome::Exited` carries a code worth propagating.

use std::ffi::OsString;
use std::io;
use std::process::ExitStatus;

use thiserror::Error;

/// Termination of a child that was started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Normal exit with this code (0 included).
    Exited(i32),
    /// Killed by this signal number; no exit code exists.
    Signaled(i32),
    /// Terminated without a code or a known signal.
    Unknown,
}

impl Outcome {
    pub fn from_status(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Outcome::Exited(code);
        }
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(sig) = status.signal() {
                return Outcome::Signaled(sig);
            }
        }
        Outcome::Unknown
    }

    /// The child's own code, if it has one.
    pub fn code(&self) -> Option<i32> {
        match *self {
            Outcome::Exited(code) => Some(code),
            Outcome::Signaled(_) | Outcome::Unknown => None,
        }
    }

    /// Code the parent should exit with; `fallback` when there is none.
    pub fn exit_code(&self, fallback: i32) -> i32 {
        self.code().unwrap_or(fallback)
    }
}

/// The child could not be started or supervised.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("failed to start interpreter {interpreter:?}: {source}")]
    Spawn {
        interpreter: OsString,
        #[source]
        source: io::Error,
    },
    #[error("failed to wait for interpreter: {source}")]
    Wait {
        #[source]
        source: io::Error,
    },
}

//! Launch defaults (internal names shared with the core script).
//!
//! Policy
//! - The names below are the contract with `core.sh`; they are constants, not
//!   settings. `LaunchCfg` exists so tests and the binary can pick the
//!   forwarding mode and, in tests, a different interpreter.

use std::ffi::OsString;

/// Interpreter executable, resolved through `PATH`.
pub const INTERPRETER: &str = "bash";
/// Flag that makes the interpreter run its next argument as a script.
pub const INTERPRETER_FLAG: &str = "-c";
/// Function the core script must define; called by the trailer.
pub const ENTRY_POINT: &str = "main";
/// Variable carrying the space-joined arguments.
pub const ARGS_VAR: &str = "NADM_ARGS";
/// Argument count, set only in [`ArgForwarding::Indexed`] mode.
pub const ARGC_VAR: &str = "NADM_ARGC";
/// Prefix of the per-argument variables (`NADM_ARG_1`, `NADM_ARG_2`, ...).
pub const ARG_VAR_PREFIX: &str = "NADM_ARG_";
/// Exit code used when the child yields no code of its own.
pub const FALLBACK_EXIT_CODE: i32 = 1;

/// How arguments reach the child environment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArgForwarding {
    /// Only `NADM_ARGS`, joined with single spaces (lossy for arguments with spaces).
    #[default]
    Joined,
    /// `NADM_ARGS` plus `NADM_ARGC` and one `NADM_ARG_<i>` per argument, 1-based.
    Indexed,
}

impl std::str::FromStr for ArgForwarding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "joined" => Ok(Self::Joined),
            "indexed" => Ok(Self::Indexed),
            other => Err(format!("unknown argument forwarding mode `{other}`")),
        }
    }
}

/// Launcher configuration.
#[derive(Clone, Debug)]
pub struct LaunchCfg {
    pub interpreter: OsString,
    pub entry_point: String,
    pub args_var: String,
    pub fallback_exit_code: i32,
    pub forwarding: ArgForwarding,
}

impl Default for LaunchCfg {
    fn default() -> Self {
        Self {
            interpreter: OsString::from(INTERPRETER),
            entry_point: ENTRY_POINT.to_string(),
            args_var: ARGS_VAR.to_string(),
            fallback_exit_code: FALLBACK_EXIT_CODE,
            forwarding: ArgForwarding::Joined,
        }
    }
}

//! The launcher: one `bash -c` child per invocation, waited exactly once.
//!
//! Model
//! - Payload = script text + "\n" + entry point.
//! - stdin/stdout/stderr are inherited as-is; nothing is buffered here.
//! - The child sees the full parent environment plus the forwarded arguments.
//! - No retries, no timeout; the working directory is inherited.

use std::ffi::OsStr;
use std::process::{Command, Stdio};

use crate::args::{forwarded_env, inherited_arg_vars};
use crate::cfg::{ArgForwarding, LaunchCfg, INTERPRETER_FLAG};
use crate::outcome::{LaunchError, Outcome};
use crate::script::Script;

#[derive(Clone, Debug, Default)]
pub struct Launcher {
    script: Script,
    cfg: LaunchCfg,
}

impl Launcher {
    pub fn new(script: Script, cfg: LaunchCfg) -> Self {
        Self { script, cfg }
    }

    /// Embedded `core.sh` with default settings.
    pub fn embedded() -> Self {
        Self::default()
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    /// Build the child command without starting it.
    ///
    /// Streams are set to inherit; callers that need to capture them (tests)
    /// can override stdio on the returned `Command`.
    ///
    /// In `Indexed` mode, `NADM_ARG_<i>` variables inherited from an outer
    /// launch are dropped so the child sees only its own arguments.
    pub fn command<S: AsRef<OsStr>>(&self, args: &[S]) -> Command {
        let mut cmd = Command::new(&self.cfg.interpreter);
        if self.cfg.forwarding == ArgForwarding::Indexed {
            for key in inherited_arg_vars(std::env::vars_os().map(|(k, _)| k)) {
                cmd.env_remove(key);
            }
        }
        cmd.arg(INTERPRETER_FLAG)
            .arg(self.script.payload(&self.cfg.entry_point))
            .envs(forwarded_env(args, &self.cfg.args_var, self.cfg.forwarding))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }

    /// Run the script to completion and report how the child ended.
    pub fn run<S: AsRef<OsStr>>(&self, args: &[S]) -> Result<Outcome, LaunchError> {
        tracing::debug!(
            interpreter = ?self.cfg.interpreter,
            origin = ?self.script.origin(),
            argc = args.len(),
            forwarding = ?self.cfg.forwarding,
            "launch"
        );
        let mut child = self
            .command(args)
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                interpreter: self.cfg.interpreter.clone(),
                source,
            })?;
        let status = child.wait().map_err(|source| LaunchError::Wait { source })?;
        let outcome = Outcome::from_status(status);
        match outcome {
            Outcome::Exited(code) => tracing::debug!(code, "child exited"),
            Outcome::Signaled(sig) => tracing::warn!(signal = sig, "child killed by signal"),
            Outcome::Unknown => tracing::warn!(?status, "child ended without exit code"),
        }
        Ok(outcome)
    }

    /// [`Launcher::run`] collapsed to the code the parent should exit with:
    /// the child's own code, else `cfg.fallback_exit_code`.
    pub fn run_to_exit_code<S: AsRef<OsStr>>(&self, args: &[S]) -> i32 {
        let result = self.run(args);
        if let Err(err) = &result {
            tracing::warn!(error = %err, "launch failed");
        }
        match result {
            Ok(outcome) => outcome.exit_code(self.cfg.fallback_exit_code),
            Err(_) => self.cfg.fallback_exit_code,
        }
    }
}

#[cfg(test)]
mod tests;

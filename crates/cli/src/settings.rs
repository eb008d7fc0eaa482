//! Runtime settings taken from the environment.
//!
//! The binary forwards every argument to the core script, so it has no flags
//! of its own; the few knobs it has are environment variables. They stay in
//! the child's environment like everything else.

use anyhow::{Context, Result};
use nadm_launcher::{ArgForwarding, LaunchCfg, Launcher, Script};
use std::ffi::OsString;
use std::path::PathBuf;

/// `tracing` filter for diagnostics on stderr.
pub const LOG_VAR: &str = "NADM_LOG";
/// Path of a script to run instead of the embedded `core.sh`.
pub const CORE_OVERRIDE_VAR: &str = "NADM_CORE_SH";
/// `joined` (default) or `indexed`.
pub const ARG_MODE_VAR: &str = "NADM_ARG_MODE";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Settings {
    pub core_override: Option<PathBuf>,
    pub forwarding: ArgForwarding,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let core_override = lookup(CORE_OVERRIDE_VAR)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        let forwarding = match lookup(ARG_MODE_VAR) {
            None => ArgForwarding::default(),
            Some(raw) => raw
                .to_str()
                .with_context(|| format!("{ARG_MODE_VAR} is not valid UTF-8"))?
                .parse::<ArgForwarding>()
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("reading {ARG_MODE_VAR}"))?,
        };
        Ok(Self {
            core_override,
            forwarding,
        })
    }

    pub fn launcher(&self) -> Result<Launcher> {
        let script = match &self.core_override {
            Some(path) => {
                tracing::debug!(path = %path.display(), "using core script override");
                Script::from_file(path)
                    .with_context(|| format!("reading core script {}", path.display()))?
            }
            None => Script::embedded(),
        };
        let cfg = LaunchCfg {
            forwarding: self.forwarding,
            ..LaunchCfg::default()
        };
        Ok(Launcher::new(script, cfg))
    }
}

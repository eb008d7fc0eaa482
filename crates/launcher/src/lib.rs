//! Launcher for the bundled `nadm` core script.
//!
//! Purpose
//! - Run the build-time embedded `core.sh` under `bash -c`, calling its `main`.
//! - Forward the process arguments to the script through `NADM_ARGS`.
//! - Mirror the child's exit status; anything without a numeric code becomes 1.
//!
//! Layout
//! - `cfg`: fixed names and the small `LaunchCfg` knob set.
//! - `script`: embedded text, runtime override, trailer.
//! - `args`: argument flattening into environment variables.
//! - `outcome`: child termination and launch errors.
//! - `launch`: the `Launcher` itself.

pub mod args;
pub mod cfg;
pub mod launch;
pub mod outcome;
pub mod script;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::{ArgForwarding, LaunchCfg};
pub use launch::Launcher;
pub use outcome::{LaunchError, Outcome};
pub use script::Script;

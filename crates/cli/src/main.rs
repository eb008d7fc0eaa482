use std::env::VarError;
use std::ffi::OsString;
use std::fmt::Display;
use std::process::exit;

use anyhow::Result;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

mod settings;

use settings::{Settings, LOG_VAR};

fn main() {
    init_tracing();
    // Every argument belongs to the core script, `--help` and `--` included.
    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    let code = match launch(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("nadm: {err:#}");
            nadm_launcher::cfg::FALLBACK_EXIT_CODE
        }
    };
    exit(code);
}

fn launch(args: &[OsString]) -> Result<i32> {
    let settings = Settings::from_env()?;
    let launcher = settings.launcher()?;
    Ok(launcher.run_to_exit_code(args))
}

/// Diagnostics go to stderr and are off unless `NADM_LOG` asks for them, so the
/// child's streams reach the terminal untouched.
fn init_tracing() {
    let filter = match std::env::var(LOG_VAR) {
        Err(VarError::NotPresent) => EnvFilter::new("off"),
        Err(err) => ignore_log_filter(err),
        Ok(directives) => EnvFilter::try_new(directives).unwrap_or_else(ignore_log_filter),
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn ignore_log_filter(err: impl Display) -> EnvFilter {
    eprintln!("nadm: ignoring {LOG_VAR}: {err}");
    EnvFilter::new("off")
}

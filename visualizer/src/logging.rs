use std::{env, fs::File};

use anyhow::{Context, Result};
use env_logger::{Builder, Target};

/// Environment variable holding the path of the log file.
pub const LOG_FILE_VAR: &str = "PERCEPTRON_LOG";

/// Initializes `env_logger` from `RUST_LOG`.
///
/// Logs go to the file named by `PERCEPTRON_LOG` when set. Otherwise headless runs log to
/// stderr and the TUI doesn't log at all, since it owns the terminal.
pub fn init(headless: bool) -> Result<()> {
    let mut builder = Builder::from_default_env();

    match env::var_os(LOG_FILE_VAR) {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("cannot create log file {}", path.to_string_lossy()))?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        None if headless => {
            builder.target(Target::Stderr);
        }
        None => return Ok(()),
    }

    builder.try_init().context("logger already initialized")
}

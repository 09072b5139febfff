use std::env;

use anyhow::{bail, Result};

mod app;
mod config;
mod logging;
mod state;
mod ui;

use config::AppConfig;

const USAGE: &str = "usage: visualizer [CONFIG.json] [--headless]";

fn main() -> Result<()> {
    let mut config_path = None;
    let mut headless = false;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--headless" => headless = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            flag if flag.starts_with('-') => bail!("unknown flag '{flag}'\n{USAGE}"),
            path if config_path.is_none() => config_path = Some(path.to_string()),
            extra => bail!("unexpected argument '{extra}'\n{USAGE}"),
        }
    }

    logging::init(headless)?;

    let config = AppConfig::resolve(config_path.as_deref())?;

    if headless {
        app::headless::run(&config)
    } else {
        app::run::run(&config)
    }
}

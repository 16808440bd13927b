//! Wayrest settings
//!
//! Opens the advanced settings window for the installed game settings.
//!
//! # Usage
//!
//! - `wayrest` - Edit the settings file in the platform config directory
//! - `wayrest --config <path>` - Edit a specific settings file
//! - `wayrest -f` - Start fullscreen

use anyhow::{Context, Result};
use std::path::PathBuf;
use wayrest_library::app::{RunOptions, run};

/// Parse run options from command line args
fn parse_run_options(args: &[String]) -> RunOptions {
    let mut options = RunOptions::default();

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-f" | "--fullscreen" => options.fullscreen = true,
            "-c" | "--config" => {
                if let Some(path) = iter.next() {
                    options.config_path = Some(PathBuf::from(path));
                } else {
                    tracing::warn!("{} needs a path", arg);
                }
            }
            other => tracing::warn!("Ignoring unknown argument '{}'", other),
        }
    }

    options
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let options = parse_run_options(&args);

    run(options).context("settings window failed")?;

    Ok(())
}

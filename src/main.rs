mod check;
mod cli;
mod config;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::Config;
use mountspace::Probe;
use std::process::ExitCode;
use ui::Level;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity; stdout stays reserved for findings
    let log_level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp(None)
        .try_init()
        .context("failed to initialize logging")?;

    ui::init_color();
    let program = ui::program_name();
    let probe = Probe::new();

    let code = execute(&cli, &probe, |level, msg| ui::message(&program, level, msg));
    Ok(ExitCode::from(code))
}

/// Run the whole check and return the process exit code.
///
/// Missing thresholds short-circuit before any partition is queried.
fn execute(cli: &Cli, probe: &Probe, mut emit: impl FnMut(Level, &str)) -> u8 {
    let config = match Config::from_cli(cli) {
        Ok(config) => config,
        Err(e) => {
            emit(Level::Error, &e.to_string());
            return 1;
        }
    };

    check::run(&config, probe, |finding| {
        if let Some(level) = Level::of(finding.classification()) {
            emit(level, &finding.to_string());
        }
    })
    .exit_code()
}

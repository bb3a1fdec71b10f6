use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::process::ExitCode;
use std::time::Duration;

use thumbs_cleaner::cleaner::{ConsoleLogger, Logger, Outcome, Pipeline, RunConfig};
use thumbs_cleaner::cli::Cli;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // help and version go to stdout and are not failures
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    if cli.no_color {
        colored::control::set_override(false);
    }

    let logger = ConsoleLogger::new(cli.verbose);
    match run(cli, &logger) {
        Ok(code) => code,
        Err(err) => {
            logger.error(&format!("{:#}", err));
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli, logger: &dyn Logger) -> Result<ExitCode> {
    let settings = cli.load_settings().context("Failed to load settings")?;
    let config = RunConfig::resolve(cli.into_overrides(), settings);

    let spinner = if config.verbose || config.use_cache {
        ProgressBar::hidden()
    } else {
        scan_spinner()
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let outcome = Pipeline::new(&config, logger)
        .with_spinner(&spinner)
        .run(&mut input, &mut output)?;

    Ok(match outcome {
        Outcome::Deleted(report) if report.all_failed() => ExitCode::from(1),
        _ => ExitCode::SUCCESS,
    })
}

fn scan_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} [{elapsed_precise}] Scanning... {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

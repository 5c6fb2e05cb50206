//! hcompare CLI Binary
//!
//! Records MD5 digests of every file under a directory and verifies them later.

use clap::Parser;
use hcompare::cli::{exit_code, map_error, Cli, RunContext, EXIT_FATAL};
use hcompare::config::{ConfigLoader, HcompareConfig};
use hcompare::error::HcompareError;
use hcompare::logging::{init_logging, level_for_verbosity};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ERROR: {}", map_error(&e));
            process::exit(exit_code(&e));
        }
    };

    if let Err(e) = init_logging(Some(&config.logging)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(EXIT_FATAL);
    }

    info!(version = env!("CARGO_PKG_VERSION"), "hcompare starting");

    let context = match RunContext::new(config, &cli.format) {
        Ok(ctx) => ctx.with_record_echo(cli.verbose >= 2),
        Err(e) => {
            error!("Error initializing run: {}", e);
            eprintln!("ERROR: {}", map_error(&e));
            process::exit(exit_code(&e));
        }
    };

    match context.execute(&cli.command) {
        Ok(outcome) => {
            println!("{}", outcome.output);
            process::exit(outcome.exit_code);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("ERROR: {}", map_error(&e));
            process::exit(exit_code(&e));
        }
    }
}

/// Build the run configuration from the config file, environment and CLI flags.
/// Precedence: CLI flags override environment override config file override defaults.
fn build_config(cli: &Cli) -> Result<HcompareConfig, HcompareError> {
    let mut config = match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    if let Some(size) = cli.buffer_size {
        config.digest.chunk_size = size;
    }
    if let Some(level) = level_for_verbosity(cli.verbose) {
        config.logging.level = level.to_string();
    }
    // An explicit --log-level wins over -v.
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.logging.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.logging.file = Some(file.clone());
    }
    if cli.no_color {
        config.logging.color = false;
    }

    Ok(config)
}

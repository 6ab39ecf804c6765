//! Listsync CLI Binary
//!
//! Command-line interface for regenerating the embedded file list of a
//! static web page.

use clap::Parser;
use listsync::logging;
use listsync::tooling::cli::{Cli, CliContext};
use std::process;

fn main() {
    let cli = Cli::parse();

    // Create CLI context
    let context = match CliContext::new(cli.root.clone(), cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error initializing project root: {}", e);
            process::exit(1);
        }
    };

    // CLI log flags override the configured logging setup
    let mut log_config = context.config().logging.clone();
    if let Some(level) = cli.log_level {
        log_config.level = level;
    }
    if let Some(format) = cli.log_format {
        log_config.format = format;
    }
    if let Some(output) = cli.log_output {
        log_config.output = output;
    }
    if let Some(file) = cli.log_file {
        log_config.file = Some(file);
    }
    if let Err(e) = logging::init_logging(Some(&log_config)) {
        eprintln!("Error initializing logging: {}", e);
        process::exit(1);
    }

    // Execute command
    match context.execute(&cli.command) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

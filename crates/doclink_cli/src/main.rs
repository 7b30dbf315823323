//! doclink CLI
//!
//! Finds and writes documentation links in source comments.

mod cli;
mod commands;
mod output;

use std::process::ExitCode;

use clap::Parser;
use miette::Result;
use tracing::error;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::{run_init, run_link, run_scan};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Scan { patterns, format } => run_scan(cli, patterns, *format),
        Commands::Link {
            path,
            line,
            comment,
            into,
            at,
        } => run_link(cli, path, *line, comment, into.as_deref(), *at),
        Commands::Init { force } => run_init(*force),
    }
}

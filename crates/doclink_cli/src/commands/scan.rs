//! Scan command implementation

use doclink_core::LinkFinder;
use miette::{IntoDiagnostic, Result};

use crate::cli::{Cli, OutputFormat};
use crate::output::output_results;

pub fn run_scan(cli: &Cli, patterns: &[String], format: OutputFormat) -> Result<()> {
    let config = super::load_config(cli)?;
    let finder = LinkFinder::new(config);

    let (results, failures) = finder.scan_patterns(patterns).into_diagnostic()?;
    output_results(&results, format)?;

    if !failures.is_empty() {
        return Err(miette::miette!("Failed to scan {} file(s)", failures.len()));
    }
    Ok(())
}

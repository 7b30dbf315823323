//! Subcommand implementations

mod init;
mod link;
mod scan;

pub use init::run_init;
pub use link::run_link;
pub use scan::run_scan;

use std::path::Path;
use std::sync::Arc;

use doclink_core::{ConfigStore, DocLinkSettings, ScanConfig};
use miette::{IntoDiagnostic, Result};
use tracing::debug;

use crate::cli::Cli;

/// Resolves the scan configuration for this invocation.
///
/// Settings come from `--config`, else a settings file in the current
/// directory, else the defaults. Command-line lists override the file.
pub(crate) fn load_config(cli: &Cli) -> Result<Arc<ScanConfig>> {
    let mut settings = match &cli.config {
        Some(path) => DocLinkSettings::from_file(path).into_diagnostic()?,
        None => find_settings()?,
    };

    if let Some(tags) = &cli.tags {
        settings.tag_names = Some(tags.clone());
    }
    if let Some(separators) = &cli.separators {
        settings.separators = Some(separators.clone());
    }
    if let Some(line_prefixes) = &cli.line_prefixes {
        settings.line_prefixes = Some(line_prefixes.clone());
    }

    let store = ConfigStore::new(settings);
    Ok(store.snapshot())
}

fn find_settings() -> Result<DocLinkSettings> {
    match DocLinkSettings::discover(Path::new(".")) {
        Some(path) => {
            debug!("Using settings from {}", path.display());
            DocLinkSettings::from_file(&path).into_diagnostic()
        }
        None => Ok(DocLinkSettings::default()),
    }
}

//! Link command implementation

use std::fs;
use std::path::Path;

use doclink_core::{format_link, insert_link};
use miette::{IntoDiagnostic, Result};
use tracing::info;

use crate::cli::Cli;

pub fn run_link(
    cli: &Cli,
    path: &str,
    line: i64,
    comment: &str,
    into: Option<&Path>,
    at: Option<usize>,
) -> Result<()> {
    let config = super::load_config(cli)?;
    let link = format_link(&config, path, line).into_diagnostic()?;
    let text = if comment.is_empty() {
        link
    } else {
        format!("{} {}", comment, link)
    };

    match (into, at) {
        (Some(file), Some(offset)) => {
            let content = fs::read_to_string(file).into_diagnostic()?;
            if offset > content.len() {
                return Err(miette::miette!(
                    "Offset {} is past the end of {} ({} bytes)",
                    offset,
                    file.display(),
                    content.len()
                ));
            }
            fs::write(file, insert_link(&content, offset, &text)).into_diagnostic()?;
            info!("Inserted link into {}", file.display());
        }
        _ => println!("{}", text),
    }

    Ok(())
}

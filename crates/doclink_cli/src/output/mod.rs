//! Output formatting module

mod json;
mod text;

use doclink_core::FileLinks;
use miette::Result;

use crate::cli::OutputFormat;

pub fn output_results(results: &[FileLinks], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => json::output_json(results)?,
        OutputFormat::Text => text::output_text(results),
    }
    Ok(())
}

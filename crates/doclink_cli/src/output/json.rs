//! JSON output formatter

use doclink_core::FileLinks;
use miette::{IntoDiagnostic, Result};

pub fn output_json(results: &[FileLinks]) -> Result<()> {
    let output: Vec<_> = results
        .iter()
        .map(|r| {
            serde_json::json!({
                "path": r.path.display().to_string(),
                "links": r.links,
            })
        })
        .collect();
    println!(
        "{}",
        serde_json::to_string_pretty(&output).into_diagnostic()?
    );
    Ok(())
}

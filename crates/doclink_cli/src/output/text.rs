//! Text output formatter

use doclink_core::{FileLinks, LocatedLink};

pub fn output_text(results: &[FileLinks]) {
    for result in results {
        for located in &result.links {
            println!("{}", format_line(&result.path.display().to_string(), located));
        }
    }

    let total_files = results.len();
    let total_links: usize = results.iter().map(FileLinks::len).sum();

    println!();
    println!("Scanned {} files, found {} links", total_files, total_links);
}

/// `path:line:col  tag  target`, with a 1-indexed column.
fn format_line(path: &str, located: &LocatedLink) -> String {
    let link = &located.link;
    let target = match &link.line_number {
        Some(line) => format!("{}:{}", link.file_path, line),
        None => link.file_path.clone(),
    };
    format!(
        "{}:{}:{}  {}  {}",
        path,
        located.location.start.line,
        located.location.start.column + 1,
        link.tag_name,
        target
    )
}

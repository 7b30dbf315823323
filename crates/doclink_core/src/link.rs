//! Turning matches into navigation targets, and writing new links.
//!
//! The scanner reports links exactly as written. Editors need a cleaned-up
//! path and an integer line; link insertion needs the reverse direction.

use serde::Serialize;

use crate::config::ScanConfig;
use crate::error::{DocLinkError, Result};
use crate::scanner::{DocLinkMatch, is_path_char};

/// Where a link points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkTarget {
    /// Path with surrounding quotes removed.
    pub path: String,
    /// 1-indexed line. Links without a line number point at line 1.
    pub line: u32,
}

impl LinkTarget {
    /// 0-indexed line, as editors usually count.
    pub fn zero_based_line(&self) -> u32 {
        self.line.saturating_sub(1)
    }
}

impl std::fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.path, self.line)
    }
}

/// Removes one leading and one trailing double quote.
pub fn normalize_path(path: &str) -> &str {
    let path = path.strip_prefix('"').unwrap_or(path);
    path.strip_suffix('"').unwrap_or(path)
}

impl DocLinkMatch {
    /// The line number as an integer, defaulting to 1.
    pub fn line(&self) -> Result<u32> {
        match self.line_number.as_deref() {
            None => Ok(1),
            Some(digits) => digits
                .parse::<u32>()
                .map_err(|_| DocLinkError::LineNumberOutOfRange(digits.to_string())),
        }
    }

    pub fn target(&self) -> Result<LinkTarget> {
        Ok(LinkTarget {
            path: normalize_path(&self.file_path).to_string(),
            line: self.line()?,
        })
    }

    /// The tag without its leading and trailing marker characters, for display.
    ///
    /// `@doc` and `@doc:` both become `doc`.
    pub fn tag_label(&self) -> &str {
        self.tag_name.trim_matches(|c: char| !c.is_alphanumeric())
    }
}

/// Formats a link to `path` at `line` using the primary tag and the first
/// separator that is not a path character.
///
/// The result scans back to a single match with the same path and line.
pub fn format_link(config: &ScanConfig, path: &str, line: i64) -> Result<String> {
    if line < 1 {
        return Err(DocLinkError::InvalidLineNumber(line));
    }
    if path.is_empty() || !path.chars().all(is_path_char) {
        return Err(DocLinkError::UnlinkablePath(path.to_string()));
    }
    let separator = config.link_separator().ok_or_else(|| {
        DocLinkError::config(format!(
            "No separator in {:?} can end a path",
            config.separators()
        ))
    })?;

    Ok(format!(
        "{} {}{}{}",
        config.primary_tag(),
        path,
        separator,
        line
    ))
}

/// Inserts `link` as its own line at byte `offset` of `text`.
///
/// When the line holding `offset` already has content, the link is wrapped in
/// newlines so it does not merge with that content.
pub fn insert_link(text: &str, offset: usize, link: &str) -> String {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }

    let line_start = text[..offset].rfind('\n').map_or(0, |i| i + 1);
    let line_end = text[offset..]
        .find('\n')
        .map_or(text.len(), |i| offset + i);
    let line_has_content = !text[line_start..line_end].trim().is_empty();

    let insertion = if line_has_content {
        format!("\n{}\n", link)
    } else {
        format!("{}\n", link)
    };

    let mut result = String::with_capacity(text.len() + insertion.len());
    result.push_str(&text[..offset]);
    result.push_str(&insertion);
    result.push_str(&text[offset..]);
    result
}

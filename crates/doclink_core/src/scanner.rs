//! Documentation link scanner.
//!
//! Finds references such as `@doc ./guide.md:10` in free-form text. A link is
//! a configured tag, optional spaces, a file path, and an optional line suffix
//! made of a separator, an optional prefix character and a run of digits:
//!
//! ```text
//! @doc ./guide.md : L10
//! ^^^^ ^^^^^^^^^^ ^ ^^^
//! tag  path       | |digits
//!                 | line prefix
//!                 separator
//! ```
//!
//! Scanning is a single forward pass with no backtracking once a tag has been
//! committed, and keeps no state between calls.

use serde::Serialize;
use tracing::trace;

use crate::config::ScanConfig;
use crate::span::Span;

/// A documentation link found in text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocLinkMatch {
    /// The tag exactly as configured, e.g. `@doc`.
    pub tag_name: String,
    /// The path as written. Surrounding quotes are not removed here.
    pub file_path: String,
    /// Digits of the line number, when a valid suffix follows the path.
    pub line_number: Option<String>,
    /// Byte span from the tag start to the end of the digits, or to the end
    /// of the path when there is no line suffix.
    pub span: Span,
    /// The text covered by `span`.
    pub full_match: String,
}

impl DocLinkMatch {
    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }
}

impl std::fmt::Display for DocLinkMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DocLinkMatch{{tag={}, path={}, line={}, pos=[{},{})}}",
            self.tag_name,
            self.file_path,
            self.line_number.as_deref().unwrap_or("none"),
            self.span.start,
            self.span.end
        )
    }
}

/// Returns true for characters allowed in a link path.
///
/// ASCII letters and digits, CJK ideographs in U+4E00..=U+9FA5, and
/// `/ \ . _ -`. Never matches whitespace or newlines.
pub fn is_path_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || ('\u{4e00}'..='\u{9fa5}').contains(&c)
        || matches!(c, '/' | '\\' | '.' | '_' | '-')
}

/// Returns true for the whitespace skipped between link tokens: space and tab only.
pub fn is_inline_space(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Scans `text` for documentation links.
///
/// Matches are returned in ascending order of their start offset and never
/// overlap.
pub fn scan(text: &str, config: &ScanConfig) -> Vec<DocLinkMatch> {
    let mut matches = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let Some(tag) = find_tag(text, pos, config.tags()) else {
            break;
        };

        match parse_link(text, &tag, config) {
            Some(found) => {
                pos = found.span.end;
                matches.push(found);
            }
            None => {
                // Step past the first char of the abandoned tag.
                pos = tag.start + next_char_len(text, tag.start);
            }
        }
    }

    trace!(links = matches.len(), bytes = text.len(), "Scanned text");
    matches
}

/// Scans `text` and shifts every span by `base`.
///
/// Useful when `text` is a comment located at byte `base` of a larger file.
pub fn scan_with_offset(text: &str, base: usize, config: &ScanConfig) -> Vec<DocLinkMatch> {
    let mut matches = scan(text, config);
    for found in &mut matches {
        found.span = found.span.offset_by(base);
    }
    matches
}

struct TagMatch<'c> {
    tag: &'c str,
    start: usize,
    end: usize,
}

/// Finds the lowest position at or after `from` where any tag matches.
///
/// Tags are tried in configured order, so an earlier tag shadows a longer one
/// sharing its prefix.
fn find_tag<'c>(text: &str, from: usize, tags: &'c [String]) -> Option<TagMatch<'c>> {
    text[from..].char_indices().find_map(|(offset, _)| {
        let start = from + offset;
        let rest = &text[start..];
        tags.iter()
            .find(|tag| rest.starts_with(tag.as_str()))
            .map(|tag| TagMatch {
                tag: tag.as_str(),
                start,
                end: start + tag.len(),
            })
    })
}

fn parse_link(text: &str, tag: &TagMatch<'_>, config: &ScanConfig) -> Option<DocLinkMatch> {
    let path_start = skip_inline_space(text, tag.end);
    let path_end = take_while(text, path_start, is_path_char);
    if path_end == path_start {
        return None;
    }

    let (line_number, end) = match parse_line_suffix(text, path_end, config) {
        Some((digits, end)) => (Some(digits.to_string()), end),
        None => (None, path_end),
    };

    Some(DocLinkMatch {
        tag_name: tag.tag.to_string(),
        file_path: text[path_start..path_end].to_string(),
        line_number,
        span: Span::new(tag.start, end),
        full_match: text[tag.start..end].to_string(),
    })
}

/// Parses `[spaces] separator [spaces] [prefix] digits` starting at `pos`.
///
/// Either the whole suffix matches or nothing is consumed.
fn parse_line_suffix<'t>(
    text: &'t str,
    pos: usize,
    config: &ScanConfig,
) -> Option<(&'t str, usize)> {
    let mut pos = skip_inline_space(text, pos);

    let separator = text[pos..].chars().next()?;
    if !config.is_separator(separator) {
        return None;
    }
    pos = skip_inline_space(text, pos + separator.len_utf8());

    if let Some(prefix) = text[pos..].chars().next()
        && config.line_prefixes().contains(&prefix)
    {
        pos += prefix.len_utf8();
    }

    let digits_end = take_while(text, pos, |c| c.is_ascii_digit());
    if digits_end == pos {
        return None;
    }

    Some((&text[pos..digits_end], digits_end))
}

fn skip_inline_space(text: &str, pos: usize) -> usize {
    take_while(text, pos, is_inline_space)
}

fn take_while(text: &str, pos: usize, pred: impl Fn(char) -> bool) -> usize {
    text[pos..]
        .char_indices()
        .find(|&(_, c)| !pred(c))
        .map_or(text.len(), |(offset, _)| pos + offset)
}

fn next_char_len(text: &str, pos: usize) -> usize {
    text[pos..].chars().next().map_or(1, char::len_utf8)
}

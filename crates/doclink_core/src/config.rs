//! Scanner configuration.
//!
//! Users describe the recognized tokens as three comma-separated lists
//! ([`DocLinkSettings`]). Resolution turns them into an immutable
//! [`ScanConfig`] snapshot, falling back to the defaults whenever a list has
//! no usable entry.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use jsonc_parser::ParseOptions;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DocLinkError, Result};
use crate::scanner::is_path_char;

/// Default tag list.
pub const DEFAULT_TAG_NAMES: &str = "@doc,@markdown,@see";
/// Default separators between the path and the line number.
pub const DEFAULT_SEPARATORS: &str = ":,#";
/// Default line-number prefixes.
pub const DEFAULT_LINE_PREFIXES: &str = "L";

/// Shape of the tokens a list resolves into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Whole entries, e.g. tags.
    String,
    /// First character of each entry, e.g. separators.
    Char,
}

impl FromStr for TokenKind {
    type Err = DocLinkError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("string") {
            Ok(TokenKind::String)
        } else if s.eq_ignore_ascii_case("char") {
            Ok(TokenKind::Char)
        } else {
            Err(DocLinkError::UnknownTokenKind(s.to_string()))
        }
    }
}

/// Tokens produced by [`resolve_tokens`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTokens {
    Strings(Vec<String>),
    Chars(Vec<char>),
}

impl ResolvedTokens {
    /// Returns the tokens as strings. Characters become one-char strings.
    pub fn into_strings(self) -> Vec<String> {
        match self {
            ResolvedTokens::Strings(strings) => strings,
            ResolvedTokens::Chars(chars) => chars.into_iter().map(String::from).collect(),
        }
    }

    /// Returns the tokens as characters, keeping the first char of each string.
    pub fn into_chars(self) -> Vec<char> {
        match self {
            ResolvedTokens::Strings(strings) => {
                strings.iter().filter_map(|s| s.chars().next()).collect()
            }
            ResolvedTokens::Chars(chars) => chars,
        }
    }
}

fn split_entries(list: &str) -> Vec<&str> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Resolves a comma-separated list into tokens.
///
/// Entries are trimmed and empty ones dropped. If nothing survives, `default`
/// is resolved the same way instead. Order is preserved and duplicates are
/// kept.
pub fn resolve_tokens(raw: Option<&str>, default: &str, kind: TokenKind) -> ResolvedTokens {
    let mut entries = raw.map(split_entries).unwrap_or_default();
    if entries.is_empty() {
        entries = split_entries(default);
    }

    match kind {
        TokenKind::String => {
            ResolvedTokens::Strings(entries.into_iter().map(str::to_string).collect())
        }
        TokenKind::Char => {
            ResolvedTokens::Chars(entries.iter().filter_map(|e| e.chars().next()).collect())
        }
    }
}

/// Raw user settings: three comma-separated lists.
///
/// A `null` or missing list falls back to its default during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DocLinkSettings {
    /// Recognized tags, e.g. `"@doc,@see"`.
    #[serde(default = "default_tag_names")]
    pub tag_names: Option<String>,

    /// Separators between path and line number, e.g. `":,#"`.
    #[serde(default = "default_separators")]
    pub separators: Option<String>,

    /// Optional prefixes before the line digits, e.g. `"L"`.
    #[serde(default = "default_line_prefixes")]
    pub line_prefixes: Option<String>,
}

fn default_tag_names() -> Option<String> {
    Some(DEFAULT_TAG_NAMES.to_string())
}

fn default_separators() -> Option<String> {
    Some(DEFAULT_SEPARATORS.to_string())
}

fn default_line_prefixes() -> Option<String> {
    Some(DEFAULT_LINE_PREFIXES.to_string())
}

impl Default for DocLinkSettings {
    fn default() -> Self {
        Self {
            tag_names: default_tag_names(),
            separators: default_separators(),
            line_prefixes: default_line_prefixes(),
        }
    }
}

impl DocLinkSettings {
    /// Settings file names, in lookup order.
    pub const CONFIG_FILES: &'static [&'static str] = &[".doclink.jsonc", ".doclink.json"];

    /// Finds a settings file in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        Self::CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Loads settings from a JSON or JSONC file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| DocLinkError::config(format!("Failed to read config: {}", e)))?;
        Self::from_json(&content)
    }

    /// Parses settings from a JSON string. Comments and trailing commas are allowed.
    pub fn from_json(json: &str) -> Result<Self> {
        let value = jsonc_parser::parse_to_serde_value(json, &ParseOptions::default())
            .map_err(|e| DocLinkError::config(format!("Invalid JSON: {}", e)))?
            .unwrap_or(serde_json::Value::Object(serde_json::Map::new()));

        serde_json::from_value(value)
            .map_err(|e| DocLinkError::config(format!("Invalid config: {}", e)))
    }

    /// Renders the settings as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DocLinkError::config(format!("Failed to serialize config: {}", e)))
    }
}

/// Immutable snapshot of the tokens the scanner recognizes.
///
/// None of the three lists is ever empty. Tag order is significant: at a
/// given position the first configured tag that matches wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanConfig {
    tags: Vec<String>,
    separators: Vec<char>,
    line_prefixes: Vec<char>,
}

impl ScanConfig {
    /// Builds a snapshot from already-split token lists.
    ///
    /// An empty list is replaced by its default. Tags must not be blank.
    pub fn new(tags: Vec<String>, separators: Vec<char>, line_prefixes: Vec<char>) -> Result<Self> {
        if let Some(blank) = tags.iter().find(|tag| tag.trim().is_empty()) {
            return Err(DocLinkError::config(format!(
                "Tags must not be blank, got {:?}",
                blank
            )));
        }

        let defaults = Self::default();
        Ok(Self {
            tags: if tags.is_empty() { defaults.tags } else { tags },
            separators: if separators.is_empty() {
                defaults.separators
            } else {
                separators
            },
            line_prefixes: if line_prefixes.is_empty() {
                defaults.line_prefixes
            } else {
                line_prefixes
            },
        })
    }

    /// Resolves the three raw comma-separated lists.
    pub fn from_raw(
        tags: Option<&str>,
        separators: Option<&str>,
        line_prefixes: Option<&str>,
    ) -> Self {
        let config = Self {
            tags: resolve_tokens(tags, DEFAULT_TAG_NAMES, TokenKind::String).into_strings(),
            separators: resolve_tokens(separators, DEFAULT_SEPARATORS, TokenKind::Char)
                .into_chars(),
            line_prefixes: resolve_tokens(line_prefixes, DEFAULT_LINE_PREFIXES, TokenKind::Char)
                .into_chars(),
        };
        debug!(
            tags = config.tags.len(),
            separators = config.separators.len(),
            line_prefixes = config.line_prefixes.len(),
            "Resolved scan configuration"
        );
        config
    }

    /// Resolves user settings.
    pub fn from_settings(settings: &DocLinkSettings) -> Self {
        Self::from_raw(
            settings.tag_names.as_deref(),
            settings.separators.as_deref(),
            settings.line_prefixes.as_deref(),
        )
    }

    /// Tags in match priority order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn separators(&self) -> &[char] {
        &self.separators
    }

    pub fn line_prefixes(&self) -> &[char] {
        &self.line_prefixes
    }

    /// The tag used when writing new links.
    pub fn primary_tag(&self) -> &str {
        &self.tags[0]
    }

    /// The separator used when writing new links: the first one that cannot
    /// be read as part of a path. `None` when every separator is a path char.
    pub fn link_separator(&self) -> Option<char> {
        self.separators.iter().copied().find(|c| !is_path_char(*c))
    }

    pub fn is_separator(&self, c: char) -> bool {
        self.separators.contains(&c)
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::from_raw(None, None, None)
    }
}

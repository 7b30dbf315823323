//! # doclink_core
//!
//! Finds documentation links embedded in source comments.
//!
//! A link is a configured tag followed by a file path and an optional line
//! suffix, e.g. `// @doc docs/design.md:42` or `/** @see ./notes.md#L7 */`.
//!
//! This crate provides:
//! - The link scanner
//! - Configuration resolution and a shared configuration store
//! - Link formatting and insertion
//! - File discovery and parallel scanning
//!
//! ## Example
//!
//! ```rust,ignore
//! use doclink_core::{ScanConfig, scan};
//!
//! let config = ScanConfig::default();
//! for link in scan("// @doc docs/guide.md:12", &config) {
//!     println!("{} -> {}", link.tag_name, link.target()?);
//! }
//! ```

mod config;
mod error;
pub mod file_finder;
mod finder;
mod line_index;
mod link;
mod result;
mod scanner;
mod span;
pub mod store;

pub use config::{
    DEFAULT_LINE_PREFIXES, DEFAULT_SEPARATORS, DEFAULT_TAG_NAMES, DocLinkSettings,
    ResolvedTokens, ScanConfig, TokenKind, resolve_tokens,
};
pub use error::{DocLinkError, Result};
pub use file_finder::FileFinder;
pub use finder::{LinkFinder, ScanFilesResult};
pub use line_index::LineIndex;
pub use link::{LinkTarget, format_link, insert_link, normalize_path};
pub use result::{FileLinks, LocatedLink};
pub use scanner::{DocLinkMatch, is_inline_space, is_path_char, scan, scan_with_offset};
pub use span::{Location, Position, Span};
pub use store::{ConfigStore, SettingsSource};

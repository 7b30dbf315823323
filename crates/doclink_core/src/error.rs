//! Error types.

use thiserror::Error;

/// Errors raised around the link scanner.
///
/// Scanning itself never fails: text without a recognizable link simply
/// produces fewer matches. These variants cover configuration contracts and
/// the collaborator-side conversions in [`crate::link`].
#[derive(Debug, Error)]
pub enum DocLinkError {
    /// A token kind other than `string` or `char` was requested.
    #[error("Unknown token kind '{0}': only 'string' or 'char' are supported")]
    UnknownTokenKind(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The captured digits do not fit in a line number.
    #[error("Line number out of range: {0}")]
    LineNumberOutOfRange(String),

    /// Line numbers are 1-indexed.
    #[error("Invalid line number {0}: must be at least 1")]
    InvalidLineNumber(i64),

    /// The path would not be recognized by the scanner.
    #[error("Path cannot be written as a link: '{0}'")]
    UnlinkablePath(String),

    /// File error.
    #[error("File error: {0}")]
    File(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DocLinkError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a file error.
    pub fn file(message: impl Into<String>) -> Self {
        Self::File(message.into())
    }
}

pub type Result<T, E = DocLinkError> = std::result::Result<T, E>;

//! Per-file scan results.

use std::path::PathBuf;

use serde::Serialize;

use crate::scanner::DocLinkMatch;
use crate::span::Location;

/// A match together with its line/column location in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocatedLink {
    #[serde(flatten)]
    pub link: DocLinkMatch,
    pub location: Location,
}

/// Links found in one file.
#[derive(Debug, Clone, Serialize)]
pub struct FileLinks {
    /// Path of the scanned file.
    pub path: PathBuf,
    /// Links in order of appearance.
    pub links: Vec<LocatedLink>,
}

impl FileLinks {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            links: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }
}

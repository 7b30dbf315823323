//! Scanning files for links.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::config::ScanConfig;
use crate::error::DocLinkError;
use crate::file_finder::FileFinder;
use crate::line_index::LineIndex;
use crate::result::{FileLinks, LocatedLink};
use crate::scanner::scan;

pub type ScanFilesResult = Result<(Vec<FileLinks>, Vec<(PathBuf, DocLinkError)>), DocLinkError>;

/// Runs the scanner over files with one configuration snapshot.
pub struct LinkFinder {
    config: Arc<ScanConfig>,
    file_finder: FileFinder,
    base_dir: PathBuf,
}

impl LinkFinder {
    pub fn new(config: Arc<ScanConfig>) -> Self {
        Self {
            config,
            file_finder: FileFinder::default(),
            base_dir: PathBuf::from("."),
        }
    }

    /// Restricts discovered files with include/exclude globs.
    pub fn with_filters(
        mut self,
        include: &[String],
        exclude: &[String],
    ) -> Result<Self, DocLinkError> {
        self.file_finder = FileFinder::new(include, exclude)?;
        Ok(self)
    }

    /// Directory glob patterns are expanded against.
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scans in-memory content (no I/O).
    pub fn scan_content(&self, path: impl Into<PathBuf>, content: &str) -> FileLinks {
        let index = LineIndex::new(content);
        let mut result = FileLinks::new(path.into());

        result.links = scan(content, &self.config)
            .into_iter()
            .filter_map(|link| {
                let location = index.location(link.span)?;
                Some(LocatedLink { link, location })
            })
            .collect();

        debug!(
            "Found {} links in {}",
            result.links.len(),
            result.path.display()
        );
        result
    }

    /// Reads and scans one file. The file must be valid UTF-8.
    pub fn scan_file(&self, path: &Path) -> Result<FileLinks, DocLinkError> {
        let content = fs::read_to_string(path)
            .map_err(|e| DocLinkError::file(format!("{}: {}", path.display(), e)))?;
        Ok(self.scan_content(path, &content))
    }

    /// Scans files in parallel. Unreadable files are reported alongside the
    /// successful results instead of aborting the run.
    pub fn scan_files(&self, paths: &[PathBuf]) -> (Vec<FileLinks>, Vec<(PathBuf, DocLinkError)>) {
        let results: Vec<Result<FileLinks, (PathBuf, DocLinkError)>> = paths
            .par_iter()
            .map(|path| self.scan_file(path).map_err(|e| (path.clone(), e)))
            .collect();

        let mut successes = Vec::new();
        let mut failures = Vec::new();
        for result in results {
            match result {
                Ok(file_links) => successes.push(file_links),
                Err((path, error)) => {
                    warn!("Failed to scan {}: {}", path.display(), error);
                    failures.push((path, error));
                }
            }
        }

        (successes, failures)
    }

    /// Expands file paths and glob patterns, then scans the matching files.
    pub fn scan_patterns(&self, patterns: &[String]) -> ScanFilesResult {
        let paths = self.file_finder.discover_files(patterns, &self.base_dir)?;
        Ok(self.scan_files(&paths))
    }
}

//! Expanding file arguments into the list of files to scan.

use std::path::{Component, Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::info;
use walkdir::WalkDir;

use crate::error::{DocLinkError, Result};

/// Resolves file arguments and glob patterns, applying include/exclude filters.
#[derive(Default)]
pub struct FileFinder {
    include: Option<GlobSet>,
    exclude: Option<GlobSet>,
}

impl FileFinder {
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self> {
        Ok(Self {
            include: compile_globs(include)?,
            exclude: compile_globs(exclude)?,
        })
    }

    /// Whether `path` is filtered out. An exclude match always wins.
    pub fn should_ignore(&self, path: &Path) -> bool {
        let excluded = self.exclude.as_ref().is_some_and(|set| set.is_match(path));
        let not_included = self.include.as_ref().is_some_and(|set| !set.is_match(path));
        excluded || not_included
    }

    /// Expands `patterns` relative to `base_dir`.
    ///
    /// An argument naming an existing file under `base_dir` is taken as is;
    /// anything else is a glob matched against the files under `base_dir`.
    /// Paths are returned without `.` components, so a file reached both
    /// ways is listed once. The result is sorted.
    pub fn discover_files(&self, patterns: &[String], base_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let mut globs = Vec::new();

        for pattern in patterns {
            let path = base_dir.join(pattern);
            if path.is_file() {
                if !self.should_ignore(relative_to(&path, base_dir)) {
                    files.push(without_cur_dir(&path));
                }
            } else {
                globs.push(pattern.as_str());
            }
        }

        if let Some(matcher) = compile_globs(&globs)? {
            files.extend(self.walk(base_dir, &matcher));
        }

        files.sort();
        files.dedup();

        info!("Discovered {} files to scan", files.len());
        Ok(files)
    }

    fn walk<'a>(
        &'a self,
        base_dir: &'a Path,
        matcher: &'a GlobSet,
    ) -> impl Iterator<Item = PathBuf> + 'a {
        WalkDir::new(base_dir)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(move |entry| {
                let path = entry.path();
                // Filters are written relative to the base directory.
                let relative = relative_to(path, base_dir);
                let keep = (matcher.is_match(path) || matcher.is_match(relative))
                    && !self.should_ignore(relative);
                keep.then(|| without_cur_dir(path))
            })
    }
}

fn relative_to<'p>(path: &'p Path, base_dir: &Path) -> &'p Path {
    path.strip_prefix(base_dir).unwrap_or(path)
}

/// Drops `.` components: `./src/lib.rs` becomes `src/lib.rs`.
fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

fn compile_globs<S: AsRef<str>>(patterns: &[S]) -> Result<Option<GlobSet>> {
    if patterns.is_empty() {
        return Ok(None);
    }

    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        let glob = Glob::new(pattern).map_err(|e| {
            DocLinkError::config(format!("Invalid glob pattern '{}': {}", pattern, e))
        })?;
        builder.add(glob);
    }

    builder
        .build()
        .map(Some)
        .map_err(|e| DocLinkError::config(format!("Failed to build globset: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_compile_globs_empty() {
        assert!(compile_globs::<String>(&[]).unwrap().is_none());
    }

    #[test]
    fn test_compile_globs_invalid_pattern() {
        let err = compile_globs(&["[invalid"]).unwrap_err();
        assert!(err.to_string().contains("[invalid"));
    }

    #[test]
    fn test_should_ignore() {
        let finder =
            FileFinder::new(&["**/*.rs".to_string()], &["target/**".to_string()]).unwrap();

        assert!(!finder.should_ignore(Path::new("src/lib.rs")));
        assert!(finder.should_ignore(Path::new("target/debug/build.rs")));
        assert!(finder.should_ignore(Path::new("README.md")));
        assert!(!FileFinder::default().should_ignore(Path::new("README.md")));
    }

    #[test]
    fn test_without_cur_dir() {
        assert_eq!(without_cur_dir(Path::new("./src/lib.rs")), Path::new("src/lib.rs"));
        assert_eq!(without_cur_dir(Path::new("src/lib.rs")), Path::new("src/lib.rs"));
        assert_eq!(without_cur_dir(Path::new("/tmp/./a.rs")), Path::new("/tmp/a.rs"));
    }

    #[test]
    fn test_discover_files_with_glob() {
        let temp_dir = tempdir().unwrap();
        let src = temp_dir.path().join("src");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("lib.rs"), "// @doc a.md").unwrap();
        fs::write(src.join("notes.txt"), "@doc b.md").unwrap();

        let files = FileFinder::default()
            .discover_files(&["**/*.rs".to_string()], temp_dir.path())
            .unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("src/lib.rs"));
    }

    #[test]
    fn test_discover_files_respects_exclude() {
        let temp_dir = tempdir().unwrap();
        let vendor = temp_dir.path().join("vendor");
        fs::create_dir(&vendor).unwrap();
        fs::write(temp_dir.path().join("main.rs"), "").unwrap();
        fs::write(vendor.join("dep.rs"), "").unwrap();

        let finder = FileFinder::new(&[], &["vendor/**".to_string()]).unwrap();
        let files = finder
            .discover_files(&["**/*.rs".to_string()], temp_dir.path())
            .unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("main.rs"));
    }

    #[test]
    fn test_discover_literal_file_and_dedup() {
        let temp_dir = tempdir().unwrap();
        let file = temp_dir.path().join("a.rs");
        fs::write(&file, "").unwrap();
        let literal = file.to_string_lossy().to_string();

        let files = FileFinder::default()
            .discover_files(&[literal.clone(), literal], temp_dir.path())
            .unwrap();

        assert_eq!(files, vec![file]);
    }

    #[test]
    fn test_relative_literal_resolves_against_base_dir() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("src")).unwrap();
        fs::write(temp_dir.path().join("src/lib.rs"), "").unwrap();

        let files = FileFinder::default()
            .discover_files(&["src/lib.rs".to_string()], temp_dir.path())
            .unwrap();

        assert_eq!(files, vec![temp_dir.path().join("src/lib.rs")]);
    }

    #[test]
    fn test_literal_and_glob_overlap_once() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("src")).unwrap();
        fs::write(temp_dir.path().join("src/lib.rs"), "").unwrap();

        let files = FileFinder::default()
            .discover_files(
                &["src/lib.rs".to_string(), "**/*.rs".to_string()],
                temp_dir.path(),
            )
            .unwrap();

        assert_eq!(files, vec![temp_dir.path().join("src/lib.rs")]);
    }
}

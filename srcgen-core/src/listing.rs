//! Relative-path listing model for srcgen-core

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::discovery::SourceFileRef;

/// One file in the listing, relative to the project root with `/` separators.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SourceEntry {
    pub path: String,
}

/// Sorted, deduplicated roll call of relative source paths.
///
/// Built fresh on every run; the ordering is what makes repeated runs
/// byte-identical across platforms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceListing {
    pub entries: Vec<SourceEntry>,
}

impl SourceListing {
    /// Relativize, normalize, sort, and dedup the discovered files.
    pub fn from_files(files: &[SourceFileRef], base: &Path) -> Self {
        let mut paths: Vec<String> = files.iter().map(|f| relativize(&f.path, base)).collect();
        paths.sort_unstable();
        paths.dedup();

        Self {
            entries: paths.into_iter().map(|path| SourceEntry { path }).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate the relative paths as plain strings.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.path.as_str())
    }
}

/// Express `path` relative to `base`, normalized to `/` separators.
///
/// A path outside `base` is kept whole rather than rejected, so callers
/// can point the walker anywhere without the listing going empty.
pub fn relativize(path: &Path, base: &Path) -> String {
    match path.strip_prefix(base) {
        Ok(rel) => slashed(rel),
        Err(_) => slashed(path),
    }
}

/// Render a path with `/` separators regardless of platform.
fn slashed(path: &Path) -> String {
    let rendered = path.display().to_string();
    if std::path::MAIN_SEPARATOR == '/' {
        rendered
    } else {
        rendered.replace(std::path::MAIN_SEPARATOR, "/")
    }
}

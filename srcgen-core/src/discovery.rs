//! Recursive source-tree walking helpers for srcgen-core

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use walkdir::{DirEntry, WalkDir};

/// Path to a candidate source file, as found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFileRef {
    pub path: PathBuf,
}

/// Trait for enumerating source files from some backing store (filesystem, archive, etc.).
pub trait SourceDiscovery {
    fn discover(&self) -> Result<Vec<SourceFileRef>>;
}

/// Recursive filesystem walker that collects every regular file.
#[derive(Debug, Clone)]
pub struct TreeDiscovery {
    roots: Vec<PathBuf>,
    follow_symlinks: bool,
    include_hidden: bool,
}

impl TreeDiscovery {
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let roots = roots.into_iter().map(Into::into).collect();
        Self {
            roots,
            follow_symlinks: false,
            include_hidden: false,
        }
    }

    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    pub fn include_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }
}

impl SourceDiscovery for TreeDiscovery {
    fn discover(&self) -> Result<Vec<SourceFileRef>> {
        let mut found = Vec::new();

        for root in &self.roots {
            if !root.exists() {
                return Err(anyhow!("source root does not exist: {}", root.display()));
            }

            let include_hidden = self.include_hidden;
            let walker = WalkDir::new(root)
                .follow_links(self.follow_symlinks)
                .into_iter()
                .filter_entry(move |entry| include_hidden || !is_hidden(entry));

            for entry in walker {
                let entry = entry?;
                if entry.file_type().is_file() {
                    found.push(SourceFileRef {
                        path: entry.path().to_path_buf(),
                    });
                }
            }
        }

        Ok(found)
    }
}

/// A dot-prefixed name anywhere below the walk root counts as hidden.
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|name| name.starts_with('.'))
            .unwrap_or(false)
}

//! One-shot generate pipeline: walk, render, overwrite

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::discovery::{SourceDiscovery, TreeDiscovery};
use crate::listing::SourceListing;
use crate::render::{render_block, render_template};

/// Where to read from and where to write to.
///
/// Every relative member is resolved against `project_root`, so the same
/// config works from any working directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateConfig {
    pub project_root: PathBuf,
    pub source_roots: Vec<PathBuf>,
    pub template_path: PathBuf,
    pub output_path: PathBuf,
    pub indent: String,
    pub follow_symlinks: bool,
    pub include_hidden: bool,
}

impl Default for GenerateConfig {
    /// The layout the generator grew up with: a `Source/` tree next to a
    /// CMake template, tab-indented listing.
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            source_roots: vec![PathBuf::from("Source")],
            template_path: PathBuf::from("CMakeLists.txt.source"),
            output_path: PathBuf::from("CMakeLists.txt"),
            indent: "\t".to_string(),
            follow_symlinks: false,
            include_hidden: false,
        }
    }
}

impl GenerateConfig {
    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }
}

/// Outcome of a `generate` run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateReport {
    pub output_path: PathBuf,
    pub files: Vec<String>,
    pub placeholders_replaced: usize,
}

/// Freshness verdict from [`check`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub up_to_date: bool,
}

/// Walk the configured roots and build the listing relative to the project root.
pub fn list_sources(config: &GenerateConfig) -> Result<SourceListing> {
    let roots: Vec<PathBuf> = config.source_roots.iter().map(|r| config.resolve(r)).collect();
    let discovery = TreeDiscovery::new(roots)
        .follow_symlinks(config.follow_symlinks)
        .include_hidden(config.include_hidden);
    let files = discovery.discover()?;

    Ok(SourceListing::from_files(&files, &config.project_root))
}

fn render_output(config: &GenerateConfig) -> Result<(String, GenerateReport)> {
    let listing = list_sources(config)?;

    let template_path = config.resolve(&config.template_path);
    let template = fs::read_to_string(&template_path)
        .with_context(|| format!("reading template {}", template_path.display()))?;

    let block = render_block(&listing, &config.indent);
    let rendered = render_template(&template, &block)?;

    let report = GenerateReport {
        output_path: config.resolve(&config.output_path),
        files: listing.paths().map(str::to_string).collect(),
        placeholders_replaced: rendered.replaced,
    };

    Ok((rendered.text, report))
}

/// Run the one-shot transform and overwrite the output file.
///
/// No backup, no atomic rename: the output is a generated artifact that
/// the next run rebuilds in full.
pub fn generate(config: &GenerateConfig) -> Result<GenerateReport> {
    let (text, report) = render_output(config)?;

    fs::write(&report.output_path, text)
        .with_context(|| format!("writing {}", report.output_path.display()))?;

    Ok(report)
}

/// Render in memory and compare against the current output file.
///
/// A missing output counts as stale; nothing is written either way.
pub fn check(config: &GenerateConfig) -> Result<CheckOutcome> {
    let (text, report) = render_output(config)?;

    let current = match fs::read_to_string(&report.output_path) {
        Ok(current) => current,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(CheckOutcome { up_to_date: false });
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("reading {}", report.output_path.display()));
        }
    };

    Ok(CheckOutcome {
        up_to_date: current == text,
    })
}

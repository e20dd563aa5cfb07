//! Build-pipeline integration seam
//!
//! This module defines the narrow plugin contract the docs build exposes to
//! its host: a transform invoked once per emitted page during the
//! asset-generation phase. Plugins depend on this local trait rather than on
//! any particular site generator's API.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// One emitted output artifact, held in memory while plugins run.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    /// Path of the artifact inside the build output directory
    pub path: PathBuf,
    /// Current contents; plugins rewrite this in place
    pub contents: String,
}

impl RenderedPage {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        RenderedPage {
            path: path.into(),
            contents: contents.into(),
        }
    }
}

/// Build-output transform contract.
///
/// Implementors must be `Send + Sync`: a host that renders pages in
/// parallel shares one plugin instance read-only across all passes, so any
/// state a plugin carries (like a resolved version string) is computed once
/// at construction and never mutated during a build.
pub trait BuildPlugin: Send + Sync {
    /// Stable plugin name, used in error and summary output
    fn name(&self) -> &str;

    /// Apply the transform to a single page.
    ///
    /// Returns the number of edits made. Zero is a successful no-op; a page
    /// the plugin has nothing to do with is not an error.
    fn apply(&self, page: &mut RenderedPage) -> Result<usize>;
}

/// Per-plugin outcome of a pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct PluginReport {
    pub plugin: String,
    /// Pages the plugin actually edited
    pub pages_touched: usize,
    /// Total edits across all pages
    pub edits: usize,
}

/// Ordered plugin registry.
///
/// Plugins run in registration order, each over every page, once per build.
#[derive(Default)]
pub struct Pipeline {
    plugins: Vec<Box<dyn BuildPlugin>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Pipeline::default()
    }

    /// Register a plugin. Order of registration is order of execution.
    pub fn register(&mut self, plugin: Box<dyn BuildPlugin>) {
        self.plugins.push(plugin);
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Run every registered plugin over every page.
    ///
    /// The first plugin error aborts the run; pages already rewritten stay
    /// rewritten in memory but nothing has been flushed to disk yet.
    pub fn run(&self, pages: &mut [RenderedPage]) -> Result<Vec<PluginReport>> {
        let mut reports = Vec::with_capacity(self.plugins.len());

        for plugin in &self.plugins {
            let mut pages_touched = 0;
            let mut edits = 0;

            for page in pages.iter_mut() {
                let count = plugin.apply(page)?;
                if count > 0 {
                    pages_touched += 1;
                    edits += count;
                }
            }

            reports.push(PluginReport {
                plugin: plugin.name().to_string(),
                pages_touched,
                edits,
            });
        }

        Ok(reports)
    }
}

/// Collects rendered pages from a build output directory.
///
/// Walks the directory recursively and loads every file whose extension is
/// in `extensions` (compared case-insensitively, without the dot).
///
/// # Arguments
/// * `out_dir` - Root of the build output
/// * `extensions` - File extensions to load (e.g. `["html"]`)
pub fn collect_pages(out_dir: &Path, extensions: &[String]) -> Result<Vec<RenderedPage>> {
    let mut pages = Vec::new();
    walk(out_dir, extensions, &mut pages)?;
    // Deterministic order regardless of directory iteration order
    pages.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(pages)
}

fn walk(dir: &Path, extensions: &[String], pages: &mut Vec<RenderedPage>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            walk(&path, extensions, pages)?;
        } else if has_matching_extension(&path, extensions) {
            let contents = fs::read_to_string(&path)?;
            pages.push(RenderedPage::new(path, contents));
        }
    }
    Ok(())
}

fn has_matching_extension(path: &Path, extensions: &[String]) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)),
        None => false,
    }
}

/// Write pages back into the build output. Only called by the driver after
/// a successful pipeline run; writes never leave the output directory
/// because page paths originate from [`collect_pages`].
pub fn write_pages(pages: &[RenderedPage]) -> Result<()> {
    for page in pages {
        fs::write(&page.path, &page.contents)?;
    }
    Ok(())
}

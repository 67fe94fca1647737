//! Ties traversal, rendering, and the marker splice together.

use std::fs;
use std::path::{Path, PathBuf};

use crate::analyze::collect_modules;
use crate::error::{AutoindexError, Result};
use crate::generate::{render_directives, splice};
use crate::scan::scan_directory;
use crate::types::ModuleMap;

/// Keeps a Sphinx index file synchronized with the modules and classes a
/// project defines.
#[derive(Debug)]
pub struct Autoindexer {
    project_root: PathBuf,
    index_path: PathBuf,
    prefixes: Vec<String>,
}

/// Outcome of a [`Autoindexer::run`] write-back.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub modules: usize,
    pub classes: usize,
    /// False when the index already matched the generated content
    pub changed: bool,
}

/// Outcome of a read-only [`Autoindexer::check`].
#[derive(Debug, Clone, Copy)]
pub struct IndexStatus {
    pub up_to_date: bool,
    pub modules: usize,
    pub classes: usize,
}

impl Autoindexer {
    /// Validate the paths up front: the project root must be an existing
    /// directory and the index file must already exist. No traversal or
    /// other file I/O happens here.
    pub fn new(project_root: &Path, index_path: &Path, prefixes: Vec<String>) -> Result<Self> {
        if !project_root.is_dir() {
            return Err(AutoindexError::ProjectRootNotFound(
                project_root.to_path_buf(),
            ));
        }
        if !index_path.is_file() {
            return Err(AutoindexError::IndexFileNotFound(index_path.to_path_buf()));
        }

        Ok(Self {
            project_root: project_root.to_path_buf(),
            index_path: index_path.to_path_buf(),
            prefixes,
        })
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn index_path(&self) -> &Path {
        &self.index_path
    }

    /// Walk the project and build the module → classes map.
    pub fn module_map(&self) -> Result<ModuleMap> {
        let files = scan_directory(&self.project_root)?;
        collect_modules(&files, &self.prefixes)
    }

    /// Generated region content, without touching the index file.
    pub fn render(&self) -> Result<String> {
        Ok(render_directives(&self.module_map()?))
    }

    /// Regenerate the index file in place.
    pub fn run(&self) -> Result<RunSummary> {
        let map = self.module_map()?;
        let (existing, updated) = self.splice_current(&map)?;

        let changed = updated != existing;
        if changed {
            fs::write(&self.index_path, &updated).map_err(|source| {
                AutoindexError::WriteFile {
                    path: self.index_path.clone(),
                    source,
                }
            })?;
        }

        Ok(RunSummary {
            modules: map.len(),
            classes: count_classes(&map),
            changed,
        })
    }

    /// Compare the index file against what generation would produce.
    pub fn check(&self) -> Result<IndexStatus> {
        let map = self.module_map()?;
        let (existing, updated) = self.splice_current(&map)?;

        Ok(IndexStatus {
            up_to_date: updated == existing,
            modules: map.len(),
            classes: count_classes(&map),
        })
    }

    fn splice_current(&self, map: &ModuleMap) -> Result<(String, String)> {
        let existing = fs::read_to_string(&self.index_path).map_err(|source| {
            AutoindexError::ReadFile {
                path: self.index_path.clone(),
                source,
            }
        })?;
        let updated = splice(&self.index_path, &existing, &render_directives(map))?;
        Ok((existing, updated))
    }
}

fn count_classes(map: &ModuleMap) -> usize {
    map.values().map(|classes| classes.len()).sum()
}

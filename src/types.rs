//! Shared types for traversal and module discovery.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// A Python source file discovered under the project root.
#[derive(Debug, Clone, Serialize)]
pub struct FileEntry {
    /// Absolute path on disk
    pub path: PathBuf,
    /// Path relative to the project root, forward slashes, no leading "./"
    pub relative_path: String,
}

impl FileEntry {
    pub fn new(path: PathBuf, relative_path: String) -> Self {
        Self {
            path,
            relative_path,
        }
    }

    /// File name component of the relative path
    pub fn file_name(&self) -> &str {
        self.relative_path
            .rsplit('/')
            .next()
            .unwrap_or(&self.relative_path)
    }
}

/// Dotted module name → class names defined in that module.
///
/// BTree containers keep modules and classes in sorted order, which is the
/// order the renderer emits directives in.
pub type ModuleMap = BTreeMap<String, BTreeSet<String>>;

//! Importable-module discovery.
//!
//! Maps the scanned file list onto Python's import rules: a directory is a
//! package iff it holds `__init__.py`, and a file is importable only when
//! every directory between it and the project root is a package.

use std::collections::BTreeSet;
use std::fs;

use crate::analyze::extract_classes;
use crate::error::{AutoindexError, Result};
use crate::types::{FileEntry, ModuleMap};

/// Apply the dotted-name prefix filter.
///
/// An empty prefix list includes every module.
pub fn include_module(name: &str, prefixes: &[String]) -> bool {
    prefixes.is_empty() || prefixes.iter().any(|p| name.starts_with(p.as_str()))
}

/// Build the dotted-module → classes map from the scanned file list.
///
/// Packages map to the classes their `__init__.py` defines (usually none),
/// plain modules to their own top-level classes. Modules without classes
/// still get an entry with an empty set.
pub fn collect_modules(files: &[FileEntry], prefixes: &[String]) -> Result<ModuleMap> {
    let packages: BTreeSet<&str> = files
        .iter()
        .filter(|f| f.file_name() == "__init__.py")
        .map(|f| parent_dir(&f.relative_path))
        .collect();

    let mut map = ModuleMap::new();

    for file in files {
        let Some(name) = module_name(&file.relative_path, &packages) else {
            continue;
        };
        if !include_module(&name, prefixes) {
            continue;
        }

        let content = fs::read_to_string(&file.path).map_err(|source| {
            AutoindexError::ReadFile {
                path: file.path.clone(),
                source,
            }
        })?;

        map.insert(name, extract_classes(&content).into_iter().collect());
    }

    Ok(map)
}

/// Dotted import path for a file, or None when it is not importable.
fn module_name(relative_path: &str, packages: &BTreeSet<&str>) -> Option<String> {
    let dir = parent_dir(relative_path);

    // Every ancestor directory must be a package.
    let mut prefix = String::new();
    for component in dir.split('/').filter(|c| !c.is_empty()) {
        if !is_identifier(component) {
            return None;
        }
        if !prefix.is_empty() {
            prefix.push('/');
        }
        prefix.push_str(component);
        if !packages.contains(prefix.as_str()) {
            return None;
        }
    }

    let file_name = relative_path.rsplit('/').next().unwrap_or(relative_path);
    if file_name == "__init__.py" {
        // The package itself; the root directory is not a named package.
        if dir.is_empty() {
            return None;
        }
        return Some(dir.replace('/', "."));
    }

    let stem = file_name.strip_suffix(".py")?;
    if !is_identifier(stem) {
        return None;
    }

    if dir.is_empty() {
        Some(stem.to_string())
    } else {
        Some(format!("{}.{}", dir.replace('/', "."), stem))
    }
}

fn parent_dir(relative_path: &str) -> &str {
    match relative_path.rfind('/') {
        Some(idx) => &relative_path[..idx],
        None => "",
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

use ignore::WalkBuilder;
use std::path::Path;

use crate::error::Result;
use crate::scan::should_include_file;
use crate::types::FileEntry;

/// Walk the project root and collect every Python source file.
///
/// Hidden entries are skipped, symlinks are not followed, and results come
/// back sorted by path so a fixed tree always produces the same entry order.
pub fn scan_directory(root: &Path) -> Result<Vec<FileEntry>> {
    let mut entries = Vec::new();

    let walker = WalkBuilder::new(root)
        .hidden(true)
        .git_ignore(true)
        .follow_links(false)
        .sort_by_file_path(|a, b| a.cmp(b))
        .build();

    for result in walker {
        let entry = result?;
        if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        if !should_include_file(relative) {
            continue;
        }

        let relative_path = relative
            .components()
            .filter_map(|c| c.as_os_str().to_str())
            .collect::<Vec<_>>()
            .join("/");

        entries.push(FileEntry::new(path.to_path_buf(), relative_path));
    }

    Ok(entries)
}

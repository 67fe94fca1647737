use std::path::Path;

/// Directories that never contain importable source
const SKIP_DIRS: &[&str] = &[
    "__pycache__",
    "node_modules",
    "venv",
    ".venv",
    "env",
    "build",
    "dist",
    "site-packages",
];

/// Decide whether a path discovered during traversal is a Python source
/// file worth analyzing.
///
/// Hidden entries are already skipped by the walker; this rejects
/// non-Python files and anything under a vendored or generated directory.
pub fn should_include_file(path: &Path) -> bool {
    if path.extension().and_then(|e| e.to_str()) != Some("py") {
        return false;
    }

    !path.components().any(|c| {
        c.as_os_str()
            .to_str()
            .map(|name| SKIP_DIRS.contains(&name) || name.ends_with(".egg-info"))
            .unwrap_or(true)
    })
}

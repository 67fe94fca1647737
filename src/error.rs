use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by index generation.
#[derive(Debug, Error)]
pub enum AutoindexError {
    /// Project root missing or not a directory; raised at construction time
    #[error("project root is not a directory: {0}")]
    ProjectRootNotFound(PathBuf),

    /// Target index file missing; raised at construction time
    #[error("index file does not exist: {0}")]
    IndexFileNotFound(PathBuf),

    /// The index file is not prepared for generation
    #[error("marker `{marker}` not found in {path}")]
    MarkerNotFound { marker: &'static str, path: PathBuf },

    /// End marker seen before the start marker
    #[error("end marker precedes start marker in {0}")]
    MarkersOutOfOrder(PathBuf),

    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("traversal failed: {0}")]
    Walk(#[from] ignore::Error),
}

pub type Result<T> = std::result::Result<T, AutoindexError>;

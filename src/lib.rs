//! Keep a Sphinx `index.rst` synchronized with a Python codebase.
//!
//! The pipeline is deliberately small: [`scan`] walks the project root and
//! collects Python source files, [`analyze`] derives the importable dotted
//! module names and the classes each module defines, [`generate`] renders
//! `automodule`/`autoclass` directive blocks and splices them into the
//! region of the index file delimited by the
//! [`START_MARKER`](generate::START_MARKER) and
//! [`END_MARKER`](generate::END_MARKER) comment lines. [`Autoindexer`]
//! ties the steps together.

pub mod analyze;
pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod generate;
pub mod indexer;
pub mod scan;
pub mod types;

pub use error::{AutoindexError, Result};
pub use indexer::{Autoindexer, IndexStatus, RunSummary};
pub use types::{FileEntry, ModuleMap};

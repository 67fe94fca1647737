use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the project root when `--config` is not given
pub const CONFIG_FILE_NAME: &str = "autoindex.toml";

/// Per-project configuration, all fields optional. CLI flags win over
/// config values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Index file location, relative to the project root
    #[serde(default)]
    pub index: Option<PathBuf>,

    /// Dotted-name prefixes to include; empty means everything
    #[serde(default)]
    pub prefixes: Vec<String>,
}

impl Config {
    /// Load an explicit config file, or the default `autoindex.toml` under
    /// the project root if present. Absence of the default file is not an
    /// error; a malformed file always is.
    pub fn load(project_root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let default = project_root.join(CONFIG_FILE_NAME);
                if !default.is_file() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Resolve the index path against the project root, falling back to the
    /// conventional `docs/index.rst`.
    pub fn index_path(&self, project_root: &Path) -> PathBuf {
        let relative = self
            .index
            .clone()
            .unwrap_or_else(|| PathBuf::from("docs/index.rst"));
        if relative.is_absolute() {
            relative
        } else {
            project_root.join(relative)
        }
    }
}

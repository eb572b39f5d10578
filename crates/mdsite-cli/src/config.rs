//! Site configuration, loaded from an optional TOML file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Result, SiteError};

/// Where to read pages and assets from, and where to write the site
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory of Markdown pages
    pub content_dir: PathBuf,

    /// Directory of assets copied as-is
    pub static_dir: PathBuf,

    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders
    pub template: PathBuf,

    /// Output directory, cleared before every build
    pub output_dir: PathBuf,

    /// Prefix replacing the leading `/` of root-relative links
    pub base_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            template: PathBuf::from("template.html"),
            output_dir: PathBuf::from("public"),
            base_path: "/".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load a config file; fields missing from the file keep their defaults
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();
        let content = fs::read_to_string(config_path).map_err(|source| SiteError::Io {
            path: config_path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| SiteError::Config {
            path: config_path.to_path_buf(),
            source,
        })
    }

    /// Base path with exactly one trailing `/`
    pub fn normalized_base_path(&self) -> String {
        normalize_base_path(&self.base_path)
    }
}

/// Make sure a base path ends with `/`; an empty path becomes `/`
pub fn normalize_base_path(base_path: &str) -> String {
    let trimmed = base_path.trim().trim_end_matches('/');
    format!("{trimmed}/")
}

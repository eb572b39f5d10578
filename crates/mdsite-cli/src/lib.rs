//! # mdsite-cli
//!
//! Build a static HTML site from a directory of Markdown pages.
//!
//! Every `*.md` file under the content directory is converted with
//! [`mdsite::convert`], placed into an HTML template and written to the same
//! relative path under the output directory with an `.html` extension.
//! Static assets are copied over unchanged.
//!
//! Templates use two placeholders:
//!
//! - `{{ Title }}`: the text of the page's first `# ` heading
//! - `{{ Content }}`: the converted page body
//!
//! Root-relative `href="/` and `src="/` references are rewritten to the
//! configured base path, so a site can be served from a sub-directory.

pub mod config;
pub mod site;

use std::path::PathBuf;

pub use config::SiteConfig;
pub use site::{build_site, BuildSummary};

/// Error raised while rendering a single page
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("no title found: expected a line starting with \"# \"")]
    MissingTitle,

    #[error(transparent)]
    Convert(#[from] mdsite::Error),
}

/// Error type for site generation
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to render {}: {source}", path.display())]
    Render { path: PathBuf, source: RenderError },

    #[error("failed to parse config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(
        "output directory {} would overwrite build input {}",
        output.display(),
        input.display()
    )]
    OutputOverlapsInput { output: PathBuf, input: PathBuf },
}

pub type Result<T> = std::result::Result<T, SiteError>;

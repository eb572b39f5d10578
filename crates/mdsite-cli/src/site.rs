//! Page rendering and site generation.
//!
//! All functions take their source and destination paths explicitly; nothing
//! depends on the process working directory.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::{RenderError, Result, SiteError};

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Counts from a finished build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildSummary {
    pub static_files: usize,
    pub pages: usize,
}

/// Get the page title from the first line starting with `# `
pub fn extract_title(markdown: &str) -> Option<String> {
    markdown
        .lines()
        .find(|line| line.starts_with("# "))
        .map(|line| line.trim_start_matches('#').trim().to_string())
}

/// Point root-relative `href` and `src` attributes at `base_path`
///
/// `base_path` is expected to end with `/`.
pub fn rewrite_base_path(html: &str, base_path: &str) -> String {
    html.replace("href=\"/", &format!("href=\"{base_path}"))
        .replace("src=\"/", &format!("src=\"{base_path}"))
}

/// Render one Markdown page into a template
pub fn render_page(
    markdown: &str,
    template: &str,
    base_path: &str,
) -> std::result::Result<String, RenderError> {
    let content = mdsite::convert(markdown)?;
    let title = extract_title(markdown).ok_or(RenderError::MissingTitle)?;

    let page = template
        .replace(TITLE_PLACEHOLDER, &title)
        .replace(CONTENT_PLACEHOLDER, &content);
    Ok(rewrite_base_path(&page, base_path))
}

/// Remove `dir` if it exists and create it again, empty
pub fn reset_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        log::debug!("Removing {}", dir.display());
        fs::remove_dir_all(dir).map_err(io_error(dir))?;
    }
    fs::create_dir_all(dir).map_err(io_error(dir))
}

/// Recursively copy every file under `src` into `dst`
///
/// Symlinks to files are copied as regular files. Symlinks to directories are
/// skipped, so a link cycle cannot recurse forever.
///
/// Returns the number of files copied.
pub fn copy_static(src: &Path, dst: &Path) -> Result<usize> {
    fs::create_dir_all(dst).map_err(io_error(dst))?;

    let mut copied = 0;
    for from in sorted_entries(src)? {
        let Some(name) = from.file_name() else {
            continue;
        };
        let to = dst.join(name);

        match entry_kind(&from)? {
            EntryKind::Dir => {
                log::debug!("Entering {}", from.display());
                copied += copy_static(&from, &to)?;
            }
            EntryKind::DirLink => {
                log::warn!("Skipping {}: symlink to a directory", from.display());
            }
            EntryKind::File => {
                fs::copy(&from, &to).map_err(io_error(&from))?;
                log::info!("Copied {} -> {}", from.display(), to.display());
                copied += 1;
            }
        }
    }

    Ok(copied)
}

/// Render the Markdown file at `from` into `template_path` and write it to `dest`
pub fn generate_page(
    from: &Path,
    template_path: &Path,
    dest: &Path,
    base_path: &str,
) -> Result<()> {
    let template = read_file(template_path)?;
    write_page(from, &template, dest, base_path)
}

/// Render every `*.md` file under `content_dir` into the mirrored path under
/// `dest_dir`, with an `.html` extension
///
/// Returns the number of pages written. Other files are skipped.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    base_path: &str,
) -> Result<usize> {
    let template = read_file(template_path)?;
    generate_dir(content_dir, &template, dest_dir, base_path)
}

/// Clear the output directory, copy static assets and generate every page
///
/// Fails without touching the filesystem if the output directory is, or
/// contains, the content directory, the static directory or the template.
pub fn build_site(config: &SiteConfig) -> Result<BuildSummary> {
    let base_path = config.normalized_base_path();
    check_output_dir(config)?;
    reset_dir(&config.output_dir)?;

    let static_files = if config.static_dir.is_dir() {
        copy_static(&config.static_dir, &config.output_dir)?
    } else {
        log::warn!(
            "Static directory {} not found, skipping",
            config.static_dir.display()
        );
        0
    };

    let pages = generate_pages_recursive(
        &config.content_dir,
        &config.template,
        &config.output_dir,
        &base_path,
    )?;

    Ok(BuildSummary {
        static_files,
        pages,
    })
}

/// Refuse an output directory that would be cleared along with a build input
fn check_output_dir(config: &SiteConfig) -> Result<()> {
    let output = resolve_path(&config.output_dir)?;

    let mut inputs = vec![&config.content_dir, &config.template];
    if config.static_dir.exists() {
        inputs.push(&config.static_dir);
    }

    for input in inputs {
        let resolved = input.canonicalize().map_err(io_error(input))?;
        if resolved.starts_with(&output) {
            return Err(SiteError::OutputOverlapsInput {
                output: config.output_dir.clone(),
                input: input.clone(),
            });
        }
    }
    Ok(())
}

/// Canonical form of `path`, which may not exist yet
///
/// The longest existing ancestor is canonicalized and the missing components
/// are joined back on.
fn resolve_path(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path).map_err(io_error(path))?;

    for ancestor in absolute.ancestors() {
        let Ok(resolved) = ancestor.canonicalize() else {
            continue;
        };
        return Ok(match absolute.strip_prefix(ancestor) {
            Ok(rest) if !rest.as_os_str().is_empty() => resolved.join(rest),
            _ => resolved,
        });
    }
    Ok(absolute)
}

enum EntryKind {
    Dir,
    DirLink,
    File,
}

/// Classify a directory entry without following a symlink into a directory
fn entry_kind(path: &Path) -> Result<EntryKind> {
    let file_type = fs::symlink_metadata(path)
        .map_err(io_error(path))?
        .file_type();

    Ok(if file_type.is_dir() {
        EntryKind::Dir
    } else if file_type.is_symlink() && path.is_dir() {
        EntryKind::DirLink
    } else {
        EntryKind::File
    })
}

fn generate_dir(src: &Path, template: &str, dst: &Path, base_path: &str) -> Result<usize> {
    let mut generated = 0;

    for from in sorted_entries(src)? {
        let Some(name) = from.file_name() else {
            continue;
        };

        match entry_kind(&from)? {
            EntryKind::Dir => {
                log::debug!("Entering {}", from.display());
                generated += generate_dir(&from, template, &dst.join(name), base_path)?;
            }
            EntryKind::DirLink => {
                log::warn!("Skipping {}: symlink to a directory", from.display());
            }
            EntryKind::File if from.extension() == Some(OsStr::new("md")) => {
                let dest = dst.join(name).with_extension("html");
                write_page(&from, template, &dest, base_path)?;
                generated += 1;
            }
            EntryKind::File => {
                log::warn!("Skipping {}: not a Markdown file", from.display());
            }
        }
    }

    Ok(generated)
}

fn write_page(from: &Path, template: &str, dest: &Path, base_path: &str) -> Result<()> {
    log::info!("Generating page from {} to {}", from.display(), dest.display());

    let markdown = read_file(from)?;
    let page = render_page(&markdown, template, base_path).map_err(|source| SiteError::Render {
        path: from.to_path_buf(),
        source,
    })?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }
    fs::write(dest, page).map_err(io_error(dest))
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(io_error(path))
}

/// Directory entries sorted by path, so builds are reproducible
fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)
        .map_err(io_error(dir))?
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<io::Result<Vec<_>>>()
        .map_err(io_error(dir))?;
    entries.sort();
    Ok(entries)
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> SiteError + '_ {
    move |source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    }
}

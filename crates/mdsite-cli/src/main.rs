use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use mdsite_cli::{build_site, SiteConfig};

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(about = "Build a static HTML site from Markdown pages", version)]
struct Cli {
    /// TOML config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory of Markdown pages [default: content]
    #[arg(long)]
    content: Option<PathBuf>,

    /// Directory of static assets [default: static]
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// HTML template file [default: template.html]
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Output directory, cleared before building [default: public]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Base path for root-relative links, e.g. /my-repo/ [default: /]
    #[arg(short, long)]
    base_path: Option<String>,

    /// Log every copied file and directory
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<SiteConfig> {
        let mut config = match &self.config {
            Some(path) => SiteConfig::load_from_path(path)?,
            None => SiteConfig::default(),
        };

        if let Some(content) = self.content {
            config.content_dir = content;
        }
        if let Some(static_dir) = self.static_dir {
            config.static_dir = static_dir;
        }
        if let Some(template) = self.template {
            config.template = template;
        }
        if let Some(output) = self.output {
            config.output_dir = output;
        }
        if let Some(base_path) = self.base_path {
            config.base_path = base_path;
        }

        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config = cli.into_config()?;
    log::debug!("Using config: {config:?}");

    let summary = build_site(&config)
        .with_context(|| format!("failed to build site into {}", config.output_dir.display()))?;

    log::info!(
        "Generated {} pages and copied {} static files into {}",
        summary.pages,
        summary.static_files,
        config.output_dir.display()
    );
    Ok(())
}

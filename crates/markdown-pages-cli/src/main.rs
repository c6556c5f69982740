//! markdown-pages - builds a static site from a directory of Markdown pages

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use markdown_pages_config::Config;
use markdown_pages_engine::io;

#[derive(Parser, Debug)]
#[command(name = "markdown-pages")]
#[command(version, about = "Build a static HTML site from Markdown pages", long_about = None)]
#[command(after_help = "EXAMPLES:
    markdown-pages                              Build using ./markdown-pages.toml or defaults
    markdown-pages --public-dir docs            Write the site into ./docs
    markdown-pages --no-clean --content-dir md  Keep existing output, read pages from ./md")]
struct Cli {
    /// Config file; defaults apply when it does not exist
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory copied verbatim into the output
    #[arg(long, value_name = "DIR")]
    static_dir: Option<PathBuf>,

    /// Directory searched for .md pages
    #[arg(long, value_name = "DIR")]
    content_dir: Option<PathBuf>,

    /// HTML template with {{ Title }} and {{ Content }} markers
    #[arg(short, long, value_name = "FILE")]
    template: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, value_name = "DIR")]
    public_dir: Option<PathBuf>,

    /// Keep existing output directory contents
    #[arg(long)]
    no_clean: bool,

    /// Save the effective settings to the config file instead of building
    #[arg(long)]
    write_config: bool,
}

impl Cli {
    /// Command-line flags win over the config file.
    fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(dir) = &self.static_dir {
            config.static_dir = dir.clone();
        }
        if let Some(dir) = &self.content_dir {
            config.content_dir = dir.clone();
        }
        if let Some(path) = &self.template {
            config.template_path = path.clone();
        }
        if let Some(dir) = &self.public_dir {
            config.public_dir = dir.clone();
        }
        if self.no_clean {
            config.clean = false;
        }
        config
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from_path(&config_path)? {
        Some(config) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        None => {
            log::info!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            Config::default()
        }
    };
    let config = cli.apply_overrides(config);

    if cli.write_config {
        config
            .save_to_path(&config_path)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
        log::info!("Wrote config to {}", config_path.display());
        return Ok(());
    }

    build_site(&config)
}

fn build_site(config: &Config) -> Result<()> {
    if config.clean && config.public_dir.exists() {
        log::info!("Deleting {}", config.public_dir.display());
        fs::remove_dir_all(&config.public_dir).with_context(|| {
            format!(
                "Failed to clean output directory {}",
                config.public_dir.display()
            )
        })?;
    }

    let copied = io::copy_dir_recursive(&config.static_dir, &config.public_dir)
        .with_context(|| {
            format!(
                "Failed to copy static files from {}",
                config.static_dir.display()
            )
        })?;

    let pages = io::generate_pages_recursive(
        &config.content_dir,
        &config.template_path,
        &config.public_dir,
    )
    .with_context(|| {
        format!(
            "Failed to generate pages from {}",
            config.content_dir.display()
        )
    })?;

    log::info!(
        "Built {} pages and copied {} static files into {}",
        pages.len(),
        copied,
        config.public_dir.display()
    );
    Ok(())
}

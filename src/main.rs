//! autodoc: generate markdown reference pages for a source tree.
//!
//! - `autodoc generate` writes one page per type under the docs root
//! - `autodoc catalog` lists the types that would be documented, writing nothing
//!
//! Settings come from `autodoc.toml` (or `--config`), with command-line flags
//! taking precedence.

use anyhow::{Context, Result};
use autodoc::config::CONFIG_FILE;
use autodoc::{discover, Generator, GeneratorConfig, ManifestProvider};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "autodoc",
    version,
    about = "Generate markdown reference pages from type metadata and doc comments"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Write one markdown page per documented type, replacing existing pages.
    Generate(RunArgs),
    /// Print the catalog of documented types without writing anything.
    Catalog(RunArgs),
}

#[derive(Args)]
struct RunArgs {
    /// Config file (default: ./autodoc.toml when present)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Source tree to document
    #[arg(short = 's', long)]
    source: Option<PathBuf>,

    /// Root namespace of the source tree
    #[arg(short = 'n', long)]
    namespace: Option<String>,

    /// Docs output directory
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Base URL the docs are published under
    #[arg(short = 'u', long)]
    base_url: Option<String>,

    /// Type metadata manifest (JSON)
    #[arg(short = 'm', long)]
    metadata: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Command::Generate(args) => generate(args),
        Command::Catalog(args) => catalog(args),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Per-type failures are logged by the generator and do not change the exit status.
fn generate(args: &RunArgs) -> Result<()> {
    let (config, provider) = load(args)?;
    let report = Generator::new(&config, &provider).run();
    if !report.is_clean() {
        tracing::warn!("{} types could not be documented", report.failed.len());
    }
    Ok(())
}

fn catalog(args: &RunArgs) -> Result<()> {
    let (config, provider) = load(args)?;
    let catalog = discover::discover_types(&config, &provider);
    for entry in &catalog {
        println!("{}\t{}\t{}", entry.name, entry.id, entry.output_path.display());
    }
    Ok(())
}

fn load(args: &RunArgs) -> Result<(GeneratorConfig, ManifestProvider)> {
    let config = resolve_config(args)?;
    let metadata = config
        .metadata
        .as_deref()
        .context("--metadata is required when the config file does not name one")?;
    let provider = ManifestProvider::load(metadata)
        .with_context(|| format!("failed to load metadata from {}", metadata.display()))?;
    Ok((config, provider))
}

/// Config file first, then flags on top.
fn resolve_config(args: &RunArgs) -> Result<GeneratorConfig> {
    let config_path = args.config.clone().or_else(|| {
        let default = Path::new(CONFIG_FILE);
        default.is_file().then(|| default.to_path_buf())
    });

    let mut config = match config_path {
        Some(path) => GeneratorConfig::load(&path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GeneratorConfig::new(
            args.source
                .clone()
                .context("--source is required without a config file")?,
            args.namespace
                .clone()
                .context("--namespace is required without a config file")?,
            args.output
                .clone()
                .context("--output is required without a config file")?,
            args.base_url
                .clone()
                .context("--base-url is required without a config file")?,
        ),
    };

    if let Some(source) = &args.source {
        config.source_root = source.clone();
    }
    if let Some(namespace) = &args.namespace {
        config.namespace = namespace.clone();
    }
    if let Some(output) = &args.output {
        config.docs_root = output.clone();
    }
    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(metadata) = &args.metadata {
        config.metadata = Some(metadata.clone());
    }

    config.validate()?;
    Ok(config)
}

//! Guide Directory CLI
//!
//! Thin wrapper around guidedir-core for working with a guide site on disk.
//!
//! ## Usage
//!
//! ```bash
//! # List every guide in ./guides.txt
//! guidedir list
//!
//! # Search guide names
//! guidedir --root site search docker
//!
//! # Report malformed lines in the guide list
//! guidedir check
//!
//! # Generate a guide page and register it
//! guidedir new --title "Docker Basics" --folder docker --blocks docker.json
//!
//! # Print the generated page without writing anything
//! guidedir preview --title "Docker Basics" --folder docker
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use guidedir_core::logging::LoggingBuilder;
use guidedir_core::{
    publish, render_page, Block, FileSource, GuideDirConfig, GuideDirectory, GuideDraft, Loader,
    MemorySurface, PageOrigin, CONFIG_FILE_NAME,
};

/// Guide Directory - list, search and author guides
#[derive(Parser)]
#[command(name = "guidedir")]
#[command(version = "0.1.0")]
#[command(about = "Guide Directory - list, search and author guides")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Site root containing the guide list (default: current directory)
    #[arg(short, long, global = true, default_value = ".")]
    root: PathBuf,

    /// Config file (default: <root>/guidedir.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Also write JSONL logs into this directory
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all guides
    List,

    /// List guides whose name contains the query (case-insensitive)
    Search {
        /// Search query
        query: String,
    },

    /// Validate the guide list and report malformed lines
    Check,

    /// Generate a guide page and append it to the guide list
    New(DraftArgs),

    /// Print the HTML a guide page would be generated with
    Preview(DraftArgs),
}

#[derive(Args)]
struct DraftArgs {
    /// Guide title
    #[arg(short, long)]
    title: String,

    /// Folder name the page is written to
    #[arg(short, long)]
    folder: String,

    /// Short description shown under the title
    #[arg(short, long, default_value = "")]
    description: String,

    /// JSON file with the content blocks
    #[arg(short, long)]
    blocks: Option<PathBuf>,
}

impl DraftArgs {
    fn into_draft(self) -> Result<GuideDraft> {
        let mut draft = GuideDraft::new(self.title, self.folder).with_description(self.description);
        if let Some(path) = self.blocks {
            draft.blocks = read_blocks(&path)?;
        }
        Ok(draft)
    }
}

/// Parse a JSON array of content blocks
fn read_blocks(path: &Path) -> Result<Vec<Block>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read blocks file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid blocks file {}", path.display()))
}

/// Load the guide list into a fresh directory, failing on load errors
async fn load_directory(root: &Path, config: &GuideDirConfig) -> Result<(GuideDirectory, MemorySurface)> {
    let loader = Loader::new(FileSource::new(root.join(&config.guides_file)));
    let mut directory = GuideDirectory::new(PageOrigin::Served);
    let mut surface = MemorySurface::new();

    directory.finish_load(loader.load().await, &mut surface);
    if directory.load_error().is_some() {
        anyhow::bail!("{}", surface.status);
    }
    Ok((directory, surface))
}

fn print_surface(surface: &MemorySurface) {
    if let Some(status) = surface.visible_status() {
        println!("{}", status);
        return;
    }
    for entry in &surface.entries {
        println!("{}  {}", entry.href, entry.label);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingBuilder::new(cli.verbose)
        .with_logs_dir(cli.log_dir.clone())
        .init()?;

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| cli.root.join(CONFIG_FILE_NAME));
    let config = GuideDirConfig::load(&config_path)?;
    tracing::debug!(config = %config_path.display(), guides_file = %config.guides_file, "Configuration loaded");

    match cli.command {
        Commands::List => {
            let (_, surface) = load_directory(&cli.root, &config).await?;
            print_surface(&surface);
        }

        Commands::Search { query } => {
            let (directory, mut surface) = load_directory(&cli.root, &config).await?;
            directory.search(&query, &mut surface);
            print_surface(&surface);
        }

        Commands::Check => {
            let path = cli.root.join(&config.guides_file);
            let parsed = Loader::new(FileSource::new(&path)).load_parsed().await?;

            println!("{}: {} guides", path.display(), parsed.records.len());
            for warning in &parsed.warnings {
                println!("  line {}: malformed: {}", warning.line_number, warning.line);
            }
            if !parsed.warnings.is_empty() {
                anyhow::bail!("{} malformed line(s)", parsed.warnings.len());
            }
        }

        Commands::New(args) => {
            let draft = args.into_draft()?;
            let report = publish(&draft, &cli.root, &config)?;

            println!(
                "Guide '{}' generated successfully in /{}!",
                draft.title.trim(),
                draft.folder.trim()
            );
            println!("  Page: {}", report.page.display());
            println!("  Registered in: {}", report.guides_file.display());
        }

        Commands::Preview(args) => {
            let draft = args.into_draft()?;
            draft.validate()?;
            print!("{}", render_page(&draft, &config.site));
        }
    }

    Ok(())
}

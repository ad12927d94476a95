//! Shelf CLI - Browse the book catalog and curate a reading list

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "shelf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Catalog document to browse instead of the bundled one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog books matching the filters
    List {
        /// Only show this genre (exact match)
        #[arg(short, long)]
        genre: Option<String>,

        /// Maximum page count; non-numeric values are ignored
        #[arg(short = 'p', long, allow_hyphen_values = true)]
        max_pages: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the genres offered by the genre selector
    Genres {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display one book by ISBN
    Show {
        /// Book ISBN
        isbn: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Browse interactively, reading commands from stdin
    Browse,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over --verbose
    let filter = if cli.verbose {
        "shelf_cli=debug,shelf_core=debug"
    } else {
        "shelf_cli=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let ctx = commands::Context::load(cli.config.as_deref(), cli.catalog.as_deref())?;

    match cli.command {
        Commands::List {
            genre,
            max_pages,
            json,
        } => commands::list(&ctx, genre.as_deref(), max_pages.as_deref(), json),

        Commands::Genres { json } => commands::genres(&ctx, json),

        Commands::Show { isbn, json } => commands::show(&ctx, &isbn, json),

        Commands::Browse => commands::browse(ctx),
    }
}

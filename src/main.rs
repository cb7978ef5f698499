//! # OCNOS Article Service CLI (`ocnos`)
//!
//! Runs the article HTTP server and answers the same queries from the
//! command line.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `ocnos serve` | Start the HTTP server |
//! | `ocnos list` | List article identifiers and titles |
//! | `ocnos metadata "<query>"` | Print the metadata of the matching article |
//! | `ocnos section "<query>" "<section>"` | Print a section of the matching article |
//!
//! ## Examples
//!
//! ```bash
//! # Serve on $PORT (default 8080)
//! PORT=3000 ocnos serve
//!
//! # Query using an explicit configuration file
//! ocnos --config ./config/ocnos.example.toml section "lectura" "introduccion"
//! ```

use clap::{Parser, Subcommand};
use ocnos_articles::config;
use ocnos_articles::query;
use ocnos_articles::server;
use ocnos_articles::source::HttpSource;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// OCNOS Article Service — article metadata and sections from a remote
/// JSON document.
#[derive(Parser)]
#[command(
    name = "ocnos",
    about = "OCNOS Article Service — article metadata and sections from a remote JSON document",
    version
)]
struct Cli {
    /// Path to a configuration file (TOML).
    ///
    /// Optional. Without it the built-in source URL and `0.0.0.0:$PORT`
    /// are used.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server.
    ///
    /// Listens on `[server].host` and `$PORT` (or `[server].port`) and
    /// serves `/list_articles`, `/get_metadata`, and `/get_section`.
    Serve,

    /// List the identifier and title of every article.
    List,

    /// Print the bibliographic metadata of the first matching article.
    Metadata {
        /// Free-text query matched against article identifiers and titles.
        article_query: String,
    },

    /// Print the paragraphs of a section of the first matching article.
    ///
    /// `abstract` and `resumen` select the article abstract.
    Section {
        /// Free-text query matched against article identifiers and titles.
        article_query: String,

        /// Section name, or a fragment of it.
        section: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = config::resolve_config(cli.config.as_deref())?;
    let source = HttpSource::new(cfg.source.url.clone());

    let result = match cli.command {
        Commands::Serve => server::run_server(&cfg).await,
        Commands::List => query::run_list(&source).await,
        Commands::Metadata { article_query } => query::run_metadata(&source, &article_query).await,
        Commands::Section {
            article_query,
            section,
        } => query::run_section(&source, &article_query, &section).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

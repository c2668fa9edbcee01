//! Command-line interface.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::Settings;

#[derive(Parser)]
#[command(
    name = "skillscout",
    version,
    about = "Career and learning content aggregation service"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP server
    Serve {
        /// Bind address: a port, a host, or host:port (defaults to the
        /// configured bind address)
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Run one scraping cascade and print the results
    Scrape {
        /// Category to scrape
        #[arg(value_enum)]
        category: ScrapeCategory,
        /// Search query
        query: String,
        /// Location filter (jobs only)
        #[arg(short, long, default_value = "gujarat")]
        location: String,
        /// Maximum number of records
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,
        /// Print markdown instead of JSON
        #[arg(long)]
        markdown: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ScrapeCategory {
    Tools,
    Jobs,
    Courses,
}

/// Peek at argv for the verbose flag before clap runs; logging is
/// initialized before argument parsing.
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

/// Parse arguments and dispatch to the selected command.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Command::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| settings.bind.clone());
            commands::cmd_serve(&settings, &bind).await
        }
        Command::Scrape {
            category,
            query,
            location,
            limit,
            markdown,
        } => commands::cmd_scrape(category, &query, &location, limit, markdown).await,
    }
}

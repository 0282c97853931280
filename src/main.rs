//! Pexels search - find stock video download links from the command line.
//!
//! Main entry point: argument parsing, logging and output.

mod config;
mod error;
mod pexels;
mod status;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use config::Config;
use pexels::{PexelsClient, SearchRequest};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "pexels-search", version, about = "Search Pexels for stock video download links")]
struct Cli {
    /// Path to the config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search videos and print the best download link of each match
    Search(SearchArgs),
    /// Store the API key in the config file
    SetKey {
        /// Pexels API key
        key: String,
    },
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Search query
    query: String,

    /// Number of videos to request
    #[arg(long)]
    per_page: Option<u32>,

    /// Minimum video duration in seconds
    #[arg(long)]
    min_duration: Option<u64>,

    /// Pexels API key (overrides the config file)
    #[arg(long, env = "PEXELS_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Print the links as a JSON array
    #[arg(long)]
    json: bool,
}

/// Main application entry point.
///
/// # Details
/// Loads `.env` and configuration, then runs the selected command. Search
/// failures are reported on stderr and produce an empty result, not an error
/// exit; only configuration problems fail the process.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "pexels_search=warn".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Search(args) => run_search(config, args).await,
        Command::SetKey { key } => {
            let config = config.with_api_key(Some(key));
            let path = config.save(cli.config.as_deref())?;
            tracing::info!("Saved API key to {}", path.display());
            eprintln!("API key saved to {}", path.display());
            Ok(())
        }
    }
}

/// Run a search and print its links on stdout.
///
/// # Arguments
/// * `config` - Loaded configuration
/// * `args` - Search arguments
///
/// # Returns
/// * `Result<()>` - Error only when the tool is not configured
async fn run_search(config: Config, args: SearchArgs) -> anyhow::Result<()> {
    let config = config.with_api_key(args.api_key);

    if config.api_key.is_empty() {
        eprintln!("Error: Pexels API key is required.");
        eprintln!(
            "Set PEXELS_API_KEY, pass --api-key, or run `pexels-search set-key <KEY>` (config: {}).",
            Config::default_config_path()?.display()
        );
        return Err(anyhow::anyhow!("API key not configured"));
    }

    let client = PexelsClient::new(&config)?;
    let request = SearchRequest::new(args.query, config.api_key.as_str())
        .per_page(args.per_page.unwrap_or(config.per_page))
        .min_duration(args.min_duration.unwrap_or(config.min_duration));

    let links = client.search(&request).await;

    if args.json {
        let json = serde_json::to_string_pretty(&links).context("Failed to serialize links")?;
        println!("{}", json);
    } else {
        for link in &links {
            println!("{}", link);
        }
    }

    Ok(())
}

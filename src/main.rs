//! `shortener` - command-line client for the URL shortening service.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! shortener shorten https://example.com/some/long/path
//!
//! # Show click statistics of a short URL
//! shortener stats http://127.0.0.1:8000/06995e
//!
//! # Show where a short URL redirects (counts as a click)
//! shortener resolve http://127.0.0.1:8000/06995e
//!
//! # Menu-driven session
//! shortener interactive
//!
//! # Talk to another service instance
//! shortener --base-url https://s.example.com stats https://s.example.com/abc123
//! ```
//!
//! Omitted inputs are prompted for. The exit status is non-zero when a
//! one-shot command ends in an error.

use std::process::ExitCode;
use std::sync::Arc;

use url_shortener_client::application::workflows::{
    ResolveWorkflow, ShortenWorkflow, StatsWorkflow,
};
use url_shortener_client::config::{self, Config};
use url_shortener_client::infrastructure::http::HttpShortenerGateway;
use url_shortener_client::presentation::terminal::present;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Input, Select};
use tracing_subscriber::EnvFilter;

/// Client for the URL shortening service.
#[derive(Parser)]
#[command(name = "shortener")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Service base URL (overrides SHORTENER_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten a long URL
    Shorten {
        /// URL to shorten (prompted for if omitted)
        long_url: Option<String>,
    },

    /// Show click count and expiry date of a short URL
    Stats {
        /// Full short URL, e.g. http://127.0.0.1:8000/06995e
        short_url: Option<String>,
    },

    /// Show where a short URL redirects (the service counts this as a click)
    Resolve {
        /// Full short URL, e.g. http://127.0.0.1:8000/06995e
        short_url: Option<String>,
    },

    /// Menu-driven session
    Interactive,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load(cli.base_url).context("Invalid configuration")?;
    init_tracing(&config)?;
    config.print_summary();

    let gateway = Arc::new(
        HttpShortenerGateway::new(config.base_url.clone())
            .context("Failed to create HTTP client")?,
    );

    let succeeded = match cli.command {
        Commands::Shorten { long_url } => {
            let input = input_or_prompt(long_url, "Long URL")?;
            let workflow = ShortenWorkflow::new(gateway);
            present(workflow.region(), workflow.submit(&input))
                .await
                .is_ok()
        }
        Commands::Stats { short_url } => {
            let input = input_or_prompt(short_url, "Short URL")?;
            let workflow = StatsWorkflow::new(gateway);
            present(workflow.region(), workflow.submit(&input))
                .await
                .is_ok()
        }
        Commands::Resolve { short_url } => {
            let input = input_or_prompt(short_url, "Short URL")?;
            let workflow = ResolveWorkflow::new(gateway);
            present(workflow.region(), workflow.submit(&input))
                .await
                .is_ok()
        }
        Commands::Interactive => {
            run_interactive(gateway).await?;
            true
        }
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Installs the tracing subscriber. Logs go to stderr; stdout carries results.
fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level).context("Invalid RUST_LOG directive")?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}

/// Returns `value` or asks for it. Empty answers are allowed so that the
/// workflow reports them.
fn input_or_prompt(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?),
    }
}

/// Runs the menu loop.
///
/// Each workflow instance lives for the whole session, so every submission
/// replaces the previous outcome of the same workflow.
async fn run_interactive(gateway: Arc<HttpShortenerGateway>) -> Result<()> {
    let shorten = ShortenWorkflow::new(gateway.clone());
    let stats = StatsWorkflow::new(gateway.clone());
    let resolve = ResolveWorkflow::new(gateway.clone());

    println!("{}", "🔗 URL Shortener".bright_blue().bold());
    println!("  Service: {}", gateway.base_url().cyan());

    let items = ["Shorten a URL", "Get stats", "Resolve a short URL", "Quit"];

    loop {
        println!();
        let choice = Select::new()
            .with_prompt("What next?")
            .items(&items)
            .default(0)
            .interact()?;

        // The outcome is already on screen; an error never ends the session.
        let succeeded = match choice {
            0 => {
                let input = input_or_prompt(None, "Long URL")?;
                present(shorten.region(), shorten.submit(&input))
                    .await
                    .is_ok()
            }
            1 => {
                let input = input_or_prompt(None, "Short URL")?;
                present(stats.region(), stats.submit(&input)).await.is_ok()
            }
            2 => {
                let input = input_or_prompt(None, "Short URL")?;
                present(resolve.region(), resolve.submit(&input))
                    .await
                    .is_ok()
            }
            _ => break,
        };
        tracing::debug!(choice, succeeded, "Interactive submission settled");
    }

    Ok(())
}

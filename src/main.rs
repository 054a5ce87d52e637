//! CLI front-end for the shortener client.
//!
//! Drives every facade from the command line: shorten a URL, look up
//! statistics for a code, page through the statistics listing, print the
//! most-visited ranking, and show access summaries.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (optionally with a custom 5-character code)
//! shortener-client shorten https://example.com --code abc12
//!
//! # Statistics for one code
//! shortener-client stats abc12
//!
//! # Paginated listing
//! shortener-client list --page 0 --size 10
//!
//! # Most-visited ranking
//! shortener-client ranking
//!
//! # Access summary (service-wide, or for one code)
//! shortener-client summary
//! shortener-client summary --code abc12
//! ```
//!
//! # Environment Variables
//!
//! - `API_BASE_URL` - Deployed backend base URL; when unset the client
//!   guesses same-host on port 8080
//! - `RUST_LOG` - Log filter (default: `info`)

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use tracing_subscriber::EnvFilter;

use shortener_client::infrastructure::http::ReqwestTransport;
use shortener_client::prelude::*;

type Client = ShortenerClient<ReqwestTransport>;

/// Command line client for the URL shortener service.
#[derive(Parser)]
#[command(name = "shortener-client")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten a URL
    Shorten {
        /// The URL to shorten
        url: String,

        /// Custom 5-character alphanumeric code
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Show statistics for a code
    Stats {
        /// The short code to look up
        code: String,
    },

    /// List statistics page by page
    List {
        /// 0-based page index
        #[arg(short, long, default_value_t = 0)]
        page: u32,

        /// Page size
        #[arg(short, long, default_value_t = 10)]
        size: u32,
    },

    /// Show the most-visited ranking
    Ranking,

    /// Show access summaries
    Summary {
        /// Restrict the summary to one code
        #[arg(short, long)]
        code: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = ClientConfig::from_env().context("failed to load configuration")?;
    let client = ShortenerClient::new(&config).context("failed to build HTTP client")?;

    let cli = Cli::parse();
    match cli.command {
        Commands::Shorten { url, code } => run_shorten(&client, url, code).await,
        Commands::Stats { code } => run_stats(&client, &code).await,
        Commands::List { page, size } => run_list(&client, page, size).await,
        Commands::Ranking => run_ranking(&client).await,
        Commands::Summary { code } => run_summary(&client, code).await,
    }
}

async fn run_shorten(client: &Client, url: String, code: Option<String>) -> Result<()> {
    let request = match ShortenRequest::new(url, code) {
        Ok(request) => request,
        Err(errors) => {
            println!("{} {}", "âŒ".red(), format_validation_errors(&errors).red());
            return Ok(());
        }
    };

    client.shorten.create(&request).await;

    if let Some(message) = client.shorten.error() {
        println!("{} {}", "âŒ".red(), message.red());
        return Ok(());
    }

    if let Some(link) = client.shorten.result() {
        println!("{}", "âœ… Link created".green().bold());
        println!("  Code:     {}", link.code.bright_yellow().bold());
        println!("  Original: {}", link.original_url.cyan());
        println!("  Created:  {}", link.created_at.to_rfc3339());
        if let Some(short_url) = link.short_url {
            println!("  Short:    {}", short_url.bright_green());
        }
    }

    Ok(())
}

async fn run_stats(client: &Client, code: &str) -> Result<()> {
    client.stats.fetch_stats(code).await;

    if let Some(message) = client.stats.error() {
        println!("{} {}", "âŒ".red(), message.red());
        return Ok(());
    }

    if let Some(record) = client.stats.stats() {
        println!("{}", "ğŸ“Š Statistics".bright_blue().bold());
        println!("  Code:     {}", record.code.bright_yellow());
        println!("  Original: {}", record.original_url.cyan());
        println!("  Hits:     {}", record.hits.to_string().bright_white());
    }

    Ok(())
}

async fn run_list(client: &Client, page: u32, size: u32) -> Result<()> {
    client.stats_list.fetch_page(page, size).await;

    if let Some(message) = client.stats_list.error() {
        println!("{} {}", "âŒ".red(), message.red());
        return Ok(());
    }

    if let Some(page) = client.stats_list.page() {
        println!(
            "{} (page {} of {}, {} total)",
            "ğŸ“„ Statistics".bright_blue().bold(),
            page.number + 1,
            page.total_pages.max(1),
            page.total_elements
        );
        if page.empty {
            println!("  {}", "no entries".dimmed());
        }
        for record in &page.content {
            println!(
                "  {}  {:>6}  {}",
                record.code.bright_yellow(),
                record.hits,
                record.original_url.cyan()
            );
        }
    }

    Ok(())
}

async fn run_ranking(client: &Client) -> Result<()> {
    client.ranking.fetch_ranking().await;

    if let Some(message) = client.ranking.error() {
        println!("{} {}", "âŒ".red(), message.red());
        return Ok(());
    }

    let entries = client.ranking.ranking();
    println!("{}", "ğŸ† Ranking".bright_blue().bold());
    if entries.is_empty() {
        println!("  {}", "no entries yet".dimmed());
    }
    for (position, entry) in entries.iter().enumerate() {
        println!(
            "  {:>2}. {}  {} hit(s)",
            position + 1,
            entry.code.bright_yellow(),
            entry.hits
        );
    }

    Ok(())
}

async fn run_summary(client: &Client, code: Option<String>) -> Result<()> {
    match code {
        Some(code) => {
            client.summary.fetch_code_summary(&code).await;

            if let Some(message) = client.summary.code_summary_error() {
                println!("{} {}", "âŒ".red(), message.red());
                return Ok(());
            }

            if let Some(summary) = client.summary.code_summary() {
                println!(
                    "{} {}",
                    "ğŸ“ˆ Summary for".bright_blue().bold(),
                    summary.code.bright_yellow().bold()
                );
                println!("  Original:    {}", summary.original_url.cyan());
                println!("  Total hits:  {}", summary.total_hits);
                println!("  Last 7 days: {}", summary.last7_days_hits);
                print_daily(&summary.daily);
            }
        }
        None => {
            client.summary.fetch_summary().await;

            if let Some(message) = client.summary.summary_error() {
                println!("{} {}", "âŒ".red(), message.red());
                return Ok(());
            }

            if let Some(summary) = client.summary.summary() {
                println!("{}", "ğŸ“ˆ Summary".bright_blue().bold());
                println!("  Total hits:  {}", summary.total_hits);
                println!("  Last 7 days: {}", summary.last7_days_hits);
                print_daily(&summary.daily);
            }
        }
    }

    Ok(())
}

fn print_daily(daily: &[DayHits]) {
    for day in daily {
        println!("    {}  {}", day.date, day.hits);
    }
}

fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let detail = errors
                .iter()
                .filter_map(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            if detail.is_empty() {
                format!("{} is invalid", field)
            } else {
                detail
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

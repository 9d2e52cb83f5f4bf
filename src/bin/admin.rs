//! CLI administration tool for keyword-shortener.
//!
//! Runs the shortening pipeline and manages stored keywords directly against
//! the database, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create the urls table
//! cargo run --bin admin -- init
//!
//! # Shorten a URL (needs OPENAI_API_KEY)
//! cargo run --bin admin -- shorten https://example.com
//!
//! # Show where a keyword points
//! cargo run --bin admin -- resolve sample
//!
//! # Remove a keyword
//! cargo run --bin admin -- delete sample
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (optional): SQLite database, defaults to `sqlite://urls.db`
//! - `OPENAI_API_KEY` (required for `shorten` only)

use keyword_shortener::application::services::{KeywordGenerator, ShortenService};
use keyword_shortener::config::Config;
use keyword_shortener::domain::error::ShortenError;
use keyword_shortener::domain::repositories::LinkRepository;
use keyword_shortener::infrastructure::llm::OpenAiCompletionClient;
use keyword_shortener::infrastructure::metadata::HttpMetadataExtractor;
use keyword_shortener::infrastructure::persistence::{self, SqliteLinkRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing keyword-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Create the storage schema if it does not exist
    Init,

    /// Shorten a URL and print its keyword
    Shorten {
        /// Absolute http(s) URL
        url: String,
    },

    /// Show the URL a keyword points to
    Resolve { keyword: String },

    /// Delete a keyword mapping
    Delete {
        keyword: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match cli.command {
        Commands::Shorten { .. } => Config::from_env()?,
        _ => Config::storage_from_env(),
    };
    match cli.command {
        Commands::Shorten { .. } => config.validate()?,
        _ => config.validate_storage()?,
    }

    let pool = persistence::connect(
        &config.database_url,
        config.db_max_connections,
        config.db_acquire_timeout(),
    )
    .await
    .context("Failed to connect to database")?;

    let repo = Arc::new(SqliteLinkRepository::new(Arc::new(pool.clone())));

    match cli.command {
        Commands::Init => init(repo).await?,
        Commands::Shorten { url } => shorten(&config, repo, &url).await?,
        Commands::Resolve { keyword } => resolve(repo, &keyword).await?,
        Commands::Delete { keyword, yes } => delete(repo, &keyword, yes).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn init(repo: Arc<SqliteLinkRepository>) -> Result<()> {
    repo.initialize()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialize storage: {}", e))?;

    println!("{}", "✅ Storage initialized".green().bold());
    Ok(())
}

/// Runs the full pipeline once, exactly as `POST /shorten` does.
async fn shorten(config: &Config, repo: Arc<SqliteLinkRepository>, url: &str) -> Result<()> {
    println!("{}", "🔗 Shorten URL".bright_blue().bold());
    println!();

    repo.initialize()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialize storage: {}", e))?;

    let extractor = HttpMetadataExtractor::new(config.fetch_timeout(), &config.fetch_user_agent)?;

    let client = OpenAiCompletionClient::from_app_config(config);
    let generator = KeywordGenerator::new(Arc::new(client), config.generation_timeout());

    let service = ShortenService::new(Arc::new(extractor), generator, repo);

    match service.shorten(url).await {
        Ok(keyword) => {
            println!("  URL:     {}", url.cyan());
            println!("  Keyword: {}", keyword.bright_yellow().bold());
            println!();
            println!("{}", "✅ URL shortened".green().bold());
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "❌ Failed while".red(), e.stage().to_string().red());
            Err(anyhow::anyhow!(e))
        }
    }
}

async fn resolve(repo: Arc<SqliteLinkRepository>, keyword: &str) -> Result<()> {
    match repo.lookup(keyword).await {
        Ok(link) => {
            println!("  Keyword: {}", link.keyword.cyan());
            println!("  URL:     {}", link.target_url.bright_white());
            println!(
                "  Created: {}",
                link.created_at
                    .format("%Y-%m-%d %H:%M")
                    .to_string()
                    .bright_black()
            );
            Ok(())
        }
        Err(ShortenError::NotFound(_)) => {
            println!("{}", "⚠️  Keyword not found".yellow());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Database error: {}", e)),
    }
}

/// Deletes a keyword after confirmation (default: No).
async fn delete(repo: Arc<SqliteLinkRepository>, keyword: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete keyword".bright_blue().bold());
    println!();

    let link = match repo.lookup(keyword).await {
        Ok(link) => link,
        Err(ShortenError::NotFound(_)) => {
            println!("{}", "⚠️  Keyword not found".yellow());
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("Database error: {}", e)),
    };

    println!("  Keyword: {}", link.keyword.cyan());
    println!("  URL:     {}", link.target_url.bright_white());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this keyword?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    repo.delete(keyword)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete keyword: {}", e))?;

    println!("{}", "✅ Keyword deleted".green().bold());
    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  SQLite: {}", version.bright_white());
        }
    }

    Ok(())
}

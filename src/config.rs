//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export OPENAI_API_KEY="sk-..."
//! export DATABASE_URL="sqlite://urls.db"
//! ```
//!
//! ## Required Variables
//!
//! - `OPENAI_API_KEY` - Credential for the text generation service
//!
//! ## Optional Variables
//!
//! - `OPENAI_MODEL` - Chat model (default: `gpt-3.5-turbo`)
//! - `OPENAI_BASE_URL` - OpenAI-compatible API base (default: the OpenAI API)
//! - `DATABASE_URL` - SQLite database (default: `sqlite://urls.db`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `FETCH_TIMEOUT_SECS` - Page fetch timeout (default: 10)
//! - `FETCH_USER_AGENT` - User agent for page fetches (default: Googlebot)
//! - `GENERATION_TIMEOUT_SECS` - Completion call timeout (default: 10)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_ACQUIRE_TIMEOUT` - Seconds to wait for a connection or a lock (default: 5)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::infrastructure::llm::DEFAULT_MODEL;
use crate::infrastructure::metadata::DEFAULT_USER_AGENT;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://urls.db";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,

    /// Credential for the text generation service (`OPENAI_API_KEY`).
    /// Missing or empty is a startup error.
    pub openai_api_key: String,
    pub openai_model: String,
    /// Optional OpenAI-compatible endpoint override.
    pub openai_base_url: Option<String>,

    /// Timeout for a whole page fetch, in seconds.
    pub fetch_timeout_secs: u64,
    pub fetch_user_agent: String,
    /// Timeout for a single completion call, in seconds.
    pub generation_timeout_secs: u64,

    // ── Pool settings ───────────────────────────────────────────────────────
    pub db_max_connections: u32,
    /// Seconds to wait for a pooled connection or a database lock.
    pub db_acquire_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `OPENAI_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        let openai_api_key =
            env::var("OPENAI_API_KEY").context("OPENAI_API_KEY environment variable is required")?;

        Ok(Self {
            openai_api_key,
            ..Self::storage_from_env()
        })
    }

    /// Loads everything except the generation credential.
    ///
    /// Used by tools that only touch the database, such as the admin CLI.
    pub fn storage_from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            listen_addr: env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            log_format: env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string()),
            openai_api_key: String::new(),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            openai_base_url: env::var("OPENAI_BASE_URL").ok().filter(|v| !v.is_empty()),
            fetch_timeout_secs: parse_var("FETCH_TIMEOUT_SECS", 10),
            fetch_user_agent: env::var("FETCH_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
            generation_timeout_secs: parse_var("GENERATION_TIMEOUT_SECS", 10),
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", 5),
            db_acquire_timeout: parse_var("DB_ACQUIRE_TIMEOUT", 5),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `openai_api_key` is empty
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `database_url` is not a SQLite URL
    /// - any timeout or the pool size is zero
    pub fn validate(&self) -> Result<()> {
        if self.openai_api_key.trim().is_empty() {
            anyhow::bail!("OPENAI_API_KEY must not be empty");
        }

        self.validate_storage()?;

        if self.fetch_timeout_secs == 0 {
            anyhow::bail!("FETCH_TIMEOUT_SECS must be greater than 0");
        }
        if self.generation_timeout_secs == 0 {
            anyhow::bail!("GENERATION_TIMEOUT_SECS must be greater than 0");
        }

        if let Some(ref base_url) = self.openai_base_url
            && !base_url.starts_with("http://")
            && !base_url.starts_with("https://")
        {
            anyhow::bail!(
                "OPENAI_BASE_URL must start with 'http://' or 'https://', got '{}'",
                base_url
            );
        }

        Ok(())
    }

    /// Validates the settings needed to open the database and serve.
    pub fn validate_storage(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_acquire_timeout == 0 {
            anyhow::bail!("DB_ACQUIRE_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_secs)
    }

    pub fn db_acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.db_acquire_timeout)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Model: {}", self.openai_model);
        if let Some(ref base_url) = self.openai_base_url {
            tracing::info!("  API base: {}", base_url);
        }
        tracing::info!("  API key: {}", mask_secret(&self.openai_api_key));
        tracing::info!(
            "  Timeouts: fetch {}s, generation {}s, db {}s",
            self.fetch_timeout_secs,
            self.generation_timeout_secs,
            self.db_acquire_timeout
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Masks a secret for logging, keeping only the last four characters.
///
/// - `sk-abcdef123456` → `***3456`
/// - short secrets are fully masked
fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "***".to_string();
    }

    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("***{}", tail)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

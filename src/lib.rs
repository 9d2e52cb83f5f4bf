//! # Keyword Shortener
//!
//! A URL shortening service that names every link with a single readable
//! keyword, built with Axum and SQLite.
//!
//! Shortening a URL runs three stages:
//!
//! 1. **Extract** - fetch the page and pull its title, description and keywords
//! 2. **Generate** - ask a chat model for one lowercase noun describing the page
//! 3. **Store** - persist the keyword to URL mapping
//!
//! `GET /{keyword}` then redirects to the stored URL.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, errors, repository and client traits
//! - **Application Layer** ([`application`]) - Keyword generation and the shortening pipeline
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite, HTTP page fetching, OpenAI client
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export OPENAI_API_KEY="sk-..."
//! export DATABASE_URL="sqlite://urls.db"   # Optional
//!
//! cargo run
//!
//! curl -X POST localhost:8080/shorten -H 'content-type: application/json' \
//!      -d '{"url": "https://example.com"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{KeywordGenerator, ShortenService};
    pub use crate::domain::clients::{CompletionClient, CompletionRequest, MetadataSource};
    pub use crate::domain::entities::{MetadataOutcome, PageMetadata, ShortLink};
    pub use crate::domain::error::{GenerationError, ShortenError, Stage};
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}

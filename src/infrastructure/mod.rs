//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - SQLite repository implementations
//! - [`metadata`] - HTTP page fetching and HTML metadata extraction
//! - [`llm`] - Chat completion client for keyword generation

pub mod llm;
pub mod metadata;
pub mod persistence;

//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating the outbound
//! clients and the repository. Services consume domain traits and provide a
//! clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::keyword_service::KeywordGenerator`] - Prompting and keyword validation
//! - [`services::shorten_service::ShortenService`] - The shortening pipeline and lookups

pub mod services;

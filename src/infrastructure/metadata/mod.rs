//! Page metadata extraction.
//!
//! - [`http_extractor`] - Fetches pages with `reqwest` and classifies the outcome
//! - [`html`] - Parses markup and walks it for title, description and keywords

pub mod html;
pub mod http_extractor;

pub use http_extractor::{DEFAULT_FETCH_TIMEOUT, DEFAULT_USER_AGENT, HttpMetadataExtractor};

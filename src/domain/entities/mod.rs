//! Core domain entities.
//!
//! - [`ShortLink`] - A persisted keyword to URL mapping
//! - [`PageMetadata`] - Request-scoped text signals extracted from a page
//! - [`MetadataOutcome`] - Explicit result of one extraction attempt

pub mod page_metadata;
pub mod short_link;

pub use page_metadata::{MetadataOutcome, PageMetadata};
pub use short_link::ShortLink;

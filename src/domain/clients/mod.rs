//! Trait definitions for outbound calls made by the pipeline.
//!
//! - [`MetadataSource`] - Fetches a page and extracts its text signals
//! - [`CompletionClient`] - Sends a chat-style prompt to a text generation service
//!
//! Concrete implementations live in `crate::infrastructure`.

pub mod completion_client;
pub mod metadata_source;

pub use completion_client::{CompletionClient, CompletionRequest};
pub use metadata_source::MetadataSource;

#[cfg(test)]
pub use completion_client::MockCompletionClient;
#[cfg(test)]
pub use metadata_source::MockMetadataSource;

//! Text generation service clients.

pub mod openai;

pub use openai::{DEFAULT_MODEL, OpenAiCompletionClient};

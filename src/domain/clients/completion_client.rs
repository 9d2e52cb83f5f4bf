//! Text completion client abstraction.

use crate::domain::error::GenerationError;
use async_trait::async_trait;

/// A single chat-style completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Instruction for the system role.
    pub system: String,
    /// Content of the user role.
    pub prompt: String,
    pub max_tokens: u16,
    pub temperature: f32,
}

/// Sends prompts to an external text generation service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Returns the text of every completion choice, in order.
    ///
    /// An empty vector means the service answered without any choice.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Upstream`] if the request fails.
    async fn complete(&self, request: CompletionRequest) -> Result<Vec<String>, GenerationError>;
}

//! Keyword generation service.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, instrument, warn};

use crate::domain::clients::{CompletionClient, CompletionRequest};
use crate::domain::entities::PageMetadata;
use crate::domain::error::GenerationError;
use crate::utils::keyword::normalize_keyword;

/// System role sent with every prompt.
pub const SYSTEM_PROMPT: &str =
    "You are a URL keyword generator. You generate single-word keywords that describe websites.";

/// Response budget; one short word never needs more.
pub const MAX_TOKENS: u16 = 10;

/// Low temperature favors the same answer for the same page.
pub const TEMPERATURE: f32 = 0.3;

/// Default bound for a single completion call.
pub const DEFAULT_GENERATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Turns page metadata into a single validated keyword.
///
/// Makes exactly one completion call per invocation, bounded by its own
/// timeout, and never retries.
pub struct KeywordGenerator {
    client: Arc<dyn CompletionClient>,
    timeout: Duration,
}

impl KeywordGenerator {
    /// Creates a new keyword generator.
    pub fn new(client: Arc<dyn CompletionClient>, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Builds the instruction prompt for the given signals.
    ///
    /// Deterministic: the same signals always produce the same prompt.
    pub fn build_prompt(title: &str, description: &str, keywords: &str) -> String {
        format!(
            "Generate a single, simple English word (noun) that best describes this website.\n\n\
             Title: {title}\n\
             Description: {description}\n\
             Keywords: {keywords}\n\n\
             Rules:\n\
             1. Return ONLY the word, nothing else\n\
             2. Word must be a simple noun\n\
             3. Word must be lowercase\n\
             4. No special characters or spaces\n\
             5. Maximum 15 characters\n"
        )
    }

    /// Builds the full completion request for the given signals.
    pub fn build_request(title: &str, description: &str, keywords: &str) -> CompletionRequest {
        CompletionRequest {
            system: SYSTEM_PROMPT.to_string(),
            prompt: Self::build_prompt(title, description, keywords),
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        }
    }

    /// Generates a keyword for the given page metadata.
    ///
    /// # Errors
    ///
    /// - [`GenerationError::Upstream`] if the completion call fails
    /// - [`GenerationError::TimedOut`] if it does not finish within the timeout
    /// - [`GenerationError::NoCompletion`] if no choice is returned
    /// - [`GenerationError::InvalidKeyword`] if the answer is not a usable keyword
    pub async fn generate(&self, metadata: &PageMetadata) -> Result<String, GenerationError> {
        self.generate_from(&metadata.title, &metadata.description, &metadata.keywords)
            .await
    }

    /// Generates a keyword from raw title, description and keyword signals.
    ///
    /// See [`Self::generate`] for error cases.
    #[instrument(level = "debug", skip(self, description, keywords))]
    pub async fn generate_from(
        &self,
        title: &str,
        description: &str,
        keywords: &str,
    ) -> Result<String, GenerationError> {
        let request = Self::build_request(title, description, keywords);

        let choices = tokio::time::timeout(self.timeout, self.client.complete(request))
            .await
            .map_err(|_| GenerationError::TimedOut(self.timeout))??;

        let raw = choices.into_iter().next().ok_or(GenerationError::NoCompletion)?;

        match normalize_keyword(&raw) {
            Some(keyword) => {
                debug!(keyword = %keyword, "Keyword generated");
                Ok(keyword)
            }
            None => {
                warn!(raw = %raw, "Model returned an unusable keyword");
                Err(GenerationError::InvalidKeyword(raw))
            }
        }
    }
}

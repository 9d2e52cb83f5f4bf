//! OpenAI-compatible chat completion client.

use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
};
use async_openai::Client;
use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::domain::clients::{CompletionClient, CompletionRequest};
use crate::domain::error::GenerationError;

/// Default chat model.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Completion client backed by `async-openai`.
pub struct OpenAiCompletionClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiCompletionClient {
    /// Create from custom client configuration, e.g. a different API base.
    pub fn from_config(config: OpenAIConfig, model: impl Into<String>) -> Self {
        Self {
            client: Client::with_config(config),
            model: model.into(),
        }
    }

    /// Create from the service configuration: API key, optional base URL and model.
    pub fn from_app_config(config: &Config) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(&config.openai_api_key);
        if let Some(ref base_url) = config.openai_base_url {
            openai_config = openai_config.with_api_base(base_url);
        }

        Self::from_config(openai_config, &config.openai_model)
    }
}

fn upstream(e: impl ToString) -> GenerationError {
    GenerationError::Upstream(e.to_string())
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
    #[instrument(level = "debug", skip_all, fields(model = %self.model))]
    async fn complete(&self, request: CompletionRequest) -> Result<Vec<String>, GenerationError> {
        let system_message = ChatCompletionRequestSystemMessageArgs::default()
            .content(request.system)
            .build()
            .map_err(upstream)?;

        let user_message = ChatCompletionRequestUserMessageArgs::default()
            .content(request.prompt)
            .build()
            .map_err(upstream)?;

        let chat_request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(vec![
                ChatCompletionRequestMessage::System(system_message),
                ChatCompletionRequestMessage::User(user_message),
            ])
            .max_tokens(request.max_tokens)
            .temperature(request.temperature)
            .build()
            .map_err(upstream)?;

        let response = self.client.chat().create(chat_request).await.map_err(upstream)?;
        debug!(choices = response.choices.len(), "Completion received");

        Ok(response
            .choices
            .into_iter()
            .map(|choice| choice.message.content.unwrap_or_default())
            .collect())
    }
}

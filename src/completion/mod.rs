mod anthropic;
mod factory;
mod open_ai;
mod prompt;

pub use anthropic::AnthropicProvider;
pub use factory::{CompletionBackend, ProviderFactory};
pub use open_ai::OpenAIProvider;
pub use prompt::EXTRACTION_PROMPT;

use crate::error::CompletionError;
use async_trait::async_trait;

/// A remote text-completion service: text in, generated text out.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Get the provider name (e.g., "openai", "anthropic")
    fn provider_name(&self) -> &str;

    /// Ask the service to respond to `text` under the given system prompt
    async fn complete(&self, system_prompt: &str, text: &str) -> Result<String, CompletionError>;
}

/// Turn a non-success HTTP response into a [`CompletionError::Status`].
pub(crate) async fn check_status(
    response: reqwest::Response,
) -> Result<reqwest::Response, CompletionError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(CompletionError::Status {
        status: status.as_u16(),
        body,
    })
}

use crate::completion::{AnthropicProvider, CompletionProvider, OpenAIProvider};
use crate::config::CompletionConfig;
use crate::error::CompletionError;

/// Completion services the fallback extractor knows how to call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionBackend {
    OpenAI,
    Anthropic,
}

impl CompletionBackend {
    /// Provider name string used in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionBackend::OpenAI => "openai",
            CompletionBackend::Anthropic => "anthropic",
        }
    }
}

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create the provider named in `config.provider`
    pub fn create(config: &CompletionConfig) -> Result<Box<dyn CompletionProvider>, CompletionError> {
        match config.provider.as_str() {
            "openai" => Ok(Box::new(OpenAIProvider::new(config)?)),
            "anthropic" => Ok(Box::new(AnthropicProvider::new(config)?)),
            other => Err(CompletionError::UnknownProvider(other.to_string())),
        }
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec![
            CompletionBackend::OpenAI.as_str(),
            CompletionBackend::Anthropic.as_str(),
        ]
    }
}

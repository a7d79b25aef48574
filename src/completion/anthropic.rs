use crate::completion::{check_status, CompletionProvider};
use crate::config::CompletionConfig;
use crate::error::CompletionError;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
// The messages API requires max_tokens on every request
const DEFAULT_MAX_TOKENS: u32 = 2000;

pub struct AnthropicProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: Option<f32>,
    max_tokens: u32,
}

impl AnthropicProvider {
    /// Create a new Anthropic provider from configuration
    pub fn new(config: &CompletionConfig) -> Result<Self, CompletionError> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("ANTHROPIC_API_KEY").ok())
            .ok_or_else(|| CompletionError::MissingApiKey("ANTHROPIC_API_KEY".to_string()))?;

        Ok(AnthropicProvider {
            client: Client::new(),
            api_key,
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
        })
    }
}

#[async_trait]
impl CompletionProvider for AnthropicProvider {
    fn provider_name(&self) -> &str {
        "anthropic"
    }

    async fn complete(&self, system_prompt: &str, text: &str) -> Result<String, CompletionError> {
        let mut body = json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "system": system_prompt,
            "messages": [
                {
                    "role": "user",
                    "content": text
                }
            ]
        });
        if let Some(temperature) = self.temperature {
            body["temperature"] = json!(temperature);
        }

        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .json(&body)
            .send()
            .await?;
        let response = check_status(response).await?;

        let response_body: Value = response.json().await?;
        debug!("{:?}", response_body);

        let text = response_body["content"][0]["text"]
            .as_str()
            .ok_or_else(|| {
                CompletionError::MalformedResponse("missing content[0].text".to_string())
            })?
            .trim()
            .to_string();

        Ok(text)
    }
}

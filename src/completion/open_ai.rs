use crate::completion::{check_status, CompletionProvider};
use crate::config::CompletionConfig;
use crate::error::CompletionError;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};

const DEFAULT_BASE_URL: &str = "https://api.openai.com";

pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider from configuration
    pub fn new(config: &CompletionConfig) -> Result<Self, CompletionError> {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .ok_or_else(|| CompletionError::MissingApiKey("OPENAI_API_KEY".to_string()))?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(OpenAIProvider {
            client: Client::new(),
            api_key,
            base_url,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    pub fn with_api_key(api_key: String, model: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string(), model)
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        OpenAIProvider {
            client: Client::new(),
            api_key,
            base_url,
            model,
            temperature: None,
            max_tokens: None,
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAIProvider {
    fn provider_name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, system_prompt: &str, text: &str) -> Result<String, CompletionError> {
        let mut body = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": system_prompt},
                {"role": "user", "content": text}
            ]
        });
        if let Some(temperature) = self.temperature {
            body["temperature"] = json!(temperature);
        }
        if let Some(max_tokens) = self.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;
        let response = check_status(response).await?;

        let response_body: Value = response.json().await?;
        debug!("{:?}", response_body);
        let content = response_body["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                CompletionError::MalformedResponse(
                    "missing choices[0].message.content".to_string(),
                )
            })?
            .trim()
            .to_string();

        Ok(content)
    }
}

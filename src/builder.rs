use std::time::Duration;

use crate::completion::{CompletionBackend, CompletionProvider, ProviderFactory};
use crate::config::{CompletionConfig, MergePolicy, ScraperConfig};
use crate::fetcher::RequestFetcher;
use crate::{RecipeScraper, ScrapeError};

/// Where the fallback extractor gets its completions from
#[derive(Default)]
enum CompletionSource {
    /// Create a provider from configuration at build time
    #[default]
    Configured,
    /// Use an already constructed provider
    Injected(Box<dyn CompletionProvider>),
    /// Never call a completion service
    Disabled,
}

/// Builder for configuring a [`RecipeScraper`]
#[derive(Default)]
pub struct RecipeScraperBuilder {
    timeout: Option<Duration>,
    user_agent: Option<String>,
    backend: Option<CompletionBackend>,
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
    merge_policy: Option<MergePolicy>,
    completion: CompletionSource,
}

impl RecipeScraperBuilder {
    /// Set a timeout for page fetches
    ///
    /// # Example
    /// ```
    /// use recipe_scrape::RecipeScraper;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeScraper::builder()
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Set the user agent sent with page fetches
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Choose which completion service the fallback calls
    ///
    /// # Example
    /// ```
    /// use recipe_scrape::{CompletionBackend, RecipeScraper};
    ///
    /// let builder = RecipeScraper::builder()
    ///     .provider(CompletionBackend::Anthropic)
    ///     .model("claude-3-5-haiku-latest");
    /// ```
    pub fn provider(mut self, backend: CompletionBackend) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Set the API key for the completion provider
    ///
    /// This allows passing the API key directly instead of relying on
    /// environment variables or config files.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model name for the completion provider
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Point the completion provider at a custom or proxy endpoint
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Use this provider for the fallback instead of building one from configuration
    pub fn completion_provider(mut self, provider: Box<dyn CompletionProvider>) -> Self {
        self.completion = CompletionSource::Injected(provider);
        self
    }

    /// Never call a completion service; incomplete pages come back degraded
    pub fn without_completion(mut self) -> Self {
        self.completion = CompletionSource::Disabled;
        self
    }

    pub fn merge_policy(mut self, policy: MergePolicy) -> Self {
        self.merge_policy = Some(policy);
        self
    }

    /// Build the scraper
    ///
    /// Unset options fall back to [`ScraperConfig::default`], not to the
    /// config file, so a built scraper does not depend on the working directory.
    ///
    /// # Errors
    /// Returns `ScrapeError` if:
    /// - The HTTP client cannot be created
    /// - Provider options were given together with `without_completion()`
    /// - The selected provider cannot be created (for example, no API key)
    pub fn build(self) -> Result<RecipeScraper, ScrapeError> {
        let defaults = ScraperConfig::default();
        let has_provider_options = self.backend.is_some()
            || self.api_key.is_some()
            || self.model.is_some()
            || self.base_url.is_some();

        let fetcher = RequestFetcher::new(
            Some(
                self.timeout
                    .unwrap_or(Duration::from_secs(defaults.timeout)),
            ),
            self.user_agent.as_deref().unwrap_or(&defaults.user_agent),
        )?;

        let provider = match self.completion {
            CompletionSource::Injected(provider) => Some(provider),
            CompletionSource::Disabled if has_provider_options => {
                return Err(ScrapeError::BuilderError(
                    "Provider options cannot be combined with without_completion()".to_string(),
                ));
            }
            CompletionSource::Disabled => None,
            CompletionSource::Configured => {
                let mut completion = CompletionConfig::default();
                if let Some(backend) = self.backend {
                    completion.provider = backend.as_str().to_string();
                    if backend == CompletionBackend::Anthropic && self.model.is_none() {
                        completion.model = "claude-3-5-haiku-latest".to_string();
                    }
                }
                if let Some(model) = self.model {
                    completion.model = model;
                }
                completion.api_key = self.api_key;
                completion.base_url = self.base_url;
                Some(ProviderFactory::create(&completion)?)
            }
        };

        Ok(RecipeScraper::new(
            fetcher,
            provider,
            self.merge_policy.unwrap_or_default(),
        ))
    }
}

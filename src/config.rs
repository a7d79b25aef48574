use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// How completion output is combined with a partial structural result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergePolicy {
    /// Completion sections only fill lists the page left empty; title and
    /// description come from the completion when it produced them.
    #[default]
    FillEmpty,
    /// Completion sections replace the structural lists wholesale; title and
    /// description stay as scraped.
    ReplaceSections,
}

/// Top-level scraper configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ScraperConfig {
    /// Page fetch timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User agent sent when fetching pages
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default)]
    pub merge_policy: MergePolicy,
    /// Fallback text-completion settings
    #[serde(default)]
    pub completion: CompletionConfig,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            user_agent: default_user_agent(),
            merge_policy: MergePolicy::default(),
            completion: CompletionConfig::default(),
        }
    }
}

/// Configuration for the completion provider used by the fallback extractor
#[derive(Debug, Deserialize, Clone)]
pub struct CompletionConfig {
    /// Whether the fallback may call out to a completion service at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Provider name ("openai" or "anthropic")
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Model identifier (e.g., "gpt-3.5-turbo")
    #[serde(default = "default_model")]
    pub model: String,
    /// API key (can also be set via OPENAI_API_KEY / ANTHROPIC_API_KEY)
    pub api_key: Option<String>,
    /// Base URL for API endpoint (for custom or proxy endpoints)
    pub base_url: Option<String>,
    /// Sampling temperature; the service default when unset
    pub temperature: Option<f32>,
    /// Maximum tokens to generate; the service default when unset
    pub max_tokens: Option<u32>,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            provider: default_provider(),
            model: default_model(),
            api_key: None,
            base_url: None,
            temperature: None,
            max_tokens: None,
        }
    }
}

// Default value functions
fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string()
}

fn default_enabled() -> bool {
    true
}

fn default_provider() -> String {
    "openai".to_string()
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

impl ScraperConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_SCRAPE__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_SCRAPE__COMPLETION__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`ScraperConfig::load`] for source priority.
pub fn load_config() -> Result<ScraperConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: RECIPE_SCRAPE__COMPLETION__MODEL
        .add_source(
            Environment::with_prefix("RECIPE_SCRAPE")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

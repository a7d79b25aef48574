pub mod builder;
pub mod completion;
pub mod config;
pub mod error;
pub mod extractors;
pub mod fetcher;
pub mod model;
pub mod pipeline;
pub mod sections;

pub use builder::RecipeScraperBuilder;
pub use completion::{CompletionBackend, CompletionProvider, EXTRACTION_PROMPT};
pub use config::{MergePolicy, ScraperConfig};
pub use error::{CompletionError, ScrapeError};
pub use model::{ExtractedRecipe, ExtractionOutcome, Ingredient, ScrapeResult, UNTITLED};
pub use pipeline::RecipeScraper;

use std::time::Duration;

/// Scrape a recipe using settings from `config.toml` and the environment.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let result = recipe_scrape::scrape_recipe("https://example.com/soup").await?;
/// println!("{}", result.recipe.title);
/// # Ok(())
/// # }
/// ```
pub async fn scrape_recipe(url: &str) -> Result<ScrapeResult, ScrapeError> {
    let config = ScraperConfig::load()?;
    RecipeScraper::from_config(&config)?.scrape(url).await
}

/// Like [`scrape_recipe`], with an explicit page fetch timeout.
pub async fn scrape_recipe_with_timeout(
    url: &str,
    timeout: Duration,
) -> Result<ScrapeResult, ScrapeError> {
    let mut config = ScraperConfig::load()?;
    config.timeout = timeout.as_secs().max(1);
    RecipeScraper::from_config(&config)?.scrape(url).await
}

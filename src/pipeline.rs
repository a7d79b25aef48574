use crate::builder::RecipeScraperBuilder;
use crate::completion::{CompletionProvider, ProviderFactory, EXTRACTION_PROMPT};
use crate::config::{MergePolicy, ScraperConfig};
use crate::error::ScrapeError;
use crate::extractors::{page_text, StructuralExtractor};
use crate::fetcher::RequestFetcher;
use crate::model::{ExtractedRecipe, ExtractionOutcome, ScrapeResult};
use crate::sections::{parse_completion, CompletionSections};
use log::{debug, info, warn};
use scraper::Html;
use std::time::Duration;

/// Fetches a page, extracts a recipe from its markup, and asks a completion
/// service to fill in what the markup did not provide.
///
/// Holds no state between calls; every [`scrape`](Self::scrape) is independent.
pub struct RecipeScraper {
    fetcher: RequestFetcher,
    provider: Option<Box<dyn CompletionProvider>>,
    merge_policy: MergePolicy,
}

impl RecipeScraper {
    pub fn new(
        fetcher: RequestFetcher,
        provider: Option<Box<dyn CompletionProvider>>,
        merge_policy: MergePolicy,
    ) -> Self {
        Self {
            fetcher,
            provider,
            merge_policy,
        }
    }

    /// Creates a new builder for configuring a scraper
    pub fn builder() -> RecipeScraperBuilder {
        RecipeScraperBuilder::default()
    }

    /// Build a scraper from loaded configuration.
    ///
    /// A provider that cannot be created (for example, no API key) only
    /// disables the fallback; scrapes that need it come back degraded.
    pub fn from_config(config: &ScraperConfig) -> Result<Self, ScrapeError> {
        let fetcher = RequestFetcher::new(
            Some(Duration::from_secs(config.timeout)),
            &config.user_agent,
        )?;

        let provider = if config.completion.enabled {
            match ProviderFactory::create(&config.completion) {
                Ok(provider) => Some(provider),
                Err(e) => {
                    warn!("Completion fallback disabled: {}", e);
                    None
                }
            }
        } else {
            None
        };

        Ok(Self::new(fetcher, provider, config.merge_policy))
    }

    pub fn merge_policy(&self) -> MergePolicy {
        self.merge_policy
    }

    pub fn has_completion(&self) -> bool {
        self.provider.is_some()
    }

    /// Scrape a recipe from `url`.
    ///
    /// Fails only when the page cannot be fetched. A failing completion
    /// service yields an `Ok` result marked [`ExtractionOutcome::Degraded`].
    pub async fn scrape(&self, url: &str) -> Result<ScrapeResult, ScrapeError> {
        info!("Scraping recipe from {}", url);
        let html = self.fetcher.fetch(url).await?;
        self.scrape_html(url, &html).await
    }

    /// Run extraction on a page body that has already been fetched.
    pub async fn scrape_html(&self, url: &str, html: &str) -> Result<ScrapeResult, ScrapeError> {
        // The parsed document is not Send, so it must not live across an await
        let (structural, text) = {
            let document = Html::parse_document(html);
            let structural = StructuralExtractor.extract(&document)?;
            let text = structural.needs_fallback().then(|| page_text(&document));
            (structural, text)
        };

        let Some(text) = text else {
            debug!("Structural extraction complete for {}", url);
            return Ok(ScrapeResult {
                recipe: structural,
                outcome: ExtractionOutcome::Structural,
            });
        };

        info!(
            "Structural extraction incomplete for {} ({} instructions, {} ingredients), using completion fallback",
            url,
            structural.instructions.len(),
            structural.ingredients.len()
        );

        let Some(sections) = self.complete(&text).await else {
            return Ok(ScrapeResult {
                recipe: structural,
                outcome: ExtractionOutcome::Degraded,
            });
        };

        Ok(ScrapeResult {
            recipe: merge(structural, sections, self.merge_policy),
            outcome: ExtractionOutcome::Completed,
        })
    }

    /// Ask the provider to read the page text. Errors are logged, never returned.
    async fn complete(&self, text: &str) -> Option<CompletionSections> {
        let Some(provider) = self.provider.as_deref() else {
            warn!("No completion provider configured, returning structural result");
            return None;
        };

        debug!(
            "Sending {} characters of page text to {}",
            text.len(),
            provider.provider_name()
        );

        match provider.complete(EXTRACTION_PROMPT, text).await {
            Ok(response) => Some(parse_completion(&response)),
            Err(e) => {
                warn!(
                    "Completion with {} failed, returning structural result: {}",
                    provider.provider_name(),
                    e
                );
                None
            }
        }
    }
}

/// Combine a structural result with the sections parsed from a completion.
pub fn merge(
    structural: ExtractedRecipe,
    sections: CompletionSections,
    policy: MergePolicy,
) -> ExtractedRecipe {
    match policy {
        MergePolicy::FillEmpty => ExtractedRecipe {
            title: sections.title.unwrap_or(structural.title),
            description: sections.description.unwrap_or(structural.description),
            instructions: fill(structural.instructions, sections.instructions),
            ingredients: fill(structural.ingredients, sections.ingredients),
            categories: fill(structural.categories, sections.categories),
        },
        MergePolicy::ReplaceSections => ExtractedRecipe {
            title: structural.title,
            description: structural.description,
            instructions: sections.instructions,
            ingredients: sections.ingredients,
            categories: sections.categories,
        },
    }
}

fn fill<T>(scraped: Vec<T>, completed: Vec<T>) -> Vec<T> {
    if scraped.is_empty() {
        completed
    } else {
        scraped
    }
}

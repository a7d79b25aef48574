use serde::{Deserialize, Serialize};

/// Title used when a page has no `<h1>`.
pub const UNTITLED: &str = "Untitled";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    /// Always empty when produced by the scraper.
    pub quantity: String,
}

impl Ingredient {
    pub fn named(name: impl Into<String>) -> Self {
        Ingredient {
            name: name.into(),
            quantity: String::new(),
        }
    }
}

/// Recipe fields pulled out of a single page.
///
/// Serializes to the shape accepted by the recipe creation endpoint:
/// `{"title", "description", "instructions", "ingredients": [{"name", "quantity"}], "categories"}`.
/// Identifiers and relational links are assigned by whoever stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRecipe {
    pub title: String,
    pub description: String,
    pub instructions: Vec<String>,
    pub ingredients: Vec<Ingredient>,
    pub categories: Vec<String>,
}

impl Default for ExtractedRecipe {
    fn default() -> Self {
        ExtractedRecipe {
            title: UNTITLED.to_string(),
            description: String::new(),
            instructions: Vec::new(),
            ingredients: Vec::new(),
            categories: Vec::new(),
        }
    }
}

impl ExtractedRecipe {
    /// Structural extraction is incomplete without both instructions and ingredients.
    pub fn needs_fallback(&self) -> bool {
        self.instructions.is_empty() || self.ingredients.is_empty()
    }

    /// Fields the recipe store refuses to accept when empty.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.instructions.is_empty() {
            missing.push("instructions");
        }
        if self.ingredients.is_empty() {
            missing.push("ingredients");
        }
        missing
    }
}

/// How a [`ScrapeResult`] was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionOutcome {
    /// Structural selectors found both instructions and ingredients.
    Structural,
    /// Structural extraction was incomplete and the completion response was merged in.
    Completed,
    /// Structural extraction was incomplete and no completion was available,
    /// so the record may be partially or fully empty.
    Degraded,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapeResult {
    pub recipe: ExtractedRecipe,
    pub outcome: ExtractionOutcome,
}

impl ScrapeResult {
    pub fn is_degraded(&self) -> bool {
        self.outcome == ExtractionOutcome::Degraded
    }
}

use crate::error::ScrapeError;
use crate::extractors::{element_text, selector};
use crate::model::{ExtractedRecipe, Ingredient, UNTITLED};
use log::debug;
use scraper::Html;

const TITLE: &str = "h1";
const DESCRIPTION: &str = r#"meta[name="description"]"#;
const INSTRUCTIONS: &str = "li.instruction";
const INGREDIENTS: &str = "li.ingredient";
const CATEGORIES: &str = "a.category";

/// Pulls recipe fields out of a page using fixed tag and class selectors.
///
/// Only pages that mark up their recipe with `li.instruction`,
/// `li.ingredient` and `a.category` yield anything beyond a title and
/// description. Extraction never looks outside the given document, so the
/// same document always produces the same recipe.
pub struct StructuralExtractor;

impl StructuralExtractor {
    pub fn extract(&self, document: &Html) -> Result<ExtractedRecipe, ScrapeError> {
        debug!("Attempting to extract recipe using structural selectors");

        let title = document
            .select(&selector(TITLE)?)
            .next()
            .map(|h1| element_text(&h1))
            .unwrap_or_else(|| UNTITLED.to_string());

        let description = document
            .select(&selector(DESCRIPTION)?)
            .next()
            .and_then(|meta| meta.value().attr("content"))
            .unwrap_or_default()
            .to_string();

        let instructions = texts(document, INSTRUCTIONS)?;

        let ingredients = texts(document, INGREDIENTS)?
            .into_iter()
            .map(Ingredient::named)
            .collect::<Vec<_>>();

        let categories = texts(document, CATEGORIES)?;

        debug!("Recipe title: {}", title);
        debug!("Instructions count: {}", instructions.len());
        debug!("Ingredients count: {}", ingredients.len());
        debug!("Categories count: {}", categories.len());

        Ok(ExtractedRecipe {
            title,
            description,
            instructions,
            ingredients,
            categories,
        })
    }
}

fn texts(document: &Html, css: &str) -> Result<Vec<String>, ScrapeError> {
    Ok(document
        .select(&selector(css)?)
        .map(|element| element_text(&element))
        .collect())
}

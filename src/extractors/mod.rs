use crate::error::ScrapeError;
use scraper::{ElementRef, Selector};

mod structural;
mod text;

pub use self::structural::StructuralExtractor;
pub use self::text::page_text;

pub(crate) fn selector(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css)
        .map_err(|e| ScrapeError::ExtractionFailed(format!("invalid selector '{css}': {e}")))
}

/// Text content of an element with whitespace runs collapsed.
pub(crate) fn element_text(element: &ElementRef) -> String {
    normalize_whitespace(&element.text().collect::<String>())
}

pub(crate) fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

use crate::extractors::normalize_whitespace;
use scraper::{ElementRef, Html, Node};

/// Flatten a page to its visible text, one text node per line.
pub fn page_text(document: &Html) -> String {
    let mut lines = Vec::new();
    collect_text(&document.root_element(), &mut lines);
    lines.join("\n")
}

fn collect_text(element: &ElementRef, lines: &mut Vec<String>) {
    if is_hidden(element) || should_skip_element(element) {
        return;
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let normalized = normalize_whitespace(text);
                if !normalized.is_empty() {
                    lines.push(normalized);
                }
            }
            Node::Element(_) => {
                if let Some(child_ref) = ElementRef::wrap(child) {
                    collect_text(&child_ref, lines);
                }
            }
            _ => {}
        }
    }
}

fn is_hidden(element: &ElementRef) -> bool {
    element.value().attr("hidden").is_some()
        || element
            .value()
            .attr("style")
            .map(|s| s.contains("display: none") || s.contains("visibility: hidden"))
            .unwrap_or(false)
}

fn should_skip_element(element: &ElementRef) -> bool {
    matches!(
        element.value().name(),
        "script" | "style" | "noscript" | "template" | "iframe" | "canvas" | "svg"
    )
}

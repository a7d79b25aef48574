//! Reads the labeled plain-text layout a completion service answers with.
//!
//! The first line is the title and the second the description. After that,
//! a line starting with `Instructions:`, `Ingredients:` or `Categories:`
//! switches which section following lines belong to. Lines seen before any
//! marker are dropped. The format is loose and the parser keeps it that way.
//! Nothing here ever fails: unrecognized input just yields empty sections.

use crate::model::Ingredient;

const INSTRUCTIONS_MARKER: &str = "Instructions:";
const INGREDIENTS_MARKER: &str = "Ingredients:";
const CATEGORIES_MARKER: &str = "Categories:";

/// Which section body lines are currently appended to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    None,
    Instructions,
    Ingredients,
    Categories,
}

/// Result of feeding one line to [`transition`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'a> {
    /// The line was a marker; it carries no content itself.
    Switch(Section),
    /// The line belongs to the given section.
    Append(Section, &'a str),
    /// No section is active yet.
    Discard,
}

/// Pure transition over a single line, given the active section.
pub fn transition(state: Section, line: &str) -> Step<'_> {
    if line.starts_with(INSTRUCTIONS_MARKER) {
        Step::Switch(Section::Instructions)
    } else if line.starts_with(INGREDIENTS_MARKER) {
        Step::Switch(Section::Ingredients)
    } else if line.starts_with(CATEGORIES_MARKER) {
        Step::Switch(Section::Categories)
    } else if state == Section::None {
        Step::Discard
    } else {
        Step::Append(state, line)
    }
}

/// Fields recovered from a completion response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionSections {
    /// `None` when the response was empty
    pub title: Option<String>,
    /// `None` when the response had fewer than two lines
    pub description: Option<String>,
    pub instructions: Vec<String>,
    pub ingredients: Vec<Ingredient>,
    pub categories: Vec<String>,
}

pub fn parse_completion(response: &str) -> CompletionSections {
    let mut lines = response.trim().lines();

    let title = lines.next().map(|line| line.trim().to_string());
    let description = lines.next().map(|line| line.trim().to_string());

    let mut instructions = Vec::new();
    let mut ingredients = Vec::new();
    let mut categories = Vec::new();
    let mut state = Section::None;

    for line in lines {
        match transition(state, line) {
            Step::Switch(next) => state = next,
            Step::Append(section, text) => match section {
                Section::Instructions => instructions.push(text),
                Section::Ingredients => ingredients.push(text),
                Section::Categories => categories.push(text),
                Section::None => {}
            },
            Step::Discard => {}
        }
    }

    CompletionSections {
        title,
        description,
        instructions: split_section(&instructions),
        ingredients: split_section(&ingredients)
            .into_iter()
            .map(Ingredient::named)
            .collect(),
        categories: split_section(&categories),
    }
}

/// Join a section's lines, trim the block, and split it back into items.
fn split_section(lines: &[&str]) -> Vec<String> {
    let raw = lines.join("\n");
    let raw = raw.trim();
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split('\n').map(str::to_string).collect()
}

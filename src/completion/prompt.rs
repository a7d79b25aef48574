/// The system prompt sent with the flattened page text.
///
/// The layout it asks for is exactly what
/// [`parse_completion`](crate::sections::parse_completion) reads back: title
/// on the first line, description on the second, then labeled sections with
/// one item per line.
pub const EXTRACTION_PROMPT: &str = "Extract the recipe details from the following text.

Reply in plain text using exactly this layout and nothing else:

<recipe title>
<one sentence description>
Instructions:
<one step per line>
Ingredients:
<one ingredient per line>
Categories:
<one category per line>";

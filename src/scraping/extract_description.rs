use scraper::Html;

use super::{element_text, select_first};

/// Full text of the feature bullet list.
pub fn extract_description(document: &Html) -> Option<String> {
    select_first(document, "#feature-bullets").and_then(element_text)
}

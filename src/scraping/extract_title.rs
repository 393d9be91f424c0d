use scraper::Html;

use super::{element_text, select_first};

pub fn extract_title(document: &Html) -> Option<String> {
    select_first(document, "#productTitle").and_then(element_text)
}

use scraper::Html;

use super::{non_empty, select_first};

const RATING_SUFFIX: &str = "out of 5 stars";

/// Reads the `title` attribute of the rating popover, e.g. `4.5 out of 5 stars`,
/// and keeps only the numeric part.
pub fn extract_rating(document: &Html) -> Option<String> {
    let rating_text = select_first(document, "#acrPopover")?.value().attr("title")?;
    normalize_rating(rating_text)
}

pub fn normalize_rating(rating_text: &str) -> Option<String> {
    non_empty(rating_text.replace(RATING_SUFFIX, ""))
}

use scraper::{ElementRef, Html, Selector};

pub mod extract_brand_name;
pub mod extract_description;
pub mod extract_image;
pub mod extract_price;
pub mod extract_rating;
pub mod extract_title;

/// First element matching `selector`, or `None` when the selector does not
/// parse or nothing matches.
pub(crate) fn select_first<'a>(document: &'a Html, selector: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector).ok()?;
    document.select(&selector).next()
}

/// Concatenated text of an element with surrounding whitespace removed.
pub(crate) fn element_text(element: ElementRef<'_>) -> Option<String> {
    non_empty(element.text().collect::<String>())
}

pub(crate) fn non_empty(value: impl AsRef<str>) -> Option<String> {
    let trimmed = value.as_ref().trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

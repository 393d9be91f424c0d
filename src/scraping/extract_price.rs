use scraper::Html;

use super::{element_text, select_first};

/// Displayed price text, left unparsed (currency symbol included).
pub fn extract_price(document: &Html) -> Option<String> {
    select_first(document, "span.a-price span.a-offscreen").and_then(element_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_first_offscreen_price() {
        let document = Html::parse_document(
            r#"<div id="corePrice">
                 <span class="a-price"><span class="a-offscreen"> $249.99 </span><span aria-hidden="true">$249<sup>99</sup></span></span>
                 <span class="a-price a-text-price"><span class="a-offscreen">$349.99</span></span>
               </div>"#,
        );

        assert_eq!(extract_price(&document).as_deref(), Some("$249.99"));
    }

    #[test]
    fn offscreen_outside_price_block_is_ignored() {
        let document = Html::parse_document(r#"<span class="a-offscreen">$1.00</span>"#);

        assert_eq!(extract_price(&document), None);
    }
}

use scraper::Html;

use super::{non_empty, select_first};

pub fn extract_image(document: &Html) -> Option<String> {
    select_first(document, "#landingImage")?
        .value()
        .attr("src")
        .and_then(non_empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_landing_image_src() {
        let document = Html::parse_document(
            r#"<img id="landingImage" alt="Headphones" src="https://m.media-amazon.com/images/I/51abc.jpg">"#,
        );

        assert_eq!(
            extract_image(&document).as_deref(),
            Some("https://m.media-amazon.com/images/I/51abc.jpg")
        );
    }

    #[test]
    fn landing_image_without_src_is_absent() {
        let document = Html::parse_document(r#"<img id="landingImage" data-old-hires="x.jpg">"#);

        assert_eq!(extract_image(&document), None);
    }
}

use url::{Position, Url};

/// Display brand derived from the URL authority, e.g. `www.amazon.com` -> `Amazon.com`.
/// Userinfo and port are kept as written.
pub fn extract_brand_name(url: &Url) -> String {
    url[Position::BeforeUsername..Position::AfterPort].replace("www.amazon", "Amazon")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brand(url: &str) -> String {
        extract_brand_name(&Url::parse(url).unwrap())
    }

    #[test]
    fn amazon_hosts_get_display_name() {
        assert_eq!(brand("https://www.amazon.com/dp/B0863TXGM3"), "Amazon.com");
        assert_eq!(brand("https://www.amazon.co.uk/dp/B0863TXGM3?th=1"), "Amazon.co.uk");
    }

    #[test]
    fn other_hosts_are_returned_verbatim() {
        assert_eq!(brand("https://shop.example.org/item/42"), "shop.example.org");
        assert_eq!(brand("https://amazon.com/dp/X"), "amazon.com");
    }

    #[test]
    fn port_and_userinfo_are_kept() {
        assert_eq!(brand("http://127.0.0.1:8080/dp/X"), "127.0.0.1:8080");
        assert_eq!(brand("https://www.amazon.de:8443/dp/X"), "Amazon.de:8443");
        assert_eq!(brand("https://user@www.amazon.com/dp/X"), "user@Amazon.com");
    }
}

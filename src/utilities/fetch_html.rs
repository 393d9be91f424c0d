use anyhow::{bail, Context, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use url::Url;

/// Builds the shared HTTP client, presenting itself as a desktop browser.
pub fn build_client(user_agent: &str) -> Result<Client> {
    Client::builder()
        .user_agent(user_agent)
        .build()
        .context("Failed to build HTTP client")
}

/// Fetches a product page body. No retry and no timeout: a slow upstream
/// holds the request until the transport gives up.
pub async fn fetch_html(client: &Client, url: &Url) -> Result<String> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("Failed to send request to {}", url))?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(%url, %status, "product page answered with a non-success status");
    }

    if let Some(content_type) = response.headers().get(CONTENT_TYPE) {
        let content_type = content_type.to_str().unwrap_or_default();
        if !content_type.contains("html") {
            bail!("Unexpected content type for {}: {}", url, content_type);
        }
    }

    response
        .text()
        .await
        .with_context(|| format!("Failed to read response body from {}", url))
}

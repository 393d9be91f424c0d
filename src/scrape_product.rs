use anyhow::{Context, Result};
use reqwest::Client;
use url::Url;

use crate::extract_data::{extract_data, ProductRecord};
use crate::utilities::fetch_html::fetch_html;
use crate::utilities::product_log::ProductLog;

/// Fetches a product page, extracts its fields and appends them to the
/// product log.
pub async fn scrape_product(
    client: &Client,
    log: &ProductLog,
    product_url: &str,
) -> Result<ProductRecord> {
    let url = Url::parse(product_url)
        .with_context(|| format!("Invalid product URL: {}", product_url))?;

    let html = fetch_html(client, &url).await?;
    let data = extract_data(&html);

    log.append(product_url, &data).await?;

    Ok(ProductRecord::from_scraped(&url, data))
}

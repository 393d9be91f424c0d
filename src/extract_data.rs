use scraper::Html;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::scraping::{
    extract_brand_name, extract_description, extract_image, extract_price, extract_rating,
    extract_title,
};

pub const NO_TITLE: &str = "No title available";
pub const NO_DESCRIPTION: &str = "No description available";

/// Raw values as found in the page, before placeholders are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrapedData {
    pub title: Option<String>,
    pub rating: Option<String>,
    pub price: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub brand_name: String,
    pub product_name: String,
    pub product_description: String,
    pub product_image: Option<String>,
    pub product_price: Option<String>,
    pub product_rating: Option<String>,
}

// Each field has its own lookup so a markup change only loses that field.
pub fn extract_data(html_content: &str) -> ScrapedData {
    let document = Html::parse_document(html_content);

    ScrapedData {
        title: extract_title::extract_title(&document),
        rating: extract_rating::extract_rating(&document),
        price: extract_price::extract_price(&document),
        image: extract_image::extract_image(&document),
        description: extract_description::extract_description(&document),
    }
}

impl ProductRecord {
    pub fn from_scraped(url: &Url, data: ScrapedData) -> Self {
        Self {
            brand_name: extract_brand_name::extract_brand_name(url),
            product_name: data.title.unwrap_or_else(|| NO_TITLE.to_string()),
            product_description: data
                .description
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            product_image: data.image,
            product_price: data.price,
            product_rating: data.rating,
        }
    }
}

use actix_web::{post, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::ad::generate_ad::generate_ad;
use crate::api::error::ApiError;
use crate::api::AppState;
use crate::extract_data::ProductRecord;
use crate::scrape_product::scrape_product;

#[derive(Debug, Deserialize)]
pub struct AdRequest {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default, rename = "ageGroup")]
    pub age_group: String,
}

#[derive(Debug, Serialize)]
pub struct AdResponse {
    #[serde(flatten)]
    pub product: ProductRecord,
    #[serde(rename = "adCopy")]
    pub ad_copy: String,
}

#[post("/createAd")]
pub async fn create_ad(
    state: web::Data<AppState>,
    request: web::Json<AdRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();

    if request.url.trim().is_empty() {
        return Err(ApiError::MissingUrl);
    }

    tracing::info!(url = %request.url, "received ad request");

    let product = scrape_product(&state.client, &state.product_log, &request.url)
        .await
        .map_err(|e| {
            tracing::error!(url = %request.url, "error scraping product data: {e:#}");
            ApiError::ScrapeFailed
        })?;

    tracing::info!(?product, "scraped product data");

    let ad_copy = generate_ad(&product, &request.gender, &request.age_group);

    Ok(HttpResponse::Ok().json(AdResponse { product, ad_copy }))
}

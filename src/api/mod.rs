use actix_cors::Cors;
use actix_web::{get, web, HttpResponse, Responder};
use reqwest::Client;

use crate::api::error::ApiError;
use crate::utilities::product_log::ProductLog;

pub mod create_ad;
pub mod error;

/// Shared across workers: one HTTP client and the product log.
pub struct AppState {
    pub client: Client,
    pub product_log: ProductLog,
}

#[get("/healthz")]
async fn healthz() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        tracing::warn!("rejected request body: {err}");
        ApiError::InvalidBody(err.to_string()).into()
    });

    cfg.app_data(json_config)
        .service(create_ad::create_ad)
        .service(healthz);
}

pub fn cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}

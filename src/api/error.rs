use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;

/// Errors surfaced to API callers. Causes stay in the server log.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No URL provided")]
    MissingUrl,
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error("Failed to scrape the product data")]
    ScrapeFailed,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingUrl | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::ScrapeFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "detail": self.to_string() }))
    }
}

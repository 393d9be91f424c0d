use actix_web::{web, App, HttpServer};
use colored::Colorize;

use crate::api::AppState;
use crate::utilities::fetch_html::build_client;
use crate::utilities::product_log::ProductLog;

mod ad;
mod api;
mod config;
mod extract_data;
mod observability;
mod scrape_product;
mod scraping;
mod utilities;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    observability::init_logging()?;

    // Load configuration settings
    let config = match crate::config::load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{}", format!("Failed to load configuration: {}", e).red());
            return Err(e.into());
        }
    };

    let state = web::Data::new(AppState {
        client: build_client(&config.scraper.user_agent)?,
        product_log: ProductLog::new(&config.storage.csv_path),
    });
    let allowed_origins = config.cors.allowed_origins.clone();

    println!(
        "{}",
        format!(
            "Ad copy service listening on http://{}:{}",
            config.server.host, config.server.port
        )
        .green()
    );
    tracing::info!(
        csv_path = %state.product_log.path().display(),
        origins = ?allowed_origins,
        "product log and CORS origins configured"
    );

    HttpServer::new(move || {
        App::new()
            .wrap(api::cors(&allowed_origins))
            .app_data(state.clone())
            .configure(api::configure)
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await?;

    Ok(())
}

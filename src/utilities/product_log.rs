use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv_async::AsyncWriterBuilder;
use tokio::fs::OpenOptions;
use tokio::sync::Mutex;
use crate::extract_data::{ScrapedData, NO_TITLE};

pub const HEADERS: [&str; 6] = [
    "Title",
    "Rating",
    "Price",
    "Image URL",
    "Description",
    "Product URL",
];

/// Append-only CSV log of every successful extraction.
///
/// Appends are serialized through an async mutex so concurrent requests
/// never interleave partial rows. The header is written when the file is
/// empty.
#[derive(Debug)]
pub struct ProductLog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl ProductLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `product_url` is logged exactly as the caller sent it.
    pub async fn append(&self, product_url: &str, data: &ScrapedData) -> Result<()> {
        let _guard = self.lock.lock().await;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .with_context(|| format!("Failed to open product log {}", self.path.display()))?;

        let is_new = file
            .metadata()
            .await
            .context("Failed to read product log metadata")?
            .len()
            == 0;

        let mut csv_writer = AsyncWriterBuilder::new().create_writer(file);

        if is_new {
            csv_writer
                .write_record(HEADERS)
                .await
                .context("Failed to write product log header")?;
        }

        let row = [
            data.title.as_deref().unwrap_or(NO_TITLE),
            data.rating.as_deref().unwrap_or_default(),
            data.price.as_deref().unwrap_or_default(),
            data.image.as_deref().unwrap_or_default(),
            data.description.as_deref().unwrap_or_default(),
            product_url,
        ];
        csv_writer
            .write_record(row)
            .await
            .context("Failed to write product log row")?;
        csv_writer
            .flush()
            .await
            .context("Failed to flush product log")?;

        Ok(())
    }
}

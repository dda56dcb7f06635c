use std::path::Path;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::Movie;

pub mod file;
pub mod remote;

pub use file::FileDataset;
pub use remote::RemoteDataset;

/// Source of the movies dataset.
///
/// Implementations deliver the full catalog contents in one call at
/// startup; nothing re-reads the dataset while the service is running.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait DatasetProvider: Send + Sync {
    /// Fetches every movie record, in catalog order
    async fn fetch(&self) -> AppResult<Vec<Movie>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Picks the dataset source for this deployment: the local file when it
/// exists, otherwise the configured URL.
pub fn select_provider(config: &Config) -> AppResult<Box<dyn DatasetProvider>> {
    let path = Path::new(&config.dataset_path);
    if path.exists() {
        return Ok(Box::new(FileDataset::new(path.to_path_buf())));
    }

    if let Some(url) = &config.dataset_url {
        return Ok(Box::new(RemoteDataset::new(url.clone())));
    }

    Err(AppError::NotFound(format!(
        "no dataset file at {} and no DATASET_URL configured",
        config.dataset_path
    )))
}

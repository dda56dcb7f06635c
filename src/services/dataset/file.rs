use std::path::PathBuf;

use crate::error::{AppError, AppResult};
use crate::models::Movie;
use crate::services::dataset::DatasetProvider;

/// Reads the movies dataset from a local JSON file holding an array of
/// movie records
#[derive(Debug, Clone)]
pub struct FileDataset {
    path: PathBuf,
}

impl FileDataset {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait::async_trait]
impl DatasetProvider for FileDataset {
    async fn fetch(&self) -> AppResult<Vec<Movie>> {
        if !self.path.exists() {
            return Err(AppError::NotFound(format!(
                "dataset file {} does not exist",
                self.path.display()
            )));
        }

        let raw = tokio::fs::read_to_string(&self.path).await?;
        let movies: Vec<Movie> = serde_json::from_str(&raw)
            .map_err(|e| AppError::Dataset(format!("malformed dataset JSON: {}", e)))?;

        tracing::info!(
            path = %self.path.display(),
            movies = movies.len(),
            "Dataset loaded from file"
        );

        Ok(movies)
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

use reqwest::Client as HttpClient;

use crate::error::{AppError, AppResult};
use crate::models::Movie;
use crate::services::dataset::DatasetProvider;

/// Fetches the movies dataset over HTTP, for deployments that pull the
/// JSON from object storage instead of baking it into the image
#[derive(Debug, Clone)]
pub struct RemoteDataset {
    http_client: HttpClient,
    url: String,
}

impl RemoteDataset {
    pub fn new(url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            url,
        }
    }
}

#[async_trait::async_trait]
impl DatasetProvider for RemoteDataset {
    async fn fetch(&self) -> AppResult<Vec<Movie>> {
        tracing::debug!(url = %self.url, "Fetching dataset");

        let response = self.http_client.get(&self.url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "dataset endpoint returned status {}: {}",
                status, body
            )));
        }

        let movies: Vec<Movie> = response.json().await?;

        tracing::info!(
            url = %self.url,
            movies = movies.len(),
            "Dataset fetched from remote"
        );

        Ok(movies)
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}

use std::path::Path;

use crate::config::Config;
use crate::error::AppResult;
use crate::models::Catalog;
use crate::services::artifact::SimilarityArtifact;
use crate::services::dataset::{self, DatasetProvider};
use crate::services::recommender::Recommender;
use crate::similarity::{CosineSimilarityBuilder, SimilarityBuilder};

/// Assembles the recommender at process start: load the precomputed
/// artifact when one is usable, otherwise fetch the dataset, build the
/// matrix, and persist a fresh artifact for the next boot.
pub async fn load_recommender(config: &Config) -> AppResult<Recommender> {
    let artifact_path = Path::new(&config.artifact_path);

    if artifact_path.exists() {
        match load_from_artifact(artifact_path) {
            Ok(recommender) => return Ok(recommender),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    path = %artifact_path.display(),
                    "Ignoring unusable similarity artifact, rebuilding"
                );
            }
        }
    }

    let provider = dataset::select_provider(config)?;
    let builder = CosineSimilarityBuilder::new(config.max_features);
    let recommender = build_recommender(provider.as_ref(), &builder).await?;

    // A failed save never blocks startup.
    let artifact = SimilarityArtifact::from_recommender(&recommender);
    match artifact.save(artifact_path) {
        Ok(()) => {
            tracing::info!(path = %artifact_path.display(), "Similarity artifact persisted");
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                path = %artifact_path.display(),
                "Failed to persist similarity artifact"
            );
        }
    }

    Ok(recommender)
}

fn load_from_artifact(path: &Path) -> AppResult<Recommender> {
    let artifact = SimilarityArtifact::load(path)?;

    tracing::info!(
        path = %path.display(),
        movies = artifact.movie_count(),
        built_at = %artifact.built_at,
        "Loaded precomputed similarity artifact"
    );

    artifact.into_recommender()
}

/// Fetches the dataset and assembles a recommender through the injected
/// similarity builder
pub async fn build_recommender(
    provider: &dyn DatasetProvider,
    builder: &dyn SimilarityBuilder,
) -> AppResult<Recommender> {
    let movies = provider.fetch().await?;

    tracing::info!(
        movies = movies.len(),
        provider = provider.name(),
        "Building similarity matrix"
    );

    let corpus: Vec<String> = movies.iter().map(|m| m.tags.clone()).collect();
    let matrix = builder.build(&corpus)?;
    let catalog = Catalog::new(movies);

    Ok(Recommender::new(catalog, matrix)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::Movie;
    use crate::services::dataset::MockDatasetProvider;
    use crate::similarity::builder::MockSimilarityBuilder;
    use crate::similarity::SimilarityMatrix;

    fn sample_movies() -> Vec<Movie> {
        vec![
            Movie::new(1, "Alien".to_string(), "space horror".to_string()),
            Movie::new(2, "Aliens".to_string(), "space marines".to_string()),
            Movie::new(3, "Heat".to_string(), "heist crime".to_string()),
        ]
    }

    fn config_for(dir: &Path) -> Config {
        Config {
            dataset_path: dir.join("movies.json").to_string_lossy().into_owned(),
            dataset_url: None,
            artifact_path: dir.join("similarity.bin").to_string_lossy().into_owned(),
            max_features: 5000,
            host: "127.0.0.1".to_string(),
            port: 0,
        }
    }

    const DATASET_JSON: &str = r#"[
        {"movie_id": 1, "title": "Alien", "tags": "space horror crew"},
        {"movie_id": 2, "title": "Aliens", "tags": "space marines crew"}
    ]"#;

    fn identity_matrix(n: usize) -> SimilarityMatrix {
        let mut data = vec![0.0_f32; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        SimilarityMatrix::from_vec(n, data).unwrap()
    }

    #[tokio::test]
    async fn test_build_recommender_wires_catalog_and_matrix() {
        let mut provider = MockDatasetProvider::new();
        provider.expect_fetch().returning(|| Ok(sample_movies()));
        provider.expect_name().return_const("mock");

        let mut builder = MockSimilarityBuilder::new();
        builder.expect_build().returning(|corpus| {
            // The corpus is the tag blobs, in catalog order.
            assert_eq!(corpus.len(), 3);
            assert_eq!(corpus[0], "space horror");
            assert_eq!(corpus[2], "heist crime");

            let mut data = vec![0.0_f32; 9];
            for i in 0..3 {
                data[i * 3 + i] = 1.0;
            }
            data[1] = 0.8;
            data[3] = 0.8;
            SimilarityMatrix::from_vec(3, data)
        });

        let recommender = build_recommender(&provider, &builder).await.unwrap();

        assert_eq!(recommender.catalog().len(), 3);
        assert_eq!(recommender.recommend("Alien")[0], "Aliens");
    }

    #[tokio::test]
    async fn test_build_recommender_propagates_provider_failure() {
        let mut provider = MockDatasetProvider::new();
        provider
            .expect_fetch()
            .returning(|| Err(AppError::Dataset("corrupt".to_string())));

        let builder = MockSimilarityBuilder::new();

        let result = build_recommender(&provider, &builder).await;

        assert!(matches!(result, Err(AppError::Dataset(_))));
    }

    #[tokio::test]
    async fn test_load_recommender_rebuilds_over_corrupt_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path());
        std::fs::write(&config.artifact_path, b"not an artifact").unwrap();
        std::fs::write(&config.dataset_path, DATASET_JSON).unwrap();

        let recommender = load_recommender(&config).await.unwrap();

        assert_eq!(recommender.catalog().len(), 2);
        assert_eq!(recommender.recommend("Alien"), vec!["Aliens"]);
        // The rebuild replaced the garbage with a loadable artifact.
        let artifact = SimilarityArtifact::load(Path::new(&config.artifact_path)).unwrap();
        assert_eq!(artifact.movie_count(), 2);
    }

    #[tokio::test]
    async fn test_load_recommender_uses_valid_artifact_without_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path());
        // No dataset file and no URL: a rebuild attempt would fail, so
        // success proves the artifact path was taken.
        let catalog = Catalog::new(sample_movies());
        let matrix = identity_matrix(3);
        let recommender = Recommender::new(catalog, matrix).unwrap();
        SimilarityArtifact::from_recommender(&recommender)
            .save(Path::new(&config.artifact_path))
            .unwrap();

        let restored = load_recommender(&config).await.unwrap();

        assert_eq!(restored.catalog().len(), 3);
        assert_eq!(restored.catalog().index_of("Heat"), Some(2));
    }

    #[tokio::test]
    async fn test_load_recommender_without_any_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path());

        let result = load_recommender(&config).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_load_recommender_fresh_build_persists_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path());
        std::fs::write(&config.dataset_path, DATASET_JSON).unwrap();

        load_recommender(&config).await.unwrap();

        assert!(Path::new(&config.artifact_path).exists());
    }

    #[tokio::test]
    async fn test_build_recommender_rejects_mismatched_builder_output() {
        let mut provider = MockDatasetProvider::new();
        provider.expect_fetch().returning(|| Ok(sample_movies()));
        provider.expect_name().return_const("mock");

        let mut builder = MockSimilarityBuilder::new();
        builder
            .expect_build()
            .returning(|_| Ok(identity_matrix(2)));

        let result = build_recommender(&provider, &builder).await;

        assert!(matches!(result, Err(AppError::Recommender(_))));
    }
}

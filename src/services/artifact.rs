use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::error::{AppError, AppResult};
use crate::models::{Catalog, Movie};
use crate::services::recommender::Recommender;
use crate::similarity::SimilarityMatrix;

/// Artifact format version; bump when the layout changes
const ARTIFACT_VERSION: u32 = 1;

/// On-disk snapshot of a built recommender: the catalog rows plus the raw
/// similarity matrix, so startup can skip vectorization entirely.
#[derive(Debug, Serialize, Deserialize)]
pub struct SimilarityArtifact {
    version: u32,
    /// When the matrix was built
    pub built_at: DateTime<Utc>,
    movies: Vec<Movie>,
    matrix_dim: usize,
    matrix_data: Vec<f32>,
}

impl SimilarityArtifact {
    /// Snapshots a recommender for persistence
    pub fn from_recommender(recommender: &Recommender) -> Self {
        let matrix = recommender.matrix();

        Self {
            version: ARTIFACT_VERSION,
            built_at: Utc::now(),
            movies: recommender.catalog().movies().cloned().collect(),
            matrix_dim: matrix.n(),
            matrix_data: matrix.as_slice().to_vec(),
        }
    }

    /// Reassembles the recommender, re-validating the matrix dimension
    /// against the catalog
    pub fn into_recommender(self) -> AppResult<Recommender> {
        let matrix = SimilarityMatrix::from_vec(self.matrix_dim, self.matrix_data)?;
        let catalog = Catalog::new(self.movies);

        Ok(Recommender::new(catalog, matrix)?)
    }

    /// Number of catalog entries recorded in the artifact
    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Writes the artifact atomically: serialize into a temp file in the
    /// target directory, then rename over the destination.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent)?;

        let temp_file = NamedTempFile::new_in(parent)?;
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, self)
            .map_err(|e| AppError::Artifact(format!("failed to serialize artifact: {}", e)))?;
        writer.flush()?;
        drop(writer);

        temp_file
            .persist(path)
            .map_err(|e| AppError::Artifact(format!("failed to persist artifact: {}", e)))?;

        Ok(())
    }

    /// Loads an artifact from disk, rejecting unknown format versions
    pub fn load(path: &Path) -> AppResult<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let artifact: SimilarityArtifact = bincode::deserialize_from(reader)
            .map_err(|e| AppError::Artifact(format!("failed to deserialize artifact: {}", e)))?;

        if artifact.version != ARTIFACT_VERSION {
            return Err(AppError::Artifact(format!(
                "unsupported artifact version {} (expected {})",
                artifact.version, ARTIFACT_VERSION
            )));
        }

        Ok(artifact)
    }
}

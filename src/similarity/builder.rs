use crate::error::AppResult;
use crate::similarity::matrix::SimilarityMatrix;
use crate::similarity::vectorizer::{BagOfWords, DEFAULT_MAX_FEATURES};

/// Builds a similarity matrix from per-item text features.
///
/// This is the seam between recommender assembly and the concrete
/// vectorization scheme: the lookup path never depends on how scores were
/// computed, and tests can swap in synthetic matrices.
#[cfg_attr(test, mockall::automock)]
pub trait SimilarityBuilder: Send + Sync {
    /// Produces an n x n similarity matrix for the n corpus documents
    fn build(&self, corpus: &[String]) -> AppResult<SimilarityMatrix>;
}

/// Bag-of-words vectorization with pairwise cosine scores, the scheme the
/// shipped dataset was built with
#[derive(Debug, Clone)]
pub struct CosineSimilarityBuilder {
    max_features: usize,
}

impl CosineSimilarityBuilder {
    pub fn new(max_features: usize) -> Self {
        Self { max_features }
    }
}

impl Default for CosineSimilarityBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FEATURES)
    }
}

impl SimilarityBuilder for CosineSimilarityBuilder {
    fn build(&self, corpus: &[String]) -> AppResult<SimilarityMatrix> {
        let mut vectorizer = BagOfWords::new().with_max_features(self.max_features);
        let vectors = vectorizer.fit_transform(corpus)?;

        tracing::debug!(
            documents = corpus.len(),
            vocabulary = vectorizer.vocabulary_size(),
            "Corpus vectorized"
        );

        pairwise_cosine(&vectors)
    }
}

/// Pairwise cosine over the document vectors: exact 1.0 diagonal, upper
/// triangle computed once and mirrored, scores clamped to [0, 1].
fn pairwise_cosine(vectors: &[Vec<f32>]) -> AppResult<SimilarityMatrix> {
    let n = vectors.len();
    let mut data = vec![0.0_f32; n * n];

    for i in 0..n {
        data[i * n + i] = 1.0;
    }

    // Norms once per document; a zero vector is treated as orthogonal to
    // everything.
    let norms: Vec<f32> = vectors
        .iter()
        .map(|v| v.iter().map(|x| x * x).sum::<f32>().sqrt())
        .collect();

    for i in 0..n {
        for j in (i + 1)..n {
            let score = if norms[i] == 0.0 || norms[j] == 0.0 {
                0.0
            } else {
                let dot: f32 = vectors[i].iter().zip(&vectors[j]).map(|(a, b)| a * b).sum();
                (dot / (norms[i] * norms[j])).clamp(0.0, 1.0)
            };
            data[i * n + j] = score;
            data[j * n + i] = score;
        }
    }

    SimilarityMatrix::from_vec(n, data)
}

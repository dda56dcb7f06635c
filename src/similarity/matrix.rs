use crate::error::{AppError, AppResult};

/// Square, dense, row-major matrix of pairwise similarity scores.
///
/// Row i lines up with catalog index i. The matrix is built once at startup
/// and read-only afterwards; scores live in [0, 1] with an exact 1.0
/// diagonal.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    data: Vec<f32>,
}

impl SimilarityMatrix {
    /// Creates a matrix from row-major data.
    ///
    /// Fails when the data length does not match an n x n layout.
    pub fn from_vec(n: usize, data: Vec<f32>) -> AppResult<Self> {
        if data.len() != n * n {
            return Err(AppError::InvalidInput(format!(
                "similarity data holds {} cells, expected {} for a {}x{} matrix",
                data.len(),
                n * n,
                n,
                n
            )));
        }

        Ok(Self { n, data })
    }

    /// Matrix dimension (catalog size)
    pub fn n(&self) -> usize {
        self.n
    }

    /// Similarity between items i and j.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.data[i * self.n + j]
    }

    /// Full similarity row for item i.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub fn row(&self, i: usize) -> &[f32] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Raw row-major scores, for artifact storage
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

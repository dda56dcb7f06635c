use std::cmp::Ordering;

use thiserror::Error;

use crate::models::Catalog;
use crate::similarity::SimilarityMatrix;

/// Number of recommendations returned for a known title
pub const TOP_K: usize = 5;

/// Error types for recommender assembly
#[derive(Debug, Error)]
pub enum RecommenderError {
    #[error("similarity matrix is {rows}x{rows} but the catalog holds {catalog} movies")]
    DimensionMismatch { rows: usize, catalog: usize },
}

/// Content-based recommender: a catalog of movies plus the precomputed
/// pairwise similarity matrix aligned to it.
///
/// Both inputs are immutable after construction, so `recommend` is a pure
/// lookup that handlers can call concurrently without locking.
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Catalog,
    matrix: SimilarityMatrix,
}

impl Recommender {
    /// Assembles a recommender, rejecting a matrix whose dimension does not
    /// match the catalog size
    pub fn new(catalog: Catalog, matrix: SimilarityMatrix) -> Result<Self, RecommenderError> {
        if matrix.n() != catalog.len() {
            return Err(RecommenderError::DimensionMismatch {
                rows: matrix.n(),
                catalog: catalog.len(),
            });
        }

        Ok(Self { catalog, matrix })
    }

    /// The catalog this recommender serves
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The similarity matrix backing the lookups
    pub fn matrix(&self) -> &SimilarityMatrix {
        &self.matrix
    }

    /// Returns up to [`TOP_K`] catalog titles most similar to `title`, best
    /// first.
    ///
    /// An unknown title yields an empty list: that is the "no
    /// recommendations" signal, not an error. The sort is stable, so equal
    /// scores keep ascending catalog order, and the queried title itself is
    /// never part of the result.
    pub fn recommend(&self, title: &str) -> Vec<String> {
        let query_idx = match self.catalog.index_of(title) {
            Some(idx) => idx,
            None => return Vec::new(),
        };

        let mut ranked: Vec<(usize, f32)> = self
            .matrix
            .row(query_idx)
            .iter()
            .copied()
            .enumerate()
            .collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        ranked
            .into_iter()
            .filter(|&(idx, _)| idx != query_idx)
            .take(TOP_K)
            .filter_map(|(idx, _)| self.catalog.title_at(idx))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Movie;

    fn catalog_of(titles: &[&str]) -> Catalog {
        let movies = titles
            .iter()
            .enumerate()
            .map(|(i, t)| Movie::new(i as u32 + 1, t.to_string(), String::new()))
            .collect();
        Catalog::new(movies)
    }

    /// Symmetric matrix where row 0 carries the given scores and every other
    /// off-diagonal cell is 0.
    fn matrix_with_first_row(row: &[f32]) -> SimilarityMatrix {
        let n = row.len();
        let mut data = vec![0.0_f32; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        for (j, &score) in row.iter().enumerate().skip(1) {
            data[j] = score;
            data[j * n] = score;
        }
        SimilarityMatrix::from_vec(n, data).unwrap()
    }

    #[test]
    fn test_recommend_ranks_by_descending_similarity() {
        let catalog = catalog_of(&["A", "B", "C", "D", "E", "F", "G"]);
        let matrix = matrix_with_first_row(&[1.0, 0.9, 0.1, 0.8, 0.2, 0.05, 0.5]);
        let recommender = Recommender::new(catalog, matrix).unwrap();

        let result = recommender.recommend("A");

        assert_eq!(result, vec!["B", "D", "G", "E", "C"]);
    }

    #[test]
    fn test_recommend_caps_at_top_k() {
        let catalog = catalog_of(&["A", "B", "C", "D", "E", "F", "G"]);
        let matrix = matrix_with_first_row(&[1.0, 0.9, 0.1, 0.8, 0.2, 0.05, 0.5]);
        let recommender = Recommender::new(catalog, matrix).unwrap();

        assert_eq!(recommender.recommend("A").len(), TOP_K);
    }

    #[test]
    fn test_small_catalog_returns_fewer_than_top_k() {
        let catalog = catalog_of(&["A", "B", "C"]);
        let matrix = matrix_with_first_row(&[1.0, 0.3, 0.7]);
        let recommender = Recommender::new(catalog, matrix).unwrap();

        let result = recommender.recommend("A");

        assert_eq!(result, vec!["C", "B"]);
    }

    #[test]
    fn test_unknown_title_yields_empty_result() {
        let catalog = catalog_of(&["A", "B", "C"]);
        let matrix = matrix_with_first_row(&[1.0, 0.3, 0.7]);
        let recommender = Recommender::new(catalog, matrix).unwrap();

        assert!(recommender.recommend("Z").is_empty());
    }

    #[test]
    fn test_query_title_never_appears_even_under_perfect_ties() {
        // C scores 1.0 against A, tying with C's own diagonal cell. The
        // stable sort puts index 0 before index 2, so dropping a fixed
        // number of leading entries would leak "C" into its own results.
        let catalog = catalog_of(&["A", "B", "C"]);
        let data = vec![
            1.0, 0.4, 1.0, //
            0.4, 1.0, 0.2, //
            1.0, 0.2, 1.0,
        ];
        let matrix = SimilarityMatrix::from_vec(3, data).unwrap();
        let recommender = Recommender::new(catalog, matrix).unwrap();

        let result = recommender.recommend("C");

        assert_eq!(result, vec!["A", "B"]);
    }

    #[test]
    fn test_equal_scores_keep_catalog_order() {
        let catalog = catalog_of(&["A", "B", "C", "D"]);
        let matrix = matrix_with_first_row(&[1.0, 0.5, 0.5, 0.5]);
        let recommender = Recommender::new(catalog, matrix).unwrap();

        assert_eq!(recommender.recommend("A"), vec!["B", "C", "D"]);
    }

    #[test]
    fn test_recommend_is_idempotent() {
        let catalog = catalog_of(&["A", "B", "C", "D", "E", "F", "G"]);
        let matrix = matrix_with_first_row(&[1.0, 0.9, 0.1, 0.8, 0.2, 0.05, 0.5]);
        let recommender = Recommender::new(catalog, matrix).unwrap();

        assert_eq!(recommender.recommend("A"), recommender.recommend("A"));
    }

    #[test]
    fn test_duplicate_title_uses_first_catalog_row() {
        // "X" appears at indices 0 and 2; lookups must read row 0, which
        // ranks the duplicate above "Y". Row 2 would rank "Y" first.
        let catalog = catalog_of(&["X", "Y", "X"]);
        let data = vec![
            1.0, 0.2, 0.9, //
            0.2, 1.0, 0.95, //
            0.9, 0.95, 1.0,
        ];
        let matrix = SimilarityMatrix::from_vec(3, data).unwrap();
        let recommender = Recommender::new(catalog, matrix).unwrap();

        let result = recommender.recommend("X");

        // The duplicate row at index 2 is a legitimate candidate.
        assert_eq!(result, vec!["X", "Y"]);
    }

    #[test]
    fn test_construction_rejects_dimension_mismatch() {
        let catalog = catalog_of(&["A", "B", "C"]);
        let matrix = matrix_with_first_row(&[1.0, 0.5]);

        let result = Recommender::new(catalog, matrix);

        assert!(matches!(
            result,
            Err(RecommenderError::DimensionMismatch { rows: 2, catalog: 3 })
        ));
    }

    #[test]
    fn test_empty_catalog_recommends_nothing() {
        let recommender = Recommender::new(
            Catalog::new(vec![]),
            SimilarityMatrix::from_vec(0, vec![]).unwrap(),
        )
        .unwrap();

        assert!(recommender.recommend("anything").is_empty());
    }
}

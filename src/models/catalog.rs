use std::collections::HashMap;

use crate::models::Movie;

/// Ordered, indexed collection of recommendable movies.
///
/// A movie's catalog index is its position in dataset order and lines up
/// with the matching row of the similarity matrix. The title lookup keeps
/// the first index when the same title appears more than once; later rows
/// stay in the catalog so matrix alignment is preserved.
#[derive(Debug, Clone)]
pub struct Catalog {
    movies: Vec<Movie>,
    title_index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from dataset rows, preserving their order
    pub fn new(movies: Vec<Movie>) -> Self {
        let mut title_index = HashMap::with_capacity(movies.len());
        for (idx, movie) in movies.iter().enumerate() {
            title_index.entry(movie.title.clone()).or_insert(idx);
        }

        Self {
            movies,
            title_index,
        }
    }

    /// Number of catalog entries, which is also the matrix dimension
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Resolves a title to its catalog index.
    ///
    /// Matching is exact and case-sensitive; for duplicate titles the
    /// first (lowest) index wins.
    pub fn index_of(&self, title: &str) -> Option<usize> {
        self.title_index.get(title).copied()
    }

    /// Movie at a catalog index
    pub fn movie_at(&self, idx: usize) -> Option<&Movie> {
        self.movies.get(idx)
    }

    /// Title at a catalog index
    pub fn title_at(&self, idx: usize) -> Option<&str> {
        self.movie_at(idx).map(|m| m.title.as_str())
    }

    /// Iterator over movies in catalog order
    pub fn movies(&self) -> impl Iterator<Item = &Movie> {
        self.movies.iter()
    }
}

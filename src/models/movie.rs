use serde::{Deserialize, Serialize};

/// A movie as it appears in the dataset: a stable numeric id, the display
/// title used as lookup key, and the precombined text features the
/// similarity matrix is built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Source dataset id (TMDB id in the stock dataset)
    #[serde(rename = "movie_id")]
    pub id: u32,
    pub title: String,
    /// Space-separated descriptive terms: overview, genres, keywords, cast
    pub tags: String,
}

impl Movie {
    /// Creates a new movie record
    pub fn new(id: u32, title: String, tags: String) -> Self {
        Self { id, title, tags }
    }
}

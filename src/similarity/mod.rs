//! Similarity-matrix construction: bag-of-words vectorization and pairwise
//! cosine scoring.

pub mod builder;
pub mod matrix;
pub mod stopwords;
pub mod vectorizer;

pub use builder::{CosineSimilarityBuilder, SimilarityBuilder};
pub use matrix::SimilarityMatrix;
pub use vectorizer::BagOfWords;

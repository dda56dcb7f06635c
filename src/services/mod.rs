pub mod artifact;
pub mod bootstrap;
pub mod dataset;
pub mod recommender;

pub use recommender::Recommender;

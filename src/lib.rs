//! Content-based movie recommendation service.
//!
//! A catalog of movies plus a precomputed cosine-similarity matrix over
//! their text features, exposed over HTTP: pick a title, get the most
//! similar ones back.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod similarity;
pub mod state;

pub use routes::create_router;
pub use services::Recommender;
pub use state::AppState;

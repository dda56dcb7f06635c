use std::sync::Arc;

use crate::services::Recommender;

/// Shared application state.
///
/// The recommender is immutable after startup, so handlers share it
/// lock-free behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
}

impl AppState {
    /// Wraps a fully built recommender for sharing across handlers
    pub fn new(recommender: Recommender) -> Self {
        Self {
            recommender: Arc::new(recommender),
        }
    }
}

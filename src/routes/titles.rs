use axum::{extract::State, Json};
use serde::Serialize;

use crate::models::Movie;
use crate::state::AppState;

/// A catalog entry as returned to clients
#[derive(Debug, Serialize)]
pub struct TitleEntry {
    pub id: u32,
    pub title: String,
}

impl From<&Movie> for TitleEntry {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
        }
    }
}

/// Handler for the titles listing endpoint.
///
/// Returns every catalog title in catalog order, the data a client needs
/// to populate its selection control.
pub async fn list(State(state): State<AppState>) -> Json<Vec<TitleEntry>> {
    let titles: Vec<TitleEntry> = state
        .recommender
        .catalog()
        .movies()
        .map(TitleEntry::from)
        .collect();

    Json(titles)
}

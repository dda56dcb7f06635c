use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    title: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub query: String,
    pub recommendations: Vec<String>,
}

/// Handler for the recommendations endpoint.
///
/// An unknown title produces an empty list, the "no recommendations found"
/// signal. A missing `title` parameter is rejected by the extractor with a
/// 400 before this handler runs.
pub async fn recommend(
    State(state): State<AppState>,
    Query(params): Query<RecommendationQuery>,
) -> Json<RecommendationResponse> {
    let recommendations = state.recommender.recommend(&params.title);

    tracing::info!(
        title = %params.title,
        results = recommendations.len(),
        "Recommendation lookup completed"
    );

    Json(RecommendationResponse {
        query: params.title,
        recommendations,
    })
}

/// Recommendations API routes
use crate::{
    api::extract::{ValidJson, ValidQuery},
    error::Result,
    state::AppState,
};
use axum::{extract::State, Json};
use playgen_core::types::{Recommendation, RecommendationRequest};

/// POST /recommendations/
pub async fn recommend(
    State(app_state): State<AppState>,
    ValidJson(req): ValidJson<RecommendationRequest>,
) -> Result<Json<Recommendation>> {
    Ok(Json(app_state.recommender.recommend(&req).await?))
}

/// GET /recommendations/?category=&limit=
pub async fn recommend_query(
    State(app_state): State<AppState>,
    ValidQuery(req): ValidQuery<RecommendationRequest>,
) -> Result<Json<Recommendation>> {
    Ok(Json(app_state.recommender.recommend(&req).await?))
}

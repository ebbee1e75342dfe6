/// Categories API routes
use crate::{
    api::extract::ApiPath,
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::State,
    Json,
};
use playgen_core::types::{Category, CategoryList, Song};

/// GET /categories/
/// All genre and artist categories
pub async fn list_categories(State(app_state): State<AppState>) -> Json<CategoryList> {
    Json(CategoryList::from(app_state.store.categories().await))
}

/// GET /categories/:name
/// Genre or artist category by name, ignoring case
pub async fn get_category(
    ApiPath(name): ApiPath<String>,
    State(app_state): State<AppState>,
) -> Result<Json<Category>> {
    let category = app_state
        .store
        .category(&name)
        .await
        .ok_or_else(|| ServerError::NotFound(format!("Category '{}' not found", name)))?;
    Ok(Json(category))
}

/// GET /categories/genre/:genre
pub async fn songs_by_genre(
    ApiPath(genre): ApiPath<String>,
    State(app_state): State<AppState>,
) -> Json<Vec<Song>> {
    Json(app_state.store.songs_by_genre(&genre).await)
}

/// GET /categories/artist/:artist
pub async fn songs_by_artist(
    ApiPath(artist): ApiPath<String>,
    State(app_state): State<AppState>,
) -> Json<Vec<Song>> {
    Json(app_state.store.songs_by_artist(&artist).await)
}

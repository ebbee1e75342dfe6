/// Playlists API routes
use crate::{
    api::extract::{ApiPath, ValidJson},
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use playgen_core::types::{CreatePlaylist, Playlist, PlaylistId, UpdatePlaylist};

fn not_found(id: PlaylistId) -> ServerError {
    ServerError::NotFound(format!("Playlist with ID {} not found", id))
}

/// GET /playlists/
pub async fn list_playlists(State(app_state): State<AppState>) -> Json<Vec<Playlist>> {
    Json(app_state.store.list_all().await)
}

/// GET /playlists/:id
pub async fn get_playlist(
    ApiPath(id): ApiPath<PlaylistId>,
    State(app_state): State<AppState>,
) -> Result<Json<Playlist>> {
    let playlist = app_state.store.get(id).await.ok_or_else(|| not_found(id))?;
    Ok(Json(playlist))
}

/// POST /playlists/
/// Create a new playlist; song ids are assigned by the store
pub async fn create_playlist(
    State(app_state): State<AppState>,
    ValidJson(req): ValidJson<CreatePlaylist>,
) -> (StatusCode, Json<Playlist>) {
    let playlist = app_state.store.create(req).await;
    tracing::info!(playlist_id = playlist.id, "Playlist created");
    (StatusCode::CREATED, Json(playlist))
}

/// PUT /playlists/:id
/// Partial update; a `songs` field replaces the whole song list
pub async fn update_playlist(
    ApiPath(id): ApiPath<PlaylistId>,
    State(app_state): State<AppState>,
    ValidJson(req): ValidJson<UpdatePlaylist>,
) -> Result<Json<Playlist>> {
    let playlist = app_state
        .store
        .update(id, req)
        .await
        .ok_or_else(|| not_found(id))?;
    Ok(Json(playlist))
}

/// DELETE /playlists/:id
pub async fn delete_playlist(
    ApiPath(id): ApiPath<PlaylistId>,
    State(app_state): State<AppState>,
) -> Result<StatusCode> {
    if !app_state.store.delete(id).await {
        return Err(not_found(id));
    }
    tracing::info!(playlist_id = id, "Playlist deleted");
    Ok(StatusCode::NO_CONTENT)
}

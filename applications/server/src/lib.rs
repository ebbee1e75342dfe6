//! Playlist Generator Server Library
//!
//! HTTP API for managing playlists, browsing songs by genre or artist, and
//! fetching canned recommendations.
//!
//! This library exposes the router and its components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use services::{RecommendationService, RecommendationTable};
pub use state::AppState;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use playgen_storage::PlaylistStore;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build state around a store, wiring the table-backed recommender to it
pub fn default_state(store: Arc<PlaylistStore>, config: ServerConfig) -> AppState {
    let recommender = Arc::new(RecommendationService::new(Arc::clone(&store)));
    AppState::new(store, recommender, Arc::new(config))
}

/// Resource routes, mounted under the configured API prefix
///
/// Collection routes answer with and without the trailing slash.
fn api_routes() -> Router<AppState> {
    Router::new()
        // Playlists
        .route(
            "/playlists",
            get(api::playlists::list_playlists).post(api::playlists::create_playlist),
        )
        .route(
            "/playlists/",
            get(api::playlists::list_playlists).post(api::playlists::create_playlist),
        )
        .route(
            "/playlists/:id",
            get(api::playlists::get_playlist)
                .put(api::playlists::update_playlist)
                .delete(api::playlists::delete_playlist),
        )
        // Categories
        .route("/categories", get(api::categories::list_categories))
        .route("/categories/", get(api::categories::list_categories))
        .route("/categories/:name", get(api::categories::get_category))
        .route(
            "/categories/genre/:genre",
            get(api::categories::songs_by_genre),
        )
        .route(
            "/categories/artist/:artist",
            get(api::categories::songs_by_artist),
        )
        // Recommendations
        .route(
            "/recommendations",
            post(api::recommendations::recommend).get(api::recommendations::recommend_query),
        )
        .route(
            "/recommendations/",
            post(api::recommendations::recommend).get(api::recommendations::recommend_query),
        )
}

/// CORS for the configured origins, credentials allowed
///
/// Methods and headers mirror the preflight request. An origin of `*`
/// mirrors any origin, since a literal wildcard cannot carry credentials.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::mirror_request()
    } else {
        let values = origins
            .iter()
            .map(|o| {
                HeaderValue::from_str(o)
                    .map_err(|e| ServerError::Config(format!("Invalid CORS origin {:?}: {}", o, e)))
            })
            .collect::<Result<Vec<_>>>()?;
        AllowOrigin::list(values)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

/// Build application router
pub fn build_router(state: AppState) -> Result<Router> {
    let cors = cors_layer(&state.config.cors.origins)?;
    let prefix = state.config.api.prefix.clone();

    Ok(Router::new()
        .route("/", get(api::health::root))
        .route("/health", get(api::health::health))
        .nest(&prefix, api_routes())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(cors)
        .with_state(state))
}

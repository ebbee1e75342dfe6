/// Shared application state
use crate::config::ServerConfig;
use playgen_core::Recommender;
use playgen_storage::PlaylistStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PlaylistStore>,
    pub recommender: Arc<dyn Recommender>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(
        store: Arc<PlaylistStore>,
        recommender: Arc<dyn Recommender>,
        config: Arc<ServerConfig>,
    ) -> Self {
        Self {
            store,
            recommender,
            config,
        }
    }
}

use crate::{categories, playlists, seed, state::StoreState};
use playgen_core::types::{
    Category, CreatePlaylist, Playlist, PlaylistId, Song, UpdatePlaylist,
};
use tokio::sync::RwLock;

/// In-memory playlist store
///
/// Writers take the exclusive lock, so id allocation and list mutation are
/// serialized; readers work on a consistent view under the shared lock.
#[derive(Debug, Default)]
pub struct PlaylistStore {
    state: RwLock<StoreState>,
}

impl PlaylistStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the sample playlist
    pub fn seeded() -> Self {
        let mut state = StoreState::new();
        playlists::create(&mut state, seed::sample_playlist());
        Self {
            state: RwLock::new(state),
        }
    }

    // ========================================================================
    // Playlists
    // ========================================================================

    pub async fn list_all(&self) -> Vec<Playlist> {
        playlists::get_all(&*self.state.read().await)
    }

    pub async fn get(&self, id: PlaylistId) -> Option<Playlist> {
        playlists::get_by_id(&*self.state.read().await, id)
    }

    pub async fn create(&self, data: CreatePlaylist) -> Playlist {
        playlists::create(&mut *self.state.write().await, data)
    }

    pub async fn update(&self, id: PlaylistId, data: UpdatePlaylist) -> Option<Playlist> {
        playlists::update(&mut *self.state.write().await, id, data)
    }

    pub async fn delete(&self, id: PlaylistId) -> bool {
        playlists::delete(&mut *self.state.write().await, id)
    }

    // ========================================================================
    // Categories
    // ========================================================================

    pub async fn categories(&self) -> Vec<Category> {
        categories::list_categories(self.state.read().await.playlists())
    }

    pub async fn category(&self, name: &str) -> Option<Category> {
        categories::get_category(self.state.read().await.playlists(), name)
    }

    pub async fn songs_by_genre(&self, genre: &str) -> Vec<Song> {
        categories::songs_by_genre(self.state.read().await.playlists(), genre)
    }

    pub async fn songs_by_artist(&self, artist: &str) -> Vec<Song> {
        categories::songs_by_artist(self.state.read().await.playlists(), artist)
    }
}

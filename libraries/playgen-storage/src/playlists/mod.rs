use crate::state::StoreState;
use chrono::Utc;
use playgen_core::types::{CreatePlaylist, Playlist, PlaylistId, UpdatePlaylist};

/// Get all playlists in insertion order
pub fn get_all(state: &StoreState) -> Vec<Playlist> {
    state.playlists.clone()
}

/// Get playlist by ID
pub fn get_by_id(state: &StoreState, id: PlaylistId) -> Option<Playlist> {
    state.playlists.iter().find(|p| p.id == id).cloned()
}

/// Create new playlist
///
/// Song ids in the payload are never trusted; each song gets the next id
/// from the song counter.
pub fn create(state: &mut StoreState, data: CreatePlaylist) -> Playlist {
    let id = state.allocate_playlist_id();
    let songs = state.allocate_songs(data.songs);
    let now = Utc::now();

    let playlist = Playlist {
        id,
        name: data.name,
        description: data.description,
        songs,
        created_at: now,
        updated_at: now,
    };

    tracing::debug!(
        playlist_id = id,
        song_count = playlist.songs.len(),
        "Created playlist"
    );

    state.playlists.push(playlist.clone());
    playlist
}

/// Apply a partial update
///
/// Returns `None` if the playlist does not exist. A present `songs` field
/// discards every existing song and allocates fresh ids for the new list.
/// `updated_at` is refreshed whenever the playlist is found.
pub fn update(state: &mut StoreState, id: PlaylistId, data: UpdatePlaylist) -> Option<Playlist> {
    let index = state.playlists.iter().position(|p| p.id == id)?;

    let songs = data.songs.map(|songs| state.allocate_songs(songs));

    let playlist = &mut state.playlists[index];
    if let Some(name) = data.name {
        playlist.name = name;
    }
    if let Some(description) = data.description {
        playlist.description = Some(description);
    }
    if let Some(songs) = songs {
        playlist.songs = songs;
    }
    playlist.updated_at = Utc::now();

    tracing::debug!(playlist_id = id, "Updated playlist");

    Some(playlist.clone())
}

/// Delete playlist, reporting whether anything was removed
pub fn delete(state: &mut StoreState, id: PlaylistId) -> bool {
    let Some(index) = state.playlists.iter().position(|p| p.id == id) else {
        return false;
    };

    state.playlists.remove(index);
    tracing::debug!(playlist_id = id, "Deleted playlist");
    true
}

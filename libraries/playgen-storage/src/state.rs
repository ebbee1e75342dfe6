use playgen_core::types::{CreateSong, Playlist, PlaylistId, Song, SongId};

/// Playlist collection plus the two id counters
///
/// Counters only move forward: ids of deleted playlists and replaced songs
/// are never handed out again.
#[derive(Debug)]
pub struct StoreState {
    pub(crate) playlists: Vec<Playlist>,
    next_playlist_id: PlaylistId,
    next_song_id: SongId,
}

impl StoreState {
    pub fn new() -> Self {
        Self {
            playlists: Vec::new(),
            next_playlist_id: 1,
            next_song_id: 1,
        }
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub(crate) fn allocate_playlist_id(&mut self) -> PlaylistId {
        let id = self.next_playlist_id;
        self.next_playlist_id += 1;
        id
    }

    /// Turn creation data into songs with fresh, increasing ids
    pub(crate) fn allocate_songs(&mut self, songs: Vec<CreateSong>) -> Vec<Song> {
        songs
            .into_iter()
            .map(|data| {
                let id = self.next_song_id;
                self.next_song_id += 1;
                Song::from_create(id, data)
            })
            .collect()
    }
}

impl Default for StoreState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_start_at_one_and_advance() {
        let mut state = StoreState::new();
        assert_eq!(state.allocate_playlist_id(), 1);
        assert_eq!(state.allocate_playlist_id(), 2);

        let songs = state.allocate_songs(vec![CreateSong::new("a", "x"), CreateSong::new("b", "y")]);
        assert_eq!(songs.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 2]);

        let more = state.allocate_songs(vec![CreateSong::new("c", "z")]);
        assert_eq!(more[0].id, 3);
    }
}

//! Test helpers and fixtures for storage integration tests

#![allow(dead_code)]

use playgen_core::types::{CreatePlaylist, CreateSong, Playlist};
use playgen_storage::PlaylistStore;

/// Test fixture: song payload with artist and optional genre
pub fn song(title: &str, artist: &str, genre: Option<&str>) -> CreateSong {
    let song = CreateSong::new(title, artist);
    match genre {
        Some(g) => song.with_genre(g),
        None => song,
    }
}

/// Test fixture: create a playlist with the given songs
pub async fn create_test_playlist(
    store: &PlaylistStore,
    name: &str,
    songs: Vec<CreateSong>,
) -> Playlist {
    store
        .create(CreatePlaylist {
            name: name.to_string(),
            description: None,
            songs,
        })
        .await
}

/// Test fixture: playlist with genres [pop, pop, rock] and artists [A, A, B]
pub async fn create_mixed_playlist(store: &PlaylistStore) -> Playlist {
    create_test_playlist(
        store,
        "Mixed",
        vec![
            song("One", "A", Some("pop")),
            song("Two", "A", Some("pop")),
            song("Three", "B", Some("rock")),
        ],
    )
    .await
}

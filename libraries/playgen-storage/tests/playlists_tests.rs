//! Integration tests for the playlists slice
//!
//! Tests playlist operations including:
//! - Sequential id allocation for playlists and songs
//! - Full song replacement on update
//! - Delete semantics and id non-reuse
//! - The seeded sample playlist

mod test_helpers;

use playgen_core::types::{CreatePlaylist, UpdatePlaylist};
use playgen_storage::PlaylistStore;
use std::collections::HashSet;
use test_helpers::*;

#[tokio::test]
async fn test_seeded_store_holds_sample_playlist() {
    let store = PlaylistStore::seeded();

    let playlists = store.list_all().await;
    assert_eq!(playlists.len(), 1);

    let sample = &playlists[0];
    assert_eq!(sample.id, 1);
    assert_eq!(sample.name, "My First Playlist");
    assert_eq!(
        sample.description.as_deref(),
        Some("A sample playlist with various genres")
    );
    assert_eq!(sample.song_ids().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    assert_eq!(sample.songs[2].title, "Rock Song 1");
    assert_eq!(sample.songs[2].duration, Some(220));
}

#[tokio::test]
async fn test_seeded_counters_continue_after_sample() {
    let store = PlaylistStore::seeded();

    let playlist = create_test_playlist(&store, "Next", vec![song("S", "X", None)]).await;

    assert_eq!(playlist.id, 2);
    assert_eq!(playlist.songs[0].id, 5);
}

#[tokio::test]
async fn test_create_and_get_playlist() {
    let store = PlaylistStore::new();

    let playlist = store
        .create(CreatePlaylist {
            name: "My Favorites".to_string(),
            description: Some("Best songs ever".to_string()),
            songs: vec![song("S1", "X", Some("jazz"))],
        })
        .await;

    assert_eq!(playlist.name, "My Favorites");
    assert_eq!(playlist.description, Some("Best songs ever".to_string()));
    assert_eq!(playlist.created_at, playlist.updated_at);

    let retrieved = store.get(playlist.id).await.expect("Playlist not found");
    assert_eq!(retrieved, playlist);
}

#[tokio::test]
async fn test_playlist_ids_strictly_increase() {
    let store = PlaylistStore::new();

    let mut last = 0;
    for i in 0..5 {
        let playlist = create_test_playlist(&store, &format!("P{}", i), vec![]).await;
        assert!(playlist.id > last);
        last = playlist.id;
    }
}

#[tokio::test]
async fn test_song_ids_are_fresh_and_increasing() {
    let store = PlaylistStore::new();

    let first = create_test_playlist(
        &store,
        "A",
        vec![song("1", "X", None), song("2", "X", None), song("3", "X", None)],
    )
    .await;
    let second = create_test_playlist(&store, "B", vec![song("4", "Y", None), song("5", "Y", None)]).await;

    let ids: Vec<_> = first.song_ids().chain(second.song_ids()).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]), "ids not increasing: {:?}", ids);
}

#[tokio::test]
async fn test_update_replaces_songs_with_new_ids() {
    let store = PlaylistStore::new();
    let playlist = create_test_playlist(&store, "A", vec![song("old", "X", Some("pop"))]).await;
    let old_ids: HashSet<_> = playlist.song_ids().collect();

    let updated = store
        .update(
            playlist.id,
            UpdatePlaylist {
                songs: Some(vec![song("new1", "Y", None), song("new2", "Z", None)]),
                ..Default::default()
            },
        )
        .await
        .expect("Playlist not found");

    assert_eq!(updated.songs.len(), 2);
    assert!(updated.song_ids().all(|id| !old_ids.contains(&id)));

    let fetched = store.get(playlist.id).await.unwrap();
    assert!(fetched.song_ids().all(|id| !old_ids.contains(&id)));
    assert_eq!(fetched.songs[0].title, "new1");
}

#[tokio::test]
async fn test_update_with_empty_songs_clears_list() {
    let store = PlaylistStore::new();
    let playlist = create_test_playlist(&store, "A", vec![song("s", "X", None)]).await;

    let updated = store
        .update(
            playlist.id,
            UpdatePlaylist {
                songs: Some(vec![]),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(updated.songs.is_empty());
}

#[tokio::test]
async fn test_update_refreshes_timestamp_even_without_changes() {
    let store = PlaylistStore::new();
    let playlist = create_test_playlist(&store, "A", vec![]).await;

    let updated = store
        .update(playlist.id, UpdatePlaylist::default())
        .await
        .unwrap();

    assert_eq!(updated.name, "A");
    assert!(updated.updated_at >= playlist.updated_at);
    assert_eq!(updated.created_at, playlist.created_at);
}

#[tokio::test]
async fn test_update_nonexistent_playlist() {
    let store = PlaylistStore::new();
    let result = store.update(42, UpdatePlaylist::default()).await;
    assert!(result.is_none());
}

#[tokio::test]
async fn test_delete_playlist() {
    let store = PlaylistStore::new();
    let playlist = create_test_playlist(&store, "Doomed", vec![]).await;

    assert!(store.delete(playlist.id).await);
    assert!(store.get(playlist.id).await.is_none());
    assert!(!store.delete(playlist.id).await);
}

#[tokio::test]
async fn test_deleted_ids_are_not_reused() {
    let store = PlaylistStore::new();
    let first = create_test_playlist(&store, "A", vec![song("s", "X", None)]).await;
    store.delete(first.id).await;

    let second = create_test_playlist(&store, "B", vec![song("t", "Y", None)]).await;

    assert!(second.id > first.id);
    assert!(second.songs[0].id > first.songs[0].id);
}

#[tokio::test]
async fn test_concurrent_creates_allocate_unique_ids() {
    let store = std::sync::Arc::new(PlaylistStore::new());

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let store = std::sync::Arc::clone(&store);
            tokio::spawn(async move {
                create_test_playlist(&store, &format!("P{}", i), vec![song("s", "X", None)]).await
            })
        })
        .collect();

    let mut playlist_ids = HashSet::new();
    let mut song_ids = HashSet::new();
    for handle in handles {
        let playlist = handle.await.unwrap();
        playlist_ids.insert(playlist.id);
        song_ids.extend(playlist.song_ids());
    }

    assert_eq!(playlist_ids.len(), 20);
    assert_eq!(song_ids.len(), 20);
}

//! Genre and artist groupings derived from the playlists
//!
//! Nothing here is cached: every call rescans all songs, so results always
//! reflect the current store contents.

use indexmap::IndexMap;
use playgen_core::types::{Category, CategoryType, Playlist, Song};

fn all_songs(playlists: &[Playlist]) -> impl Iterator<Item = &Song> {
    playlists.iter().flat_map(|p| p.songs.iter())
}

/// Group songs by a lowercased key, keeping first-seen key order
fn group_by<'a, F>(songs: impl Iterator<Item = &'a Song>, key: F) -> IndexMap<String, Vec<Song>>
where
    F: Fn(&Song) -> Option<&str>,
{
    let mut groups: IndexMap<String, Vec<Song>> = IndexMap::new();
    for song in songs {
        if let Some(k) = key(song) {
            groups.entry(k.to_lowercase()).or_default().push(song.clone());
        }
    }
    groups
}

/// All categories: genres in first-seen order, then artists in first-seen order
///
/// Songs without a genre (or with an empty one) only show up in their artist
/// category.
pub fn list_categories(playlists: &[Playlist]) -> Vec<Category> {
    let genres = group_by(all_songs(playlists), Song::genre_name);
    let artists = group_by(all_songs(playlists), |s| Some(s.artist.as_str()));

    genres
        .into_iter()
        .map(|(name, songs)| Category::new(name, CategoryType::Genre, songs))
        .chain(
            artists
                .into_iter()
                .map(|(name, songs)| Category::new(name, CategoryType::Artist, songs)),
        )
        .collect()
}

/// Case-insensitive lookup by category name
///
/// A genre shadows an artist with the same lowercased name.
pub fn get_category(playlists: &[Playlist], name: &str) -> Option<Category> {
    let name = name.to_lowercase();
    list_categories(playlists)
        .into_iter()
        .find(|c| c.name == name)
}

/// Songs whose genre matches, ignoring case
pub fn songs_by_genre(playlists: &[Playlist], genre: &str) -> Vec<Song> {
    all_songs(playlists)
        .filter(|s| s.has_genre(genre))
        .cloned()
        .collect()
}

/// Songs whose artist matches, ignoring case
pub fn songs_by_artist(playlists: &[Playlist], artist: &str) -> Vec<Song> {
    all_songs(playlists)
        .filter(|s| s.has_artist(artist))
        .cloned()
        .collect()
}

//! Song types

use super::ids::SongId;
use serde::{Deserialize, Serialize};

/// A song inside a playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: SongId,
    pub title: String,
    pub artist: String,
    pub genre: Option<String>,
    /// Duration in seconds
    pub duration: Option<i64>,
}

impl Song {
    /// Build a song from creation data with a store-assigned id
    pub fn from_create(id: SongId, data: CreateSong) -> Self {
        Self {
            id,
            title: data.title,
            artist: data.artist,
            genre: data.genre,
            duration: data.duration,
        }
    }

    /// Genre if set and non-empty
    pub fn genre_name(&self) -> Option<&str> {
        self.genre.as_deref().filter(|g| !g.is_empty())
    }

    /// Case-insensitive genre match. Songs without a genre, or with an empty
    /// one, never match.
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genre_name()
            .is_some_and(|g| g.to_lowercase() == genre.to_lowercase())
    }

    /// Case-insensitive artist match
    pub fn has_artist(&self, artist: &str) -> bool {
        self.artist.to_lowercase() == artist.to_lowercase()
    }
}

/// Data for creating a song
///
/// Carries no id: any id present in an incoming payload is ignored and the
/// store assigns a fresh one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSong {
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub duration: Option<i64>,
}

impl CreateSong {
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            genre: None,
            duration: None,
        }
    }

    #[must_use]
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    #[must_use]
    pub fn with_duration(mut self, seconds: i64) -> Self {
        self.duration = Some(seconds);
        self
    }
}

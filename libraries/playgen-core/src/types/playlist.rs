//! Playlist types

use super::ids::{PlaylistId, SongId};
use super::song::{CreateSong, Song};
use crate::error::{CoreError, Result};
use crate::traits::Validate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum playlist name length, in characters
pub const NAME_MAX_LEN: usize = 100;

/// Maximum playlist description length, in characters
pub const DESCRIPTION_MAX_LEN: usize = 500;

/// Playlist with its songs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: PlaylistId,
    pub name: String,
    pub description: Option<String>,
    pub songs: Vec<Song>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Playlist {
    /// Iterate over every song id in playlist order
    pub fn song_ids(&self) -> impl Iterator<Item = SongId> + '_ {
        self.songs.iter().map(|s| s.id)
    }
}

/// Data for creating a new playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePlaylist {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub songs: Vec<CreateSong>,
}

impl Validate for CreatePlaylist {
    /// Check name and description bounds
    fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        validate_description(self.description.as_deref())
    }
}

/// Partial update for a playlist
///
/// Absent fields are left untouched. `songs`, when present, replaces the
/// whole song list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePlaylist {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub songs: Option<Vec<CreateSong>>,
}

impl Validate for UpdatePlaylist {
    fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        validate_description(self.description.as_deref())
    }
}

fn validate_name(name: &str) -> Result<()> {
    let len = name.chars().count();
    if len == 0 {
        return Err(CoreError::validation("name must not be empty"));
    }
    if len > NAME_MAX_LEN {
        return Err(CoreError::validation(format!(
            "name must be at most {} characters (got {})",
            NAME_MAX_LEN, len
        )));
    }
    Ok(())
}

fn validate_description(description: Option<&str>) -> Result<()> {
    match description {
        Some(d) if d.chars().count() > DESCRIPTION_MAX_LEN => Err(CoreError::validation(format!(
            "description must be at most {} characters",
            DESCRIPTION_MAX_LEN
        ))),
        _ => Ok(()),
    }
}

//! Derived category types

use super::song::Song;
use serde::{Deserialize, Serialize};

/// Grouping axis of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryType {
    Genre,
    Artist,
}

/// A genre or artist grouping, recomputed from the playlists on each request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Lowercased genre or artist name
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: CategoryType,
    pub song_count: usize,
    pub songs: Vec<Song>,
}

impl Category {
    pub fn new(name: impl Into<String>, category_type: CategoryType, songs: Vec<Song>) -> Self {
        Self {
            name: name.into(),
            category_type,
            song_count: songs.len(),
            songs,
        }
    }

    pub fn is_genre(&self) -> bool {
        self.category_type == CategoryType::Genre
    }
}

/// Category listing response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryList {
    pub categories: Vec<Category>,
    pub total: usize,
}

impl From<Vec<Category>> for CategoryList {
    fn from(categories: Vec<Category>) -> Self {
        Self {
            total: categories.len(),
            categories,
        }
    }
}

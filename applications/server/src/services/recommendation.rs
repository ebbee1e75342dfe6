/// Recommendation service - canned picks keyed by genre
use async_trait::async_trait;
use indexmap::IndexMap;
use playgen_core::{
    error::Result,
    types::{CategoryType, Recommendation, RecommendationRequest, Song},
    Recommender,
};
use playgen_storage::PlaylistStore;
use std::sync::Arc;

/// Category reported when the request names none
pub const GENERAL_CATEGORY: &str = "general";

/// Fixed genre → songs table, in insertion order
///
/// Stands in for a real ranking engine.
#[derive(Debug, Clone)]
pub struct RecommendationTable {
    entries: IndexMap<String, Vec<Song>>,
}

impl RecommendationTable {
    /// The built-in pop / sad / rock table
    pub fn builtin() -> Self {
        let mut entries = IndexMap::new();
        entries.insert(
            "pop".to_string(),
            vec![
                canned(1001, "Popular Pop Hit", "Pop Star", "pop", 195),
                canned(1002, "Catchy Tune", "Top Artist", "pop", 210),
                canned(1003, "Summer Vibes", "Chart Topper", "pop", 185),
            ],
        );
        entries.insert(
            "sad".to_string(),
            vec![
                canned(2001, "Emotional Ballad", "Soul Singer", "sad", 240),
                canned(2002, "Melancholy Melody", "Heartfelt Artist", "sad", 220),
                canned(2003, "Tears and Rain", "Emotional Voice", "sad", 260),
            ],
        );
        entries.insert(
            "rock".to_string(),
            vec![
                canned(3001, "Rock Anthem", "Rock Band", "rock", 280),
                canned(3002, "Electric Guitar", "Hard Rockers", "rock", 250),
                canned(3003, "Power Chord", "Rock Legends", "rock", 270),
            ],
        );
        Self { entries }
    }

    /// Songs listed for a genre, if the table has it
    pub fn lookup(&self, genre: &str) -> Option<&[Song]> {
        self.entries.get(genre).map(Vec::as_slice)
    }

    /// Every listed song, genre by genre in table order
    pub fn all(&self) -> impl Iterator<Item = &Song> {
        self.entries.values().flatten()
    }
}

fn canned(id: i64, title: &str, artist: &str, genre: &str, duration: i64) -> Song {
    Song {
        id,
        title: title.to_string(),
        artist: artist.to_string(),
        genre: Some(genre.to_string()),
        duration: Some(duration),
    }
}

/// Table-backed recommender
///
/// Resolution order for a named category:
/// 1. table hit
/// 2. derived genre category: one synthesized "Recommended ..." song
/// 3. derived artist category: one synthesized "Similar to ..." song
/// 4. anything else: the general picks, category echoed back
///
/// General picks are the first `limit` songs of the table concatenation. They
/// are deterministic, not shuffled.
pub struct RecommendationService {
    store: Arc<PlaylistStore>,
    table: RecommendationTable,
}

impl RecommendationService {
    pub fn new(store: Arc<PlaylistStore>) -> Self {
        Self::with_table(store, RecommendationTable::builtin())
    }

    pub fn with_table(store: Arc<PlaylistStore>, table: RecommendationTable) -> Self {
        Self { store, table }
    }

    fn general_picks(&self, limit: usize) -> Vec<Song> {
        self.table.all().take(limit).cloned().collect()
    }

    async fn category_picks(&self, category: &str, limit: usize) -> Vec<Song> {
        if let Some(songs) = self.table.lookup(category) {
            return songs.iter().take(limit).cloned().collect();
        }

        let Some(derived) = self.store.category(category).await else {
            tracing::debug!(category, "Unknown category, using general picks");
            return self.general_picks(limit);
        };

        let picks = match derived.category_type {
            CategoryType::Genre => vec![Song {
                id: 9999,
                title: format!("Recommended {} Song", title_case(category)),
                artist: "Recommended Artist".to_string(),
                genre: Some(category.to_string()),
                duration: Some(200),
            }],
            CategoryType::Artist => vec![Song {
                id: 8888,
                title: format!("Similar to {}", title_case(category)),
                artist: "Similar Artist".to_string(),
                genre: Some("pop".to_string()),
                duration: Some(190),
            }],
        };
        picks.into_iter().take(limit).collect()
    }
}

#[async_trait]
impl Recommender for RecommendationService {
    async fn recommend(&self, request: &RecommendationRequest) -> Result<Recommendation> {
        let limit = request.effective_limit();

        let recommendation = match request.normalized_category() {
            None => Recommendation::new(GENERAL_CATEGORY, self.general_picks(limit)),
            Some(category) => {
                let songs = self.category_picks(&category, limit).await;
                Recommendation::new(category, songs)
            }
        };

        tracing::debug!(
            category = %recommendation.category,
            count = recommendation.count,
            "Produced recommendations"
        );

        Ok(recommendation)
    }
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("artist a"), "Artist A");
        assert_eq!(title_case("hip-hop"), "Hip-Hop");
        assert_eq!(title_case("r&b"), "R&B");
        assert_eq!(title_case("80s synth"), "80S Synth");
    }

    #[test]
    fn builtin_table_order() {
        let table = RecommendationTable::builtin();
        let first_ids: Vec<_> = table.all().step_by(3).map(|s| s.id).collect();
        assert_eq!(first_ids, vec![1001, 2001, 3001]);
        assert_eq!(table.all().count(), 9);
        assert_eq!(table.lookup("sad").unwrap()[2].title, "Tears and Rain");
        assert!(table.lookup("jazz").is_none());
    }
}

//! Recommendation request and response types

use super::song::Song;
use crate::error::{CoreError, Result};
use crate::traits::Validate;
use serde::{Deserialize, Serialize};

/// Number of recommendations returned when no limit is given
pub const DEFAULT_LIMIT: i64 = 5;

/// Largest accepted limit
pub const MAX_LIMIT: i64 = 20;

/// Recommendation request
///
/// Accepted both as a JSON body and as query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    /// Category name (genre such as "pop", or an artist name)
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub limit: Option<i64>,
}

impl RecommendationRequest {
    pub fn new(category: Option<&str>, limit: Option<i64>) -> Self {
        Self {
            category: category.map(str::to_string),
            limit,
        }
    }

    /// Limit after applying the default, clamped into the accepted range
    pub fn effective_limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT) as usize
    }

    /// Lowercased category, treating an empty string as absent
    pub fn normalized_category(&self) -> Option<String> {
        self.category
            .as_deref()
            .filter(|c| !c.is_empty())
            .map(str::to_lowercase)
    }
}

impl Validate for RecommendationRequest {
    fn validate(&self) -> Result<()> {
        match self.limit {
            Some(limit) if !(1..=MAX_LIMIT).contains(&limit) => Err(CoreError::validation(
                format!("limit must be between 1 and {} (got {})", MAX_LIMIT, limit),
            )),
            _ => Ok(()),
        }
    }
}

/// Recommendation response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: String,
    pub recommended_songs: Vec<Song>,
    pub count: usize,
}

impl Recommendation {
    pub fn new(category: impl Into<String>, recommended_songs: Vec<Song>) -> Self {
        Self {
            category: category.into(),
            count: recommended_songs.len(),
            recommended_songs,
        }
    }
}

/// Core traits for the playlist generator
use crate::error::Result;
use crate::types::{Recommendation, RecommendationRequest};
use async_trait::async_trait;

/// Recommendation engine
///
/// Maps a category request to a ranked list of songs. The HTTP layer only
/// talks to this trait, so the engine behind it can be swapped freely.
#[async_trait]
pub trait Recommender: Send + Sync {
    /// Produce recommendations for the requested category
    ///
    /// `request.category` of `None` (or empty) asks for general picks.
    /// Implementations must return at most `request.effective_limit()` songs.
    async fn recommend(&self, request: &RecommendationRequest) -> Result<Recommendation>;
}

/// Request payload bounds check
///
/// Run at the request-parsing boundary, before a payload reaches the store or
/// a recommender.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Server services
pub mod recommendation;

pub use recommendation::{RecommendationService, RecommendationTable};

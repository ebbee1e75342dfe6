//! Playlist Generator Core
//!
//! Domain types, traits, and error handling shared by the storage layer and
//! the HTTP server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Song`, `Playlist`, `Category`, `Recommendation`
//! - **Request Payloads**: `CreatePlaylist`, `UpdatePlaylist`, `RecommendationRequest`
//! - **Core Traits**: `Recommender`, `Validate`
//! - **Error Handling**: Unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use playgen_core::types::{CreatePlaylist, CreateSong};
//! use playgen_core::Validate;
//!
//! let request = CreatePlaylist {
//!     name: "Road Trip".to_string(),
//!     description: None,
//!     songs: vec![CreateSong::new("Highway Song", "The Drivers").with_genre("rock")],
//! };
//! assert!(request.validate().is_ok());
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use traits::{Recommender, Validate};

pub use types::{
    Category, CategoryList, CategoryType, CreatePlaylist, CreateSong, Playlist, PlaylistId,
    Recommendation, RecommendationRequest, Song, SongId, UpdatePlaylist,
};

//! Playlist Generator Storage
//!
//! In-memory playlist store and the category deriver that reads from it.
//!
//! # Architecture
//!
//! - **Explicit state**: counters and the playlist list live in a
//!   [`StoreState`] owned by a [`PlaylistStore`]; there is no global state.
//! - **Vertical Slicing**: `playlists` owns mutation and lookup, `categories`
//!   owns the genre/artist groupings.
//! - **Serialized writers**: one `RwLock` guards the list and both id counters.
//!
//! # Example
//!
//! ```rust
//! use playgen_core::types::{CreatePlaylist, CreateSong};
//! use playgen_storage::PlaylistStore;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store = PlaylistStore::new();
//! let playlist = store
//!     .create(CreatePlaylist {
//!         name: "Focus".to_string(),
//!         description: None,
//!         songs: vec![CreateSong::new("Deep Work", "Quiet Hours").with_genre("ambient")],
//!     })
//!     .await;
//!
//! assert_eq!(playlist.songs.len(), 1);
//! assert_eq!(store.songs_by_genre("AMBIENT").await.len(), 1);
//! # }
//! ```

mod context;
mod seed;
mod state;

// Vertical slices
pub mod categories;
pub mod playlists;

pub use context::PlaylistStore;
pub use seed::sample_playlist;
pub use state::StoreState;

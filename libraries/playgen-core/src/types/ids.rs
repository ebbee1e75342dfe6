//! Identifier types
//!
//! Both counters are allocated by the playlist store and never reused.

/// Playlist identifier
pub type PlaylistId = i64;

/// Song identifier
pub type SongId = i64;

/// API route modules
pub mod categories;
pub mod extract;
pub mod health;
pub mod playlists;
pub mod recommendations;

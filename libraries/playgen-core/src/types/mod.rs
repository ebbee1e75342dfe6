mod category;
mod ids;
mod playlist;
mod recommendation;
mod song;

pub use category::{Category, CategoryList, CategoryType};
pub use ids::{PlaylistId, SongId};
pub use playlist::{CreatePlaylist, Playlist, UpdatePlaylist, DESCRIPTION_MAX_LEN, NAME_MAX_LEN};
pub use recommendation::{Recommendation, RecommendationRequest, DEFAULT_LIMIT, MAX_LIMIT};
pub use song::{CreateSong, Song};

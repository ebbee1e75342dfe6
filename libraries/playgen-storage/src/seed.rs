use playgen_core::types::{CreatePlaylist, CreateSong};

/// The playlist every fresh store starts with
pub fn sample_playlist() -> CreatePlaylist {
    CreatePlaylist {
        name: "My First Playlist".to_string(),
        description: Some("A sample playlist with various genres".to_string()),
        songs: vec![
            CreateSong::new("Pop Song 1", "Artist A")
                .with_genre("pop")
                .with_duration(180),
            CreateSong::new("Sad Song 1", "Artist B")
                .with_genre("sad")
                .with_duration(200),
            CreateSong::new("Rock Song 1", "Artist C")
                .with_genre("rock")
                .with_duration(220),
            CreateSong::new("Pop Song 2", "Artist A")
                .with_genre("pop")
                .with_duration(190),
        ],
    }
}

/// Browsing metadata for the hall and home views. Playlists here are
/// display cards, not playable queues; the play counts are the service's
/// pre-formatted display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub id: String,
    pub title: String,
    pub cover: String,
    pub play_count: String,
    pub description: Option<String>,
    pub is_ranking: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub fans: String,
}

/// Promoted content strip on the home view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub kind: String,
    pub track_id: Option<String>,
}

use crate::{playback::track::Track, util::format::format_clock};

pub const DEFAULT_ARTWORK: &str = "https://source.unsplash.com/random/100x100?music";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Album,
    Song,
    Artist,
    Playlist,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Album => "album",
            MediaKind::Song => "song",
            MediaKind::Artist => "artist",
            MediaKind::Playlist => "playlist",
        }
    }
}

/// The fields every card shows, whatever it stands for.
#[derive(Debug, Clone, PartialEq)]
pub struct CardInfo {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: String,
}

impl CardInfo {
    pub fn new(id: &str, title: &str, subtitle: &str, image_url: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            subtitle: (!subtitle.is_empty()).then(|| subtitle.to_string()),
            image_url: image_url.to_string(),
        }
    }
}

/// What a card plays as when it carries no duration or artist of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct CardFallback {
    pub duration_secs: u32,
    pub artist: String,
}

impl CardFallback {
    pub fn new(duration_secs: u32, artist: impl Into<String>) -> Self {
        Self {
            duration_secs,
            artist: artist.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MediaItem {
    Album(CardInfo),
    Song(CardInfo),
    Artist(CardInfo),
    Playlist(CardInfo),
}

impl MediaItem {
    pub fn kind(&self) -> MediaKind {
        match self {
            MediaItem::Album(_) => MediaKind::Album,
            MediaItem::Song(_) => MediaKind::Song,
            MediaItem::Artist(_) => MediaKind::Artist,
            MediaItem::Playlist(_) => MediaKind::Playlist,
        }
    }

    pub fn card(&self) -> &CardInfo {
        match self {
            MediaItem::Album(card)
            | MediaItem::Song(card)
            | MediaItem::Artist(card)
            | MediaItem::Playlist(card) => card,
        }
    }

    pub fn id(&self) -> &str {
        &self.card().id
    }

    pub fn title(&self) -> &str {
        &self.card().title
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.card().subtitle.as_deref()
    }

    /// Cards carry no duration, so the caller supplies one.
    pub fn to_track(&self, fallback: &CardFallback) -> Track {
        let card = self.card();
        Track::new(
            card.id.clone(),
            card.title.clone(),
            card.subtitle.clone().unwrap_or_else(|| fallback.artist.clone()),
            card.image_url.clone(),
            fallback.duration_secs,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub duration_label: String,
    pub duration_secs: u32,
    pub image_url: Option<String>,
}

impl Song {
    pub fn new(
        id: &str,
        title: &str,
        artist: &str,
        album: Option<&str>,
        duration_secs: u32,
        image_url: Option<&str>,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            artist: artist.to_string(),
            album: album.map(str::to_string),
            duration_label: format_clock(f64::from(duration_secs)),
            duration_secs,
            image_url: image_url.map(str::to_string),
        }
    }

    /// Builds the track to hand to the player. Artwork falls back to
    /// `fallback_artwork`, then to the generic placeholder.
    pub fn to_track(&self, fallback_artwork: Option<&str>) -> Track {
        let artwork = self
            .image_url
            .as_deref()
            .or(fallback_artwork)
            .unwrap_or(DEFAULT_ARTWORK);
        Track::new(
            self.id.clone(),
            self.title.clone(),
            self.artist.clone(),
            artwork,
            self.duration_secs,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistDetails {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cover_image_url: String,
    pub creator: String,
    pub songs: Vec<Song>,
    pub is_editable: bool,
}

impl PlaylistDetails {
    pub fn total_duration_secs(&self) -> u64 {
        self.songs.iter().map(|s| u64::from(s.duration_secs)).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeFeed {
    pub welcome_track: Option<Track>,
    pub new_releases: Vec<MediaItem>,
    pub popular_playlists: Vec<MediaItem>,
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchResults {
    pub query: String,
    pub songs: Vec<Song>,
    pub albums: Vec<MediaItem>,
    pub artists: Vec<MediaItem>,
    pub playlists: Vec<MediaItem>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
            && self.albums.is_empty()
            && self.artists.is_empty()
            && self.playlists.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Library {
    pub playlists: Vec<MediaItem>,
    pub liked_songs: Vec<Song>,
    pub albums: Vec<MediaItem>,
    pub artists: Vec<MediaItem>,
}

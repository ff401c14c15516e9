pub const PLACEHOLDER_ARTWORK: &str = "/placeholder.svg";

/// A track loaded into the playback session. Replaced wholesale on every play.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub artwork_url: String,
    pub duration_secs: u32,
}

impl Track {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        artwork_url: impl Into<String>,
        duration_secs: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            artwork_url: artwork_url.into(),
            duration_secs,
        }
    }

    pub fn artwork(&self) -> &str {
        if self.artwork_url.is_empty() {
            PLACEHOLDER_ARTWORK
        } else {
            &self.artwork_url
        }
    }
}

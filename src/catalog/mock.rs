use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

use async_trait::async_trait;
use tracing::{debug, info};

use crate::{
    catalog::{
        error::CatalogError,
        model::{
            CardInfo, DEFAULT_ARTWORK, HomeFeed, Library, MediaItem, MediaKind, PlaylistDetails,
            SearchResults, Song,
        },
        search::QueryFilter,
        source::CatalogSource,
    },
    playback::track::Track,
};

const GENRES: [&str; 8] = [
    "Pop",
    "Rock",
    "Jazz",
    "Electronic",
    "Hip-Hop",
    "Classical",
    "Podcasts",
    "Audiobooks",
];

fn album(id: &str, title: &str, subtitle: &str, image: &str) -> MediaItem {
    MediaItem::Album(CardInfo::new(id, title, subtitle, image))
}

fn artist(id: &str, title: &str, image: &str) -> MediaItem {
    MediaItem::Artist(CardInfo::new(id, title, "Artist", image))
}

fn playlist(id: &str, title: &str, subtitle: &str, image: &str) -> MediaItem {
    MediaItem::Playlist(CardInfo::new(id, title, subtitle, image))
}

fn songs() -> Vec<Song> {
    vec![
        Song::new(
            "s1",
            "Future Echoes",
            "Cybernetic Bard",
            Some("Digital Dreams"),
            225,
            Some("https://source.unsplash.com/random/100x100?song,cyberpunk"),
        ),
        Song::new(
            "s2",
            "Neon Rider",
            "Grid Runner",
            Some("Night Drive"),
            252,
            Some("https://source.unsplash.com/random/100x100?song,neon"),
        ),
        Song::new(
            "s3",
            "Lost Signal",
            "Void Walker",
            None,
            178,
            Some("https://source.unsplash.com/random/100x100?song,abstract"),
        ),
        Song::new(
            "s4",
            "Starlight Melody",
            "Cosmic Dreamer",
            Some("Celestial Harmonies"),
            210,
            Some("https://source.unsplash.com/random/100x100?song,stars"),
        ),
        Song::new(
            "s5",
            "Sunset Drive",
            "Palm Highway",
            Some("80s Summer"),
            302,
            Some("https://source.unsplash.com/random/100x100?song,sunset"),
        ),
        Song::new(
            "s6",
            "Midnight Cruise",
            "Night Owl",
            Some("City Lights"),
            230,
            Some("https://source.unsplash.com/random/100x100?song,night"),
        ),
    ]
}

fn pick(all: &[Song], ids: &[&str]) -> Vec<Song> {
    ids.iter()
        .filter_map(|id| all.iter().find(|s| s.id == *id).cloned())
        .collect()
}

fn new_releases() -> Vec<MediaItem> {
    vec![
        album(
            "album1",
            "Synth Dreams",
            "ElectroMaestro",
            "https://source.unsplash.com/random/400x400?album,synth",
        ),
        album(
            "album2",
            "Acoustic Mornings",
            "Willow Creek",
            "https://source.unsplash.com/random/400x400?album,acoustic",
        ),
        album(
            "album3",
            "Future Funk Vol. 3",
            "GrooveMaster",
            "https://source.unsplash.com/random/400x400?album,funk",
        ),
        playlist(
            "playlist1",
            "Chill Vibes",
            "Curated Playlist",
            "https://source.unsplash.com/random/400x400?playlist,chill",
        ),
    ]
}

fn popular_playlists() -> Vec<MediaItem> {
    vec![
        playlist(
            "playlist2",
            "Workout Beats",
            "High Energy Mix",
            "https://source.unsplash.com/random/400x400?playlist,workout",
        ),
        playlist(
            "playlist3",
            "Study Focus",
            "Instrumental Tracks",
            "https://source.unsplash.com/random/400x400?playlist,study",
        ),
        artist(
            "artist1",
            "Star Voyager",
            "https://source.unsplash.com/random/400x400?artist,electronic",
        ),
    ]
}

fn saved_albums() -> Vec<MediaItem> {
    vec![
        album(
            "a1",
            "Robotic Rhythms",
            "Future Gadget Grooves",
            "https://source.unsplash.com/random/400x400?album,robot",
        ),
        album(
            "a2",
            "Cosmic Journeys",
            "Stella Explorer",
            "https://source.unsplash.com/random/400x400?album,space",
        ),
    ]
}

fn followed_artists() -> Vec<MediaItem> {
    vec![
        artist(
            "ar1",
            "SynthWave Surfer",
            "https://source.unsplash.com/random/400x400?artist,synthwave",
        ),
        artist(
            "ar2",
            "Acoustic Soul",
            "https://source.unsplash.com/random/400x400?artist,acoustic",
        ),
    ]
}

fn saved_playlists() -> Vec<MediaItem> {
    vec![
        playlist(
            "p1",
            "Retro Vibes",
            "Curated by AI",
            "https://source.unsplash.com/random/400x400?playlist,retro",
        ),
        playlist(
            "p4",
            "Deep Focus Ambient",
            "Productivity Mix",
            "https://source.unsplash.com/random/400x400?playlist,ambient",
        ),
    ]
}

fn retro_vibes(all: &[Song]) -> PlaylistDetails {
    PlaylistDetails {
        id: "p1".to_string(),
        name: "Retro Vibes".to_string(),
        description: "A curated collection of the best retro-futuristic tracks to get you in \
                      the zone. Perfect for late-night coding sessions or cruising through \
                      neon-lit cityscapes."
            .to_string(),
        cover_image_url: "https://source.unsplash.com/random/600x600?playlist,retro".to_string(),
        creator: "DJ Synthwave".to_string(),
        songs: pick(all, &["s1", "s2", "s5", "s6"]),
        is_editable: true,
    }
}

fn welcome_track() -> Track {
    Track::new("track001", "Welcome Tune", "Ascendion Player", DEFAULT_ARTWORK, 180)
}

fn card_text(item: &MediaItem) -> String {
    match item.subtitle() {
        Some(subtitle) => format!("{} {}", item.title(), subtitle),
        None => item.title().to_string(),
    }
}

fn song_text(song: &Song) -> String {
    match &song.album {
        Some(album) => format!("{} {} {}", song.title, song.artist, album),
        None => format!("{} {}", song.title, song.artist),
    }
}

/// Compiled-in catalog. Playlist edits live in memory for the process lifetime.
pub struct MockCatalog {
    songs: Vec<Song>,
    playlists: RwLock<HashMap<String, PlaylistDetails>>,
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCatalog {
    pub fn new() -> Self {
        let songs = songs();
        let detail = retro_vibes(&songs);
        let playlists = HashMap::from([(detail.id.clone(), detail)]);
        Self {
            songs,
            playlists: RwLock::new(playlists),
        }
    }

    fn liked_songs(&self) -> Vec<Song> {
        pick(&self.songs, &["s2", "s4"])
    }
}

#[async_trait]
impl CatalogSource for MockCatalog {
    async fn home_feed(&self) -> Result<HomeFeed, CatalogError> {
        Ok(HomeFeed {
            welcome_track: Some(welcome_track()),
            new_releases: new_releases(),
            popular_playlists: popular_playlists(),
            genres: GENRES.iter().map(|g| g.to_string()).collect(),
        })
    }

    async fn search(&self, query: &str) -> Result<SearchResults, CatalogError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(SearchResults {
                query: String::new(),
                songs: pick(&self.songs, &["s1", "s2", "s3"]),
                albums: saved_albums(),
                artists: followed_artists().into_iter().take(1).collect(),
                playlists: saved_playlists().into_iter().take(1).collect(),
            });
        }

        let mut filter = QueryFilter::new(query);
        let mut albums = saved_albums();
        let mut artists = followed_artists();
        let mut playlists = saved_playlists();
        for item in new_releases().into_iter().chain(popular_playlists()) {
            match item.kind() {
                MediaKind::Album => albums.push(item),
                MediaKind::Artist => artists.push(item),
                MediaKind::Playlist => playlists.push(item),
                MediaKind::Song => {}
            }
        }

        let results = SearchResults {
            query: query.to_string(),
            songs: filter.apply(self.songs.clone(), song_text),
            albums: filter.apply(albums, card_text),
            artists: filter.apply(artists, card_text),
            playlists: filter.apply(playlists, card_text),
        };
        debug!(
            query,
            songs = results.songs.len(),
            albums = results.albums.len(),
            artists = results.artists.len(),
            playlists = results.playlists.len(),
            "catalog_search"
        );
        Ok(results)
    }

    async fn library(&self) -> Result<Library, CatalogError> {
        Ok(Library {
            playlists: saved_playlists(),
            liked_songs: self.liked_songs(),
            albums: saved_albums().into_iter().take(1).collect(),
            artists: followed_artists(),
        })
    }

    async fn playlist(&self, id: &str) -> Result<PlaylistDetails, CatalogError> {
        self.playlists
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound {
                kind: MediaKind::Playlist,
                id: id.to_string(),
            })
    }

    async fn update_playlist_description(
        &self,
        id: &str,
        description: &str,
    ) -> Result<PlaylistDetails, CatalogError> {
        let mut playlists = self
            .playlists
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let playlist = playlists.get_mut(id).ok_or_else(|| CatalogError::NotFound {
            kind: MediaKind::Playlist,
            id: id.to_string(),
        })?;
        if !playlist.is_editable {
            return Err(CatalogError::ReadOnly(id.to_string()));
        }
        playlist.description = description.trim().to_string();
        info!(id, "playlist_description_updated");
        Ok(playlist.clone())
    }

    fn liked_song_ids(&self) -> Vec<String> {
        self.liked_songs().into_iter().map(|s| s.id).collect()
    }
}

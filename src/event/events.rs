use crate::catalog::{HomeFeed, Library, PlaylistDetails, SearchResults};

#[derive(Debug, Clone)]
#[allow(clippy::large_enum_variant)]
pub enum Event {
    // Playback
    PlaybackProgress(f64),
    PlaybackFinished(String),

    // Catalog
    HomeFeedFetched(HomeFeed),
    SearchResults(SearchResults),
    LibraryFetched(Library),
    PlaylistFetched(PlaylistDetails),
    PlaylistNotFound(String),
    PlaylistDescriptionSaved(PlaylistDetails),
    FetchError(String),
}

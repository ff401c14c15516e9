use async_trait::async_trait;

use crate::catalog::{
    error::CatalogError,
    model::{HomeFeed, Library, PlaylistDetails, SearchResults},
};

/// Where the views read catalog data from. A real backend has to provide
/// exactly these shapes.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn home_feed(&self) -> Result<HomeFeed, CatalogError>;

    async fn search(&self, query: &str) -> Result<SearchResults, CatalogError>;

    async fn library(&self) -> Result<Library, CatalogError>;

    async fn playlist(&self, id: &str) -> Result<PlaylistDetails, CatalogError>;

    async fn update_playlist_description(
        &self,
        id: &str,
        description: &str,
    ) -> Result<PlaylistDetails, CatalogError>;

    /// Seed for the liked set of the playback store.
    fn liked_song_ids(&self) -> Vec<String>;
}

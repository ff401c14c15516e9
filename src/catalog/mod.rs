pub mod error;
pub mod mock;
pub mod model;
pub mod search;
pub mod source;

pub use error::CatalogError;
pub use mock::MockCatalog;
pub use model::{
    CardFallback, CardInfo, HomeFeed, Library, MediaItem, MediaKind, PlaylistDetails,
    SearchResults, Song,
};
pub use source::CatalogSource;

#[cfg(test)]
mod tests;

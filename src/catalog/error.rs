use thiserror::Error;

use crate::catalog::model::MediaKind;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("{} {id} not found", .kind.as_str())]
    NotFound { kind: MediaKind, id: String },

    #[error("Playlist {0} is read-only")]
    ReadOnly(String),
}

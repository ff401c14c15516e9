use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlaybackError {
    #[error("No track is loaded")]
    NoTrack,

    #[error("Track {0} has no duration")]
    ZeroDuration(String),
}

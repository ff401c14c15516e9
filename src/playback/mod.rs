pub mod error;
pub mod session;
pub mod system;
pub mod track;

pub use error::PlaybackError;
pub use session::{PlaybackSession, PlaybackState, TickOutcome};
pub use system::PlaybackSystem;
pub use track::Track;

#[cfg(test)]
mod tests;

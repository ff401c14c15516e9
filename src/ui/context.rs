use crate::{
    catalog::CatalogSource, config::PlayerConfig, event::events::Event,
    playback::PlaybackSystem,
};
use flume::Sender;
use std::sync::Arc;

/// Shared by every view: the catalog, the single playback store and the
/// event bus.
pub struct AppContext {
    pub catalog: Arc<dyn CatalogSource>,
    pub playback: PlaybackSystem,
    pub event_tx: Sender<Event>,
    pub config: PlayerConfig,
}

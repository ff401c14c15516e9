use std::{
    sync::{Arc, PoisonError, RwLock, RwLockWriteGuard},
    time::Duration,
};

use flume::Sender;
use tokio::time::{Instant, interval_at};
use tracing::{debug, info};

use crate::{
    config::PlayerConfig,
    event::events::Event,
    playback::{
        session::{PlaybackSession, PlaybackState, TickOutcome},
        track::Track,
    },
    util::task::TaskManager,
};

const TICK_TASK: &str = "progress_tick";

/// The one playback store for the whole process. Every view reads it through
/// the app context, so playback survives navigation.
pub struct PlaybackSystem {
    session: Arc<RwLock<PlaybackSession>>,
    tasks: TaskManager,
    event_tx: Sender<Event>,
    tick_interval: Duration,
    volume_step: f64,
    seek_step_secs: i64,
}

impl PlaybackSystem {
    pub fn new(config: &PlayerConfig, event_tx: Sender<Event>, liked: Vec<String>) -> Self {
        let session = PlaybackSession::new(config.volume).with_liked(liked);
        Self {
            session: Arc::new(RwLock::new(session)),
            tasks: TaskManager::new(),
            event_tx,
            tick_interval: config.tick_interval,
            volume_step: config.volume_step,
            seek_step_secs: config.seek_step_secs,
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, PlaybackSession> {
        self.session.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> PlaybackSession {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn load_and_play(&mut self, track: Track) {
        info!(
            id = track.id.as_str(),
            title = track.title.as_str(),
            duration = track.duration_secs,
            artwork = track.artwork(),
            "playback_load"
        );
        self.write().load_and_play(track);
        self.start_ticker();
    }

    pub fn cue(&mut self, track: Track) {
        let id = track.id.clone();
        if self.write().cue(track) {
            debug!(id = id.as_str(), "playback_cue");
        }
    }

    pub fn play_pause(&mut self) {
        let state = {
            let mut session = self.write();
            session.toggle_play_pause();
            session.state()
        };
        match state {
            PlaybackState::Playing => self.start_ticker(),
            PlaybackState::Paused => self.tasks.abort(TICK_TASK),
            PlaybackState::Idle => debug!("play_pause ignored, nothing loaded"),
        }
    }

    pub fn seek(&mut self, percent: f64) {
        let playing = {
            let mut session = self.write();
            if session.current_track().is_none() {
                return;
            }
            session.seek(percent);
            session.is_playing()
        };
        self.resume_ticker_if_stalled(playing);
    }

    pub fn seek_forward(&mut self) {
        self.seek_by(self.seek_step_secs);
    }

    pub fn seek_backward(&mut self) {
        self.seek_by(-self.seek_step_secs);
    }

    fn seek_by(&mut self, seconds: i64) {
        let result = {
            let mut session = self.write();
            session.seek_by(seconds).map(|_| session.is_playing())
        };
        match result {
            Ok(playing) => self.resume_ticker_if_stalled(playing),
            Err(e) => debug!("seek ignored: {}", e),
        }
    }

    pub fn set_volume(&mut self, percent: f64) {
        self.write().set_volume(percent);
    }

    pub fn volume_up(&mut self) {
        let mut session = self.write();
        let volume = session.volume() + self.volume_step;
        session.set_volume(volume);
    }

    pub fn volume_down(&mut self) {
        let mut session = self.write();
        let volume = session.volume() - self.volume_step;
        session.set_volume(volume);
    }

    pub fn toggle_mute(&mut self) {
        self.write().toggle_mute();
    }

    pub fn toggle_like(&mut self, id: &str) -> bool {
        let liked = self.write().toggle_like(id);
        info!(id, liked, "playback_like_toggled");
        liked
    }

    pub fn toggle_like_current(&mut self) {
        let current = self.snapshot().current_track().map(|t| t.id.clone());
        if let Some(id) = current {
            self.toggle_like(&id);
        }
    }

    pub fn next(&self) {
        info!("next track requested, no queue to advance");
    }

    pub fn previous(&self) {
        info!("previous track requested, no queue to rewind");
    }

    pub fn is_ticking(&self) -> bool {
        self.tasks.is_running(TICK_TASK)
    }

    fn resume_ticker_if_stalled(&mut self, playing: bool) {
        if playing && !self.is_ticking() {
            self.start_ticker();
        }
    }

    fn start_ticker(&mut self) {
        let session = self.session.clone();
        let tx = self.event_tx.clone();
        let period = self.tick_interval;
        let epoch = self.session.read().unwrap_or_else(PoisonError::into_inner).epoch();

        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                let (outcome, id) = {
                    let mut session = session.write().unwrap_or_else(PoisonError::into_inner);
                    let outcome = session.tick_for(epoch);
                    (outcome, session.current_track().map(|t| t.id.clone()))
                };
                match outcome {
                    TickOutcome::Advanced(progress) => {
                        let _ = tx.send(Event::PlaybackProgress(progress));
                    }
                    TickOutcome::Finished => {
                        let _ = tx.send(Event::PlaybackProgress(100.0));
                        let _ = tx.send(Event::PlaybackFinished(id.unwrap_or_default()));
                        break;
                    }
                    TickOutcome::Inactive => {
                        debug!(epoch, "ticker stopped");
                        break;
                    }
                }
            }
        });
        self.tasks.spawn(TICK_TASK, handle);
    }
}

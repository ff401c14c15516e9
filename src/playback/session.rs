use std::collections::HashSet;

use crate::playback::{error::PlaybackError, track::Track};

pub const DEFAULT_VOLUME: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Playing,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Progress moved forward and is still below 100.
    Advanced(f64),
    /// Progress is pinned at 100; the schedule must stop.
    Finished,
    /// Nothing is playing; the schedule must stop.
    Inactive,
}

/// Everything the transport bar and the catalog views observe about playback.
///
/// Every transition is total: out-of-range input is clamped instead of
/// rejected, and `is_playing` can only become true while a track is loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackSession {
    current_track: Option<Track>,
    is_playing: bool,
    progress: f64,
    volume: f64,
    liked: HashSet<String>,
    epoch: u64,
}

impl Default for PlaybackSession {
    fn default() -> Self {
        Self::new(DEFAULT_VOLUME)
    }
}

impl PlaybackSession {
    pub fn new(volume: f64) -> Self {
        Self {
            current_track: None,
            is_playing: false,
            progress: 0.0,
            volume: clamp_percent(volume),
            liked: HashSet::new(),
            epoch: 0,
        }
    }

    pub fn with_liked<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.liked = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn load_and_play(&mut self, track: Track) {
        self.current_track = Some(track);
        self.is_playing = true;
        self.progress = 0.0;
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Loads a track paused at the start. Ignored unless the session is idle.
    pub fn cue(&mut self, track: Track) -> bool {
        if self.current_track.is_some() {
            return false;
        }
        self.current_track = Some(track);
        self.is_playing = false;
        self.progress = 0.0;
        true
    }

    pub fn toggle_play_pause(&mut self) -> bool {
        if self.current_track.is_none() {
            return false;
        }
        self.is_playing = !self.is_playing;
        self.epoch = self.epoch.wrapping_add(1);
        true
    }

    pub fn seek(&mut self, percent: f64) {
        self.progress = clamp_percent(percent);
    }

    /// Moves the playhead by a signed number of seconds and returns the new percentage.
    pub fn seek_by(&mut self, seconds: i64) -> Result<f64, PlaybackError> {
        let track = self.current_track.as_ref().ok_or(PlaybackError::NoTrack)?;
        if track.duration_secs == 0 {
            return Err(PlaybackError::ZeroDuration(track.id.clone()));
        }
        let delta = seconds as f64 * 100.0 / f64::from(track.duration_secs);
        self.seek(self.progress + delta);
        Ok(self.progress)
    }

    pub fn set_volume(&mut self, percent: f64) {
        self.volume = clamp_percent(percent);
    }

    /// Any audible level mutes; silence always unmutes to the default level.
    pub fn toggle_mute(&mut self) {
        self.volume = if self.volume > 0.0 { 0.0 } else { DEFAULT_VOLUME };
    }

    /// Flips membership of `id` in the liked set and returns the new membership.
    pub fn toggle_like(&mut self, id: &str) -> bool {
        if self.liked.remove(id) {
            false
        } else {
            self.liked.insert(id.to_string());
            true
        }
    }

    pub fn tick(&mut self) -> TickOutcome {
        let Some(track) = self.current_track.as_ref() else {
            return TickOutcome::Inactive;
        };
        if !self.is_playing {
            return TickOutcome::Inactive;
        }
        if track.duration_secs == 0 {
            self.progress = 100.0;
            return TickOutcome::Finished;
        }

        let next = self.progress + 100.0 / f64::from(track.duration_secs);
        if next >= 100.0 {
            self.progress = 100.0;
            TickOutcome::Finished
        } else {
            self.progress = next;
            TickOutcome::Advanced(next)
        }
    }

    /// Ticks only for the play run identified by `epoch`; a stale run is inactive.
    pub fn tick_for(&mut self, epoch: u64) -> TickOutcome {
        if epoch != self.epoch {
            return TickOutcome::Inactive;
        }
        self.tick()
    }

    /// Changes whenever a track is loaded or play/pause flips.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn state(&self) -> PlaybackState {
        match (&self.current_track, self.is_playing) {
            (None, _) => PlaybackState::Idle,
            (Some(_), true) => PlaybackState::Playing,
            (Some(_), false) => PlaybackState::Paused,
        }
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn is_muted(&self) -> bool {
        self.volume == 0.0
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.liked.contains(id)
    }

    pub fn current_is_liked(&self) -> bool {
        self.current_track
            .as_ref()
            .is_some_and(|track| self.liked.contains(&track.id))
    }

    pub fn is_current(&self, id: &str) -> bool {
        self.current_track.as_ref().is_some_and(|t| t.id == id)
    }

    pub fn liked_ids(&self) -> &HashSet<String> {
        &self.liked
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.current_track
            .as_ref()
            .map_or(0.0, |t| self.progress * f64::from(t.duration_secs) / 100.0)
    }
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

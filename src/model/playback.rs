//! Playback session state
//!
//! There is no audio engine. Playing a track flips a flag and lets the
//! progress ticker advance a simulated 0..100 counter.

use std::collections::HashSet;

use crate::error::PlaybackError;
use super::catalog::Track;

/// Progress shown when a track is first loaded
pub const INITIAL_PROGRESS: f64 = 30.0;
/// Progress added per tick
pub const PROGRESS_STEP: f64 = 0.5;
pub const PROGRESS_MAX: f64 = 100.0;
/// Length the elapsed label pretends a full cycle takes
pub const SIMULATED_LENGTH_SECS: f64 = 600.0;
const HISTORY_LIMIT: usize = 20;

#[derive(Clone, Debug)]
pub struct PlaybackSession {
    current_track: Option<Track>,
    is_playing: bool,
    progress: f64,
    player_open: bool,
    liked: HashSet<String>,
    history: Vec<Track>,
}

impl Default for PlaybackSession {
    fn default() -> Self {
        Self {
            current_track: None,
            is_playing: false,
            progress: 0.0,
            player_open: false,
            liked: HashSet::new(),
            history: Vec::new(),
        }
    }
}

impl PlaybackSession {
    pub fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn player_open(&self) -> bool {
        self.player_open
    }

    /// The full-screen player shows only with a loaded track and the open flag set
    pub fn player_visible(&self) -> bool {
        self.player_open && self.current_track.is_some()
    }

    /// Most recently played first
    pub fn history(&self) -> &[Track] {
        &self.history
    }

    pub fn is_liked(&self, track_id: &str) -> bool {
        self.liked.contains(track_id)
    }

    /// Load `track`, start playing and open the player. Any previous track
    /// is replaced, not queued.
    pub fn play(&mut self, track: Track) {
        self.history.retain(|t| t.id != track.id);
        self.history.insert(0, track.clone());
        self.history.truncate(HISTORY_LIMIT);

        self.current_track = Some(track);
        self.is_playing = true;
        self.progress = INITIAL_PROGRESS;
        self.player_open = true;
    }

    /// Flip play/pause, returning the new state
    pub fn toggle_play(&mut self) -> Result<bool, PlaybackError> {
        if self.current_track.is_none() {
            return Err(PlaybackError::NoActiveTrack);
        }
        self.is_playing = !self.is_playing;
        Ok(self.is_playing)
    }

    /// Hide the player and pause. The track stays loaded for the mini-player.
    pub fn close_overlay(&mut self) {
        self.player_open = false;
        self.is_playing = false;
    }

    /// Reopen the player from the mini-player
    pub fn open_player(&mut self) -> Result<(), PlaybackError> {
        if self.current_track.is_none() {
            return Err(PlaybackError::NoActiveTrack);
        }
        self.player_open = true;
        Ok(())
    }

    pub fn toggle_like(&mut self) -> Result<bool, PlaybackError> {
        let id = self
            .current_track
            .as_ref()
            .map(|t| t.id.clone())
            .ok_or(PlaybackError::NoActiveTrack)?;
        if self.liked.remove(&id) {
            Ok(false)
        } else {
            self.liked.insert(id);
            Ok(true)
        }
    }

    /// Advance progress by one step while playing, wrapping to 0 at 100.
    /// Paused sessions are left untouched.
    pub fn tick(&mut self) -> Result<f64, PlaybackError> {
        if self.current_track.is_none() {
            return Err(PlaybackError::NoActiveTrack);
        }
        if self.is_playing {
            let next = self.progress + PROGRESS_STEP;
            self.progress = if next >= PROGRESS_MAX { 0.0 } else { next };
        }
        Ok(self.progress)
    }

    /// `m:ss` position on the simulated ten minute cycle
    pub fn elapsed_label(&self) -> String {
        let secs = (self.progress * SIMULATED_LENGTH_SECS / PROGRESS_MAX).floor() as u32;
        format!("{}:{:02}", secs / 60, secs % 60)
    }

    #[cfg(test)]
    pub(crate) fn set_progress(&mut self, progress: f64) {
        self.progress = progress;
    }
}

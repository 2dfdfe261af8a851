//! Playback control methods
//!
//! Starting playback acquires a [`ProgressTicker`]; pausing, closing the
//! player or quitting releases it. Ticks carry the generation of the ticker
//! that sent them, and only the live generation may advance progress.

use crate::log_ignored;
use crate::model::Track;
use super::{AppController, ProgressTicker};

impl AppController {
    pub async fn play(&self, track: Track) {
        tracing::info!(track_id = %track.id, title = %track.title, "Playing track");
        self.model.lock().await.play(track);
        self.start_ticker().await;
    }

    pub async fn toggle_play(&self) {
        let result = self.model.lock().await.toggle_play();
        match result {
            Ok(true) => {
                tracing::debug!("Resumed");
                self.start_ticker().await;
            }
            Ok(false) => {
                tracing::debug!("Paused");
                self.stop_ticker().await;
            }
            Err(e) => tracing::debug!(error = %e, "Play/pause ignored"),
        }
    }

    /// Close the full-screen player. The track stays loaded but paused.
    pub async fn close_player(&self) {
        self.model.lock().await.close_player();
        self.stop_ticker().await;
    }

    /// Reopen the player from the mini-player without resuming
    pub async fn open_player(&self) {
        let result = self.model.lock().await.open_player();
        log_ignored!("open_player", result);
    }

    pub async fn toggle_like(&self) {
        let mut model = self.model.lock().await;
        match model.playback.toggle_like() {
            Ok(liked) => {
                let title = model
                    .playback
                    .current_track()
                    .map(|t| t.title.clone())
                    .unwrap_or_default();
                tracing::debug!(liked, "Like toggled");
                model.set_notice(if liked {
                    format!("Added \"{}\" to Favorites", title)
                } else {
                    format!("Removed \"{}\" from Favorites", title)
                });
            }
            Err(e) => tracing::debug!(error = %e, "Like ignored"),
        }
    }

    pub(crate) async fn handle_tick(&self, generation: u64) {
        let live = self.ticker.lock().await.active.as_ref().map(|t| t.generation());
        if live != Some(generation) {
            tracing::trace!(generation, ?live, "Dropping stale tick");
            return;
        }
        let result = self.model.lock().await.tick();
        match result {
            Ok(progress) => tracing::trace!(progress, "Tick"),
            Err(e) => {
                tracing::debug!(error = %e, "Tick with nothing loaded, releasing ticker");
                self.stop_ticker().await;
            }
        }
    }

    /// Replace any running ticker with a fresh one
    pub(crate) async fn start_ticker(&self) {
        let mut slot = self.ticker.lock().await;
        let generation = slot.next_generation;
        slot.next_generation += 1;
        // Assigning drops (and aborts) the previous ticker
        slot.active = Some(ProgressTicker::start(generation, self.tick_period, self.events.clone()));
    }

    pub(crate) async fn stop_ticker(&self) {
        self.ticker.lock().await.active.take();
    }

    pub async fn ticker_running(&self) -> bool {
        self.ticker.lock().await.active.is_some()
    }
}

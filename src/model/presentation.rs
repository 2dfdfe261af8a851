//! Decides what sits on top of the main shell
//!
//! Z-order, top first: player, search, detail. Only the top overlay gets
//! input; the view draws every layer bottom-up.

use super::navigation::Navigator;
use super::playback::PlaybackSession;
use super::types::{Detail, Screen, Tab};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Overlay {
    Player,
    Search,
    Detail(Detail),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Presentation {
    pub screen: Screen,
    pub tab: Option<Tab>,
    /// Every visible overlay, bottom layer first
    pub overlays: Vec<Overlay>,
    pub mini_player: bool,
}

impl Presentation {
    pub fn derive(nav: &Navigator, playback: &PlaybackSession) -> Self {
        let screen = nav.screen();
        if screen != Screen::Main {
            return Self {
                screen,
                tab: None,
                overlays: Vec::new(),
                mini_player: false,
            };
        }

        let mut overlays = Vec::new();
        if let Some(detail) = nav.detail() {
            overlays.push(Overlay::Detail(detail.clone()));
        }
        if nav.search_open() {
            overlays.push(Overlay::Search);
        }
        if playback.player_visible() {
            overlays.push(Overlay::Player);
        }

        Self {
            screen,
            tab: nav.active_tab(),
            mini_player: playback.current_track().is_some() && !playback.player_visible(),
            overlays,
        }
    }

    /// The overlay that receives input
    pub fn top(&self) -> Option<&Overlay> {
        self.overlays.last()
    }
}

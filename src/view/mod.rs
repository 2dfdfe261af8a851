//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! Views are pure functions of the model; nothing here mutates state.
//! It is organized into submodules by component type:
//!
//! - `theme`: Color palettes
//! - `utils`: Shared utility functions (formatting, scrollable lists)
//! - `layout`: Header and bottom navigation
//! - `screens`: Splash, onboarding and tab bodies
//! - `progress`: Mini-player and progress gauge
//! - `overlays`: Player, search, detail screens, help popup

mod theme;
mod utils;
mod layout;
mod screens;
mod progress;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{AppModel, Overlay, Screen};

pub use theme::Palette;

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, model: &AppModel, palette: &Palette) {
        let presentation = model.presentation();

        match presentation.screen {
            Screen::Splash => screens::render_splash(frame, palette),
            Screen::Onboarding => screens::render_onboarding(frame, model, palette),
            Screen::Main => {
                let mini_height = if presentation.mini_player { 3 } else { 0 };
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(3),           // Header
                        Constraint::Min(0),              // Tab body
                        Constraint::Length(mini_height), // Mini-player
                        Constraint::Length(3),           // Bottom navigation
                    ])
                    .split(frame.area());

                let tab = presentation.tab.unwrap_or_default();
                layout::render_header(frame, chunks[0], palette);
                screens::render_tab_body(frame, chunks[1], model, tab, palette);
                if presentation.mini_player {
                    progress::render_mini_player(frame, chunks[2], &model.playback, palette);
                }
                layout::render_bottom_nav(frame, chunks[3], tab, palette);

                // Bottom layer first so the top overlay ends up drawn last
                for overlay in &presentation.overlays {
                    match overlay {
                        Overlay::Detail(detail) => overlays::render_detail(frame, model, detail, palette),
                        Overlay::Search => overlays::render_search(frame, model, palette),
                        Overlay::Player => overlays::render_player(frame, model, palette),
                    }
                }
            }
        }

        if let Some(message) = model.notice() {
            overlays::render_notice(frame, message, palette);
        }

        if model.ui.show_help {
            overlays::render_help_popup(frame, palette);
        }
    }
}

//! Key event handling
//!
//! Keys are routed to whatever has input: the help popup, then the current
//! screen, then (in the main shell) the top overlay.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{Overlay, Screen, Tab, INTERESTS};
use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
            self.quit().await;
            return Ok(());
        }

        let mut model = self.model.lock().await;

        // Help popup blocks all other interactions
        if model.ui.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('?')) {
                model.ui.show_help = false;
            }
            return Ok(());
        }

        let screen = model.nav.screen();
        let top = model.presentation().top().cloned();
        let tab = model.nav.active_tab();
        drop(model);

        match screen {
            Screen::Splash => {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
                    self.quit().await;
                }
            }
            Screen::Onboarding => self.handle_onboarding_key(key).await,
            Screen::Main => match top {
                Some(Overlay::Player) => self.handle_player_key(key).await,
                Some(Overlay::Search) => self.handle_search_key(key).await,
                Some(Overlay::Detail(_)) => self.handle_detail_key(key).await,
                None => self.handle_shell_key(key, tab).await,
            },
        }
        Ok(())
    }

    pub async fn quit(&self) {
        tracing::info!("Quit requested");
        self.shutdown().await;
        self.model.lock().await.set_should_quit(true);
    }

    async fn handle_onboarding_key(&self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Right => self.onboarding_continue().await,
            KeyCode::Esc | KeyCode::Char('s') | KeyCode::Char('S') => self.skip_onboarding().await,
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit().await,
            KeyCode::Up => {
                let mut model = self.model.lock().await;
                let onboarding = &mut model.ui.onboarding;
                onboarding.cursor = onboarding.cursor.saturating_sub(1);
            }
            KeyCode::Down => {
                let mut model = self.model.lock().await;
                let onboarding = &mut model.ui.onboarding;
                if onboarding.cursor + 1 < INTERESTS.len() {
                    onboarding.cursor += 1;
                }
            }
            KeyCode::Char(' ') => {
                let mut model = self.model.lock().await;
                // Interests are only picked on the second step
                if model.ui.onboarding.step == 1 {
                    model.ui.onboarding.toggle_interest();
                }
            }
            _ => {}
        }
    }

    async fn handle_player_key(&self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_play().await,
            KeyCode::Char('l') | KeyCode::Char('L') => self.toggle_like().await,
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Down => self.back().await,
            KeyCode::Char('h') | KeyCode::Char('?') => self.show_help().await,
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit().await,
            _ => {}
        }
    }

    async fn handle_search_key(&self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.back().await,
            KeyCode::Enter => self.activate_selected().await,
            KeyCode::Up => self.model.lock().await.move_selection_up(),
            KeyCode::Down => self.model.lock().await.move_selection_down(),
            KeyCode::Backspace => self.model.lock().await.backspace_search(),
            KeyCode::Char(c) => self.model.lock().await.append_to_search(c),
            _ => {}
        }
    }

    async fn handle_detail_key(&self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => self.back().await,
            KeyCode::Enter => self.activate_selected().await,
            KeyCode::Up => self.model.lock().await.move_selection_up(),
            KeyCode::Down => self.model.lock().await.move_selection_down(),
            KeyCode::Char(' ') => self.toggle_play().await,
            KeyCode::Char('m') | KeyCode::Char('M') => self.open_player().await,
            KeyCode::Char('h') | KeyCode::Char('?') => self.show_help().await,
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit().await,
            _ => {}
        }
    }

    async fn handle_shell_key(&self, key: KeyEvent, tab: Option<Tab>) {
        match key.code {
            KeyCode::Tab => self.cycle_tab(true).await,
            KeyCode::BackTab => self.cycle_tab(false).await,
            KeyCode::Char(c @ '1'..='4') => {
                if let Some(tab) = Tab::from_digit(c) {
                    self.select_tab(tab).await;
                }
            }
            KeyCode::Up => self.model.lock().await.move_selection_up(),
            KeyCode::Down => self.model.lock().await.move_selection_down(),
            KeyCode::Left if tab == Some(Tab::Library) => {
                self.model.lock().await.cycle_library_section(false)
            }
            KeyCode::Right if tab == Some(Tab::Library) => {
                self.model.lock().await.cycle_library_section(true)
            }
            KeyCode::Enter => self.activate_selected().await,
            KeyCode::Char(' ') => self.toggle_play().await,
            KeyCode::Char('m') | KeyCode::Char('M') => self.open_player().await,
            KeyCode::Char('/') => self.open_search().await,
            KeyCode::Char('p') | KeyCode::Char('P') => self.open_creator_profile().await,
            KeyCode::Char('h') | KeyCode::Char('?') => self.show_help().await,
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit().await,
            _ => {}
        }
    }

    async fn show_help(&self) {
        self.model.lock().await.ui.show_help = true;
    }
}

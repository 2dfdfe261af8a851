//! Navigation-related controller methods (splash, onboarding, tabs, overlays)

use crate::model::{Detail, NavEvent, Overlay, Screen, SelectedItem, Tab};
use super::{AppController, SplashTimer};

impl AppController {
    /// Arm the splash timer if the app is still on the splash screen
    pub async fn start_splash_timer(&self) {
        if self.model.lock().await.nav.screen() != Screen::Splash {
            return;
        }
        tracing::debug!(delay_ms = self.splash_delay.as_millis() as u64, "Splash timer armed");
        *self.splash.lock().await = Some(SplashTimer::start(self.splash_delay, self.events.clone()));
    }

    pub(crate) async fn finish_splash(&self) {
        self.splash.lock().await.take();
        self.navigate(NavEvent::SplashElapsed).await;
    }

    /// Apply a navigation event. Moving away from the full-screen player
    /// closes it first so the ticker is released.
    pub async fn navigate(&self, event: NavEvent) {
        let leaves_player = matches!(
            event,
            NavEvent::SelectTab(_) | NavEvent::OpenSearch | NavEvent::OpenDetail(_)
        );
        if leaves_player && self.model.lock().await.playback.player_visible() {
            self.close_player().await;
        }

        let mut model = self.model.lock().await;
        if let Err(e) = model.apply_nav(event) {
            tracing::debug!(error = %e, "Navigation event ignored");
        }
    }

    pub async fn select_tab(&self, tab: Tab) {
        tracing::debug!(tab = tab.label(), "Selecting tab");
        self.navigate(NavEvent::SelectTab(tab)).await;
    }

    pub async fn cycle_tab(&self, forward: bool) {
        let current = self.model.lock().await.nav.active_tab();
        if let Some(tab) = current {
            self.select_tab(if forward { tab.next() } else { tab.prev() }).await;
        }
    }

    /// "Continue" on the onboarding flow; the last step completes it
    pub async fn onboarding_continue(&self) {
        let finished = self.model.lock().await.ui.onboarding.advance();
        if finished {
            let interests = self.model.lock().await.ui.onboarding.interests.clone();
            tracing::info!(?interests, "Onboarding complete");
            self.navigate(NavEvent::OnboardingComplete).await;
        }
    }

    pub async fn skip_onboarding(&self) {
        tracing::info!("Onboarding skipped");
        self.navigate(NavEvent::OnboardingSkipped).await;
    }

    pub async fn open_search(&self) {
        self.navigate(NavEvent::OpenSearch).await;
    }

    /// Open a creator profile: the highlighted one on the profile tab,
    /// otherwise the first creator in the catalog.
    pub async fn open_creator_profile(&self) {
        let id = {
            let model = self.model.lock().await;
            match model.get_selected_item() {
                Some(SelectedItem::Creator { id }) => Some(id),
                _ => model.catalog.creators.first().map(|c| c.id.clone()),
            }
        };
        if let Some(id) = id {
            self.navigate(NavEvent::OpenDetail(Detail::Creator(id))).await;
        }
    }

    /// Close whatever overlay is on top
    pub async fn back(&self) {
        let top = self.model.lock().await.presentation().top().cloned();
        match top {
            Some(Overlay::Player) => self.close_player().await,
            Some(Overlay::Search) => self.navigate(NavEvent::CloseSearch).await,
            Some(Overlay::Detail(_)) => self.navigate(NavEvent::CloseDetail).await,
            None => {}
        }
    }

    /// Act on the highlighted row: play a track or open its detail screen
    pub async fn activate_selected(&self) {
        let selected = self.model.lock().await.get_selected_item();
        match selected {
            Some(SelectedItem::Track(track)) => self.play(track).await,
            Some(SelectedItem::Category { id }) => {
                self.navigate(NavEvent::OpenDetail(Detail::Playlist(id))).await
            }
            Some(SelectedItem::Creator { id }) => {
                self.navigate(NavEvent::OpenDetail(Detail::Creator(id))).await
            }
            None => {}
        }
    }
}

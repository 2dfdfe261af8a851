//! Navigation state machine
//!
//! `Splash -> Onboarding -> Main`, with no way back. Overlay flags (search,
//! detail) only exist on top of `Main`. Every event goes through
//! [`next_screen`]; anything not in that table is rejected.

use crate::error::NavigationError;
use super::types::{Detail, NavEvent, Screen, Tab};

/// The transition table. `None` means the event is illegal on that screen.
pub fn next_screen(screen: Screen, event: &NavEvent) -> Option<Screen> {
    use NavEvent::*;
    match (screen, event) {
        (Screen::Splash, SplashElapsed) => Some(Screen::Onboarding),
        (Screen::Onboarding, OnboardingComplete | OnboardingSkipped) => Some(Screen::Main),
        (
            Screen::Main,
            SelectTab(_) | OpenSearch | CloseSearch | OpenDetail(_) | CloseDetail,
        ) => Some(Screen::Main),
        _ => None,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Navigator {
    screen: Screen,
    active_tab: Tab,
    search_open: bool,
    detail: Option<Detail>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start directly in the main shell (intro skipped)
    pub fn at_main() -> Self {
        Self {
            screen: Screen::Main,
            ..Self::default()
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The active tab, only while the main shell is showing
    pub fn active_tab(&self) -> Option<Tab> {
        (self.screen == Screen::Main).then_some(self.active_tab)
    }

    pub fn search_open(&self) -> bool {
        self.screen == Screen::Main && self.search_open
    }

    pub fn detail(&self) -> Option<&Detail> {
        if self.screen == Screen::Main {
            self.detail.as_ref()
        } else {
            None
        }
    }

    pub fn handle(&mut self, event: NavEvent) -> Result<(), NavigationError> {
        let Some(next) = next_screen(self.screen, &event) else {
            return Err(NavigationError::InvalidTransition {
                screen: self.screen,
                event,
            });
        };

        match &event {
            NavEvent::SelectTab(tab) => {
                // Switching tabs dismisses whatever sub-screen was on top
                self.active_tab = *tab;
                self.search_open = false;
                self.detail = None;
            }
            NavEvent::OpenSearch => self.search_open = true,
            NavEvent::CloseSearch => self.search_open = false,
            NavEvent::OpenDetail(detail) => {
                self.search_open = false;
                self.detail = Some(detail.clone());
            }
            NavEvent::CloseDetail => self.detail = None,
            NavEvent::SplashElapsed
            | NavEvent::OnboardingComplete
            | NavEvent::OnboardingSkipped => {}
        }

        if next != self.screen {
            tracing::debug!(from = ?self.screen, to = ?next, "Screen transition");
        }
        self.screen = next;
        Ok(())
    }

    /// Move to `target` if it is the next screen in the forward flow.
    /// Navigating to the current screen is a no-op.
    pub fn navigate(&mut self, target: Screen) -> Result<(), NavigationError> {
        if target == self.screen {
            return Ok(());
        }
        let event = match (self.screen, target) {
            (Screen::Splash, Screen::Onboarding) => NavEvent::SplashElapsed,
            (Screen::Onboarding, Screen::Main) => NavEvent::OnboardingComplete,
            (from, to) => return Err(NavigationError::Unreachable { from, to }),
        };
        self.handle(event)
    }

    pub fn select_tab(&mut self, tab: Tab) -> Result<(), NavigationError> {
        self.handle(NavEvent::SelectTab(tab))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_events() -> Vec<NavEvent> {
        let mut events = vec![
            NavEvent::SplashElapsed,
            NavEvent::OnboardingComplete,
            NavEvent::OnboardingSkipped,
            NavEvent::OpenSearch,
            NavEvent::CloseSearch,
            NavEvent::OpenDetail(Detail::Playlist("1".to_string())),
            NavEvent::OpenDetail(Detail::Creator("a1".to_string())),
            NavEvent::CloseDetail,
        ];
        events.extend(Tab::ALL.into_iter().map(NavEvent::SelectTab));
        events
    }

    #[test]
    fn starts_on_splash_without_tab() {
        let nav = Navigator::new();
        assert_eq!(nav.screen(), Screen::Splash);
        assert_eq!(nav.active_tab(), None);
    }

    #[test]
    fn forward_flow_reaches_main() {
        let mut nav = Navigator::new();
        nav.handle(NavEvent::SplashElapsed).unwrap();
        assert_eq!(nav.screen(), Screen::Onboarding);
        nav.handle(NavEvent::OnboardingSkipped).unwrap();
        assert_eq!(nav.screen(), Screen::Main);
        assert_eq!(nav.active_tab(), Some(Tab::Home));
    }

    #[test]
    fn select_tab_outside_main_is_rejected() {
        let mut nav = Navigator::new();
        let err = nav.select_tab(Tab::Library).unwrap_err();
        assert_eq!(
            err,
            NavigationError::InvalidTransition {
                screen: Screen::Splash,
                event: NavEvent::SelectTab(Tab::Library),
            }
        );
        assert_eq!(nav.screen(), Screen::Splash);
    }

    #[test]
    fn no_way_back_from_main() {
        let mut nav = Navigator::at_main();
        assert!(nav.handle(NavEvent::SplashElapsed).is_err());
        assert!(nav.navigate(Screen::Onboarding).is_err());
        assert!(nav.navigate(Screen::Splash).is_err());
        assert_eq!(nav.screen(), Screen::Main);
    }

    #[test]
    fn navigate_follows_forward_edges_only() {
        let mut nav = Navigator::new();
        assert_eq!(
            nav.navigate(Screen::Main),
            Err(NavigationError::Unreachable {
                from: Screen::Splash,
                to: Screen::Main,
            })
        );
        nav.navigate(Screen::Onboarding).unwrap();
        nav.navigate(Screen::Onboarding).unwrap();
        nav.navigate(Screen::Main).unwrap();
        assert_eq!(nav.screen(), Screen::Main);
    }

    #[test]
    fn tab_switch_dismisses_overlays() {
        let mut nav = Navigator::at_main();
        nav.handle(NavEvent::OpenDetail(Detail::Creator("a1".to_string())))
            .unwrap();
        nav.handle(NavEvent::OpenSearch).unwrap();
        nav.select_tab(Tab::Explore).unwrap();
        assert!(!nav.search_open());
        assert_eq!(nav.detail(), None);
        assert_eq!(nav.active_tab(), Some(Tab::Explore));
    }

    #[test]
    fn opening_detail_closes_search() {
        let mut nav = Navigator::at_main();
        nav.handle(NavEvent::OpenSearch).unwrap();
        nav.handle(NavEvent::OpenDetail(Detail::Playlist("2".to_string())))
            .unwrap();
        assert!(!nav.search_open());
        assert_eq!(nav.detail(), Some(&Detail::Playlist("2".to_string())));
    }

    #[test]
    fn every_event_sequence_keeps_a_valid_screen() {
        // Exhaustive over all two-event sequences from every reachable start
        let starts = [
            Navigator::new(),
            {
                let mut n = Navigator::new();
                n.handle(NavEvent::SplashElapsed).unwrap();
                n
            },
            Navigator::at_main(),
        ];
        for start in starts {
            for a in all_events() {
                for b in all_events() {
                    let mut nav = start.clone();
                    let before = nav.screen();
                    let _ = nav.handle(a.clone());
                    let _ = nav.handle(b.clone());
                    assert!(matches!(
                        nav.screen(),
                        Screen::Splash | Screen::Onboarding | Screen::Main
                    ));
                    // Screens only move forward
                    assert!(nav.screen() as u8 >= before as u8);
                    if nav.screen() != Screen::Main {
                        assert_eq!(nav.active_tab(), None);
                        assert!(!nav.search_open());
                    }
                }
            }
        }
    }

    #[test]
    fn rejected_event_leaves_state_untouched() {
        let mut nav = Navigator::new();
        let before = nav.clone();
        assert!(nav.handle(NavEvent::OpenSearch).is_err());
        assert_eq!(nav, before);
    }
}

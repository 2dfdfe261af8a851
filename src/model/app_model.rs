//! Main application model with state management
//!
//! `AppModel` owns every piece of cross-screen state. Views only read it;
//! the controller is the only writer.

use std::time::{Duration, Instant};

use crate::error::{NavigationError, PlaybackError};
use super::catalog::{Catalog, Track};
use super::navigation::Navigator;
use super::playback::PlaybackSession;
use super::presentation::{Overlay, Presentation};
use super::types::{Detail, LibrarySection, NavEvent, SelectedItem, Tab, UiState};

const NOTICE_TTL: Duration = Duration::from_secs(5);
const STARTER_FAVORITES: usize = 3;
const HOME_CATEGORIES: usize = 4;

pub struct AppModel {
    pub catalog: Catalog,
    pub nav: Navigator,
    pub playback: PlaybackSession,
    pub ui: UiState,
    notice: Option<(String, Instant)>,
    should_quit: bool,
}

impl AppModel {
    pub fn new(catalog: Catalog, skip_intro: bool) -> Self {
        Self {
            catalog,
            nav: if skip_intro { Navigator::at_main() } else { Navigator::new() },
            playback: PlaybackSession::default(),
            ui: UiState::default(),
            notice: None,
            should_quit: false,
        }
    }

    pub fn presentation(&self) -> Presentation {
        Presentation::derive(&self.nav, &self.playback)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_should_quit(&mut self, quit: bool) {
        self.should_quit = quit;
    }

    // ========================================================================
    // Navigation & Playback
    // ========================================================================

    pub fn apply_nav(&mut self, event: NavEvent) -> Result<(), NavigationError> {
        let resets_cursor = matches!(event, NavEvent::SelectTab(_) | NavEvent::OnboardingComplete | NavEvent::OnboardingSkipped);
        let opens_detail = matches!(event, NavEvent::OpenDetail(_));
        let opens_search = matches!(event, NavEvent::OpenSearch);
        self.nav.handle(event)?;
        if resets_cursor {
            self.ui.selected = 0;
        }
        if opens_detail {
            self.ui.detail_selected = 0;
        }
        if opens_search {
            self.ui.search_query.clear();
            self.ui.search_selected = 0;
        }
        Ok(())
    }

    pub fn play(&mut self, track: Track) {
        self.playback.play(track);
    }

    pub fn toggle_play(&mut self) -> Result<bool, PlaybackError> {
        self.playback.toggle_play()
    }

    pub fn close_player(&mut self) {
        self.playback.close_overlay();
    }

    pub fn open_player(&mut self) -> Result<(), PlaybackError> {
        self.playback.open_player()
    }

    pub fn tick(&mut self) -> Result<f64, PlaybackError> {
        self.playback.tick()
    }

    // ========================================================================
    // Notices
    // ========================================================================

    pub fn set_notice(&mut self, message: impl Into<String>) {
        self.notice = Some((message.into(), Instant::now()));
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_ref().map(|(m, _)| m.as_str())
    }

    pub fn auto_clear_old_notices(&mut self) {
        if let Some((_, timestamp)) = &self.notice {
            if timestamp.elapsed() > NOTICE_TTL {
                self.notice = None;
            }
        }
    }

    // ========================================================================
    // List contents
    // ========================================================================

    /// Selectable rows of the active tab, in display order
    pub fn tab_items(&self) -> Vec<SelectedItem> {
        let Some(tab) = self.nav.active_tab() else {
            return Vec::new();
        };
        match tab {
            Tab::Home => {
                let mut items = Vec::new();
                if let Some(featured) = self.catalog.featured() {
                    items.push(SelectedItem::Track(featured.clone()));
                }
                items.extend(
                    self.catalog
                        .categories
                        .iter()
                        .take(HOME_CATEGORIES)
                        .map(|c| SelectedItem::Category { id: c.id.clone() }),
                );
                items.extend(self.catalog.trending.iter().cloned().map(SelectedItem::Track));
                items
            }
            Tab::Explore => self
                .catalog
                .categories
                .iter()
                .map(|c| SelectedItem::Category { id: c.id.clone() })
                .collect(),
            Tab::Library => self.library_items(),
            Tab::Profile => self
                .catalog
                .creators
                .iter()
                .map(|c| SelectedItem::Creator { id: c.id.clone() })
                .collect(),
        }
    }

    fn library_items(&self) -> Vec<SelectedItem> {
        match self.ui.library_section {
            LibrarySection::Favorites => self
                .favorites()
                .into_iter()
                .map(SelectedItem::Track)
                .collect(),
            LibrarySection::Playlists => self
                .catalog
                .categories
                .iter()
                .map(|c| SelectedItem::Category { id: c.id.clone() })
                .collect(),
            LibrarySection::History => self
                .playback
                .history()
                .iter()
                .cloned()
                .map(SelectedItem::Track)
                .collect(),
        }
    }

    /// Liked tracks, or a few starter picks before anything is liked
    pub fn favorites(&self) -> Vec<Track> {
        let liked: Vec<Track> = self
            .catalog
            .all_tracks()
            .filter(|t| self.playback.is_liked(&t.id))
            .cloned()
            .collect();
        if liked.is_empty() {
            self.catalog.trending.iter().take(STARTER_FAVORITES).cloned().collect()
        } else {
            liked
        }
    }

    /// Search results, or trending tracks while the query is empty
    pub fn search_results(&self) -> Vec<Track> {
        if self.ui.search_query.trim().is_empty() {
            self.catalog.trending.clone()
        } else {
            self.catalog.search(&self.ui.search_query)
        }
    }

    pub fn detail_tracks(&self) -> Vec<Track> {
        match self.nav.detail() {
            Some(Detail::Playlist(id)) => self.catalog.tracks_for_category(id),
            Some(Detail::Creator(id)) => self.catalog.tracks_for_creator(id),
            None => Vec::new(),
        }
    }

    // ========================================================================
    // Selection
    // ========================================================================

    fn cursor_and_len(&mut self) -> Option<(&mut usize, usize)> {
        match self.presentation().top() {
            Some(Overlay::Player) => None,
            Some(Overlay::Search) => {
                let len = self.search_results().len();
                Some((&mut self.ui.search_selected, len))
            }
            Some(Overlay::Detail(_)) => {
                let len = self.detail_tracks().len();
                Some((&mut self.ui.detail_selected, len))
            }
            None => {
                let len = self.tab_items().len();
                Some((&mut self.ui.selected, len))
            }
        }
    }

    pub fn move_selection_up(&mut self) {
        if let Some((idx, _)) = self.cursor_and_len() {
            *idx = idx.saturating_sub(1);
        }
    }

    pub fn move_selection_down(&mut self) {
        if let Some((idx, len)) = self.cursor_and_len() {
            if *idx < len.saturating_sub(1) {
                *idx += 1;
            }
        }
    }

    /// The row under the cursor of whatever currently has input
    pub fn get_selected_item(&self) -> Option<SelectedItem> {
        match self.presentation().top() {
            Some(Overlay::Player) => None,
            Some(Overlay::Search) => self
                .search_results()
                .get(self.ui.search_selected)
                .cloned()
                .map(SelectedItem::Track),
            Some(Overlay::Detail(_)) => self
                .detail_tracks()
                .get(self.ui.detail_selected)
                .cloned()
                .map(SelectedItem::Track),
            None => self.tab_items().get(self.ui.selected).cloned(),
        }
    }

    pub fn cycle_library_section(&mut self, forward: bool) {
        self.ui.library_section = if forward {
            self.ui.library_section.next()
        } else {
            self.ui.library_section.prev()
        };
        self.ui.selected = 0;
    }

    // ========================================================================
    // Search input
    // ========================================================================

    pub fn append_to_search(&mut self, c: char) {
        self.ui.search_query.push(c);
        self.ui.search_selected = 0;
    }

    pub fn backspace_search(&mut self) {
        self.ui.search_query.pop();
        self.ui.search_selected = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn main_model() -> AppModel {
        AppModel::new(Catalog::default(), true)
    }

    #[test]
    fn home_lists_featured_categories_then_trending() {
        let model = main_model();
        let items = model.tab_items();
        assert_eq!(items.len(), 1 + 4 + 4);
        assert!(matches!(&items[0], SelectedItem::Track(t) if t.id == "t1"));
        assert_eq!(items[1], SelectedItem::Category { id: "1".to_string() });
    }

    #[test]
    fn no_tab_items_before_main() {
        let model = AppModel::new(Catalog::default(), false);
        assert!(model.tab_items().is_empty());
    }

    #[test]
    fn selection_is_clamped_to_list() {
        let mut model = main_model();
        model.apply_nav(NavEvent::SelectTab(Tab::Profile)).unwrap();
        for _ in 0..10 {
            model.move_selection_down();
        }
        assert_eq!(model.ui.selected, model.catalog.creators.len() - 1);
        for _ in 0..10 {
            model.move_selection_up();
        }
        assert_eq!(model.ui.selected, 0);
    }

    #[test]
    fn tab_switch_resets_cursor() {
        let mut model = main_model();
        model.move_selection_down();
        model.apply_nav(NavEvent::SelectTab(Tab::Explore)).unwrap();
        assert_eq!(model.ui.selected, 0);
    }

    #[test]
    fn selection_follows_top_overlay() {
        let mut model = main_model();
        model.apply_nav(NavEvent::OpenSearch).unwrap();
        model.move_selection_down();
        assert_eq!(model.ui.search_selected, 1);
        assert_eq!(model.ui.selected, 0);
        assert!(matches!(model.get_selected_item(), Some(SelectedItem::Track(t)) if t.id == "t2"));
    }

    #[test]
    fn player_on_top_has_no_selection() {
        let mut model = main_model();
        let track = model.catalog.trending[0].clone();
        model.play(track);
        model.move_selection_down();
        assert_eq!(model.ui.selected, 0);
        assert_eq!(model.get_selected_item(), None);
    }

    #[test]
    fn search_typing_filters_results() {
        let mut model = main_model();
        model.apply_nav(NavEvent::OpenSearch).unwrap();
        assert_eq!(model.search_results().len(), 4);
        for c in "40hz".chars() {
            model.append_to_search(c);
        }
        let ids: Vec<String> = model.search_results().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["t4"]);
        model.backspace_search();
        assert_eq!(model.ui.search_query, "40h");
    }

    #[test]
    fn reopening_search_clears_query() {
        let mut model = main_model();
        model.apply_nav(NavEvent::OpenSearch).unwrap();
        model.append_to_search('x');
        model.apply_nav(NavEvent::CloseSearch).unwrap();
        model.apply_nav(NavEvent::OpenSearch).unwrap();
        assert!(model.ui.search_query.is_empty());
    }

    #[test]
    fn favorites_prefer_liked_tracks() {
        let mut model = main_model();
        assert_eq!(model.favorites().len(), 3);
        let track = model.catalog.trending[3].clone();
        model.play(track);
        model.playback.toggle_like().unwrap();
        let ids: Vec<String> = model.favorites().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["t4"]);
    }

    #[test]
    fn library_history_lists_played_tracks() {
        let mut model = main_model();
        model.apply_nav(NavEvent::SelectTab(Tab::Library)).unwrap();
        model.cycle_library_section(false);
        assert_eq!(model.ui.library_section, LibrarySection::History);
        assert!(model.tab_items().is_empty());

        let track = model.catalog.trending[1].clone();
        model.play(track);
        model.close_player();
        assert_eq!(model.tab_items().len(), 1);
    }

    #[test]
    fn creator_detail_lists_creator_tracks() {
        let mut model = main_model();
        model
            .apply_nav(NavEvent::OpenDetail(Detail::Creator("a1".to_string())))
            .unwrap();
        assert_eq!(model.detail_tracks(), model.catalog.creator_tracks);
    }

    #[test]
    fn creator_detail_only_lists_that_creators_tracks() {
        let mut model = main_model();
        model
            .apply_nav(NavEvent::OpenDetail(Detail::Creator("a2".to_string())))
            .unwrap();
        let artists: Vec<String> = model.detail_tracks().into_iter().map(|t| t.artist).collect();
        assert_eq!(artists, vec!["Nova Rae", "Nova Rae"]);
    }

    #[test]
    fn notice_is_kept_until_ttl() {
        let mut model = main_model();
        model.set_notice("Liked");
        model.auto_clear_old_notices();
        assert_eq!(model.notice(), Some("Liked"));
    }
}

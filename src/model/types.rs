//! Core type definitions for the application

use super::catalog::Track;

/// Top-level screen. Exactly one is current at any time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Splash,
    Onboarding,
    Main,
}

/// Bottom navigation tab, only meaningful while the main shell is showing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Explore,
    Library,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Explore, Tab::Library, Tab::Profile];

    pub fn next(self) -> Self {
        match self {
            Tab::Home => Tab::Explore,
            Tab::Explore => Tab::Library,
            Tab::Library => Tab::Profile,
            Tab::Profile => Tab::Home,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Tab::Home => Tab::Profile,
            Tab::Explore => Tab::Home,
            Tab::Library => Tab::Explore,
            Tab::Profile => Tab::Library,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Explore => "Explore",
            Tab::Library => "Library",
            Tab::Profile => "Profile",
        }
    }

    /// Tab for a digit key ('1'..='4')
    pub fn from_digit(c: char) -> Option<Self> {
        let idx = c.to_digit(10)? as usize;
        idx.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

/// Sub-screen layered over the main shell
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Detail {
    /// Track list for a category, keyed by category id
    Playlist(String),
    /// Creator profile, keyed by profile id
    Creator(String),
}

/// Everything that can move the navigation state machine
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavEvent {
    SplashElapsed,
    OnboardingComplete,
    OnboardingSkipped,
    SelectTab(Tab),
    OpenSearch,
    CloseSearch,
    OpenDetail(Detail),
    CloseDetail,
}

/// Which list the library tab is showing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LibrarySection {
    #[default]
    Favorites,
    Playlists,
    History,
}

impl LibrarySection {
    pub fn next(self) -> Self {
        match self {
            Self::Favorites => Self::Playlists,
            Self::Playlists => Self::History,
            Self::History => Self::Favorites,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Favorites => Self::History,
            Self::Playlists => Self::Favorites,
            Self::History => Self::Playlists,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Favorites => "Favorites",
            Self::Playlists => "Playlists",
            Self::History => "History",
        }
    }
}

pub const ONBOARDING_STEPS: usize = 3;

pub const INTERESTS: [&str; 6] = [
    "Manifest",
    "Confidence",
    "Sleep",
    "Self-Love",
    "Success",
    "Protection",
];

/// Progress through the three onboarding steps
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OnboardingState {
    pub step: usize,
    pub cursor: usize,
    pub interests: Vec<&'static str>,
}

impl OnboardingState {
    pub fn is_last_step(&self) -> bool {
        self.step + 1 >= ONBOARDING_STEPS
    }

    /// Advance one step; returns true when the flow is finished
    pub fn advance(&mut self) -> bool {
        if self.is_last_step() {
            true
        } else {
            self.step += 1;
            self.cursor = 0;
            false
        }
    }

    pub fn toggle_interest(&mut self) {
        let Some(&label) = INTERESTS.get(self.cursor) else {
            return;
        };
        if let Some(pos) = self.interests.iter().position(|i| *i == label) {
            self.interests.remove(pos);
        } else {
            self.interests.push(label);
        }
    }
}

/// Represents a selected item for action handling
#[derive(Clone, Debug, PartialEq)]
pub enum SelectedItem {
    Track(Track),
    Category { id: String },
    Creator { id: String },
}

/// Cursor and input state for the views
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub selected: usize,
    pub library_section: LibrarySection,
    pub search_query: String,
    pub search_selected: usize,
    pub detail_selected: usize,
    pub onboarding: OnboardingState,
    pub show_help: bool,
}

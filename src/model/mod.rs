//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (screens, tabs, navigation events, UI state)
//! - `catalog`: The static track/category/creator catalog
//! - `navigation`: Screen state machine
//! - `playback`: Simulated playback session
//! - `presentation`: Overlay z-order derivation
//! - `app_model`: Main application model with state management methods

mod types;
mod catalog;
mod navigation;
mod playback;
mod presentation;
mod app_model;

pub use types::{
    Detail, LibrarySection, NavEvent, OnboardingState, Screen, SelectedItem, Tab, UiState,
    INTERESTS, ONBOARDING_STEPS,
};

pub use catalog::{Artist, Catalog, Category, CreatorProfile, Track, UserStats};

pub use navigation::{next_screen, Navigator};

pub use playback::{PlaybackSession, INITIAL_PROGRESS, PROGRESS_MAX, PROGRESS_STEP};

pub use presentation::{Overlay, Presentation};

pub use app_model::AppModel;

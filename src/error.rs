//! Domain error types
//!
//! State errors (navigation, playback) are never fatal: the controller logs
//! them and carries on. Catalog errors only happen at startup.

use std::path::PathBuf;

use crate::model::{NavEvent, Screen};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("{event:?} is not a legal event on the {screen:?} screen")]
    InvalidTransition { screen: Screen, event: NavEvent },

    #[error("{to:?} cannot be reached from {from:?}")]
    Unreachable { from: Screen, to: Screen },
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("No track is loaded")]
    NoActiveTrack,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog file {path} is not valid catalog JSON")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Catalog has no tracks")]
    Empty,
}

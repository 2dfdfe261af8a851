//! Sublyme: a terminal client for a catalog of subliminal audio tracks.
//!
//! State lives in [`model::AppModel`], is changed only through
//! [`controller::AppController`], and is drawn by [`view::AppView`].

pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod model;
pub mod view;

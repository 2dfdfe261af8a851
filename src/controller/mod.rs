//! Controller module - Application logic and event handling
//!
//! The controller is the only writer of the [`AppModel`]. It handles user
//! input, timer events, and owns the timer handles.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `playback`: Play/pause/close and the progress ticker
//! - `navigation`: Screen, tab and overlay transitions
//! - `timer`: Cancellable splash and progress timers

mod input;
mod playback;
mod navigation;
mod timer;

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::Mutex;

use crate::config::Config;
use crate::model::AppModel;

pub use timer::{AppEvent, ProgressTicker, SplashTimer};

/// The progress ticker currently held, plus the next generation to hand out
#[derive(Debug, Default)]
pub(crate) struct TickerSlot {
    next_generation: u64,
    active: Option<ProgressTicker>,
}

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
    events: UnboundedSender<AppEvent>,
    ticker: Arc<Mutex<TickerSlot>>,
    splash: Arc<Mutex<Option<SplashTimer>>>,
    tick_period: Duration,
    splash_delay: Duration,
}

impl AppController {
    /// Build a controller and the receiving end of its timer events
    pub fn new(model: Arc<Mutex<AppModel>>, config: &Config) -> (Self, UnboundedReceiver<AppEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let controller = Self {
            model,
            events,
            ticker: Arc::new(Mutex::new(TickerSlot::default())),
            splash: Arc::new(Mutex::new(None)),
            tick_period: config.tick_period,
            splash_delay: config.splash_delay,
        };
        (controller, rx)
    }

    pub fn model(&self) -> Arc<Mutex<AppModel>> {
        self.model.clone()
    }

    pub async fn handle_app_event(&self, event: AppEvent) {
        match event {
            AppEvent::SplashElapsed => self.finish_splash().await,
            AppEvent::Tick { generation } => self.handle_tick(generation).await,
        }
    }

    /// Release every timer. Called on quit.
    pub async fn shutdown(&self) {
        self.stop_ticker().await;
        self.splash.lock().await.take();
        tracing::debug!("Controller timers released");
    }
}

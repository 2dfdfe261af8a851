//! Cancellable timers that feed events back into the UI loop
//!
//! Timers never touch the model. They post [`AppEvent`]s to the loop, which
//! applies them through the controller. Dropping a handle aborts its task.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppEvent {
    /// The splash delay has elapsed
    SplashElapsed,
    /// One progress step from the ticker with this generation
    Tick { generation: u64 },
}

/// Periodic progress ticker. Holding one means playback is advancing.
#[derive(Debug)]
pub struct ProgressTicker {
    generation: u64,
    handle: JoinHandle<()>,
}

impl ProgressTicker {
    pub fn start(generation: u64, period: Duration, events: UnboundedSender<AppEvent>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                if events.send(AppEvent::Tick { generation }).is_err() {
                    tracing::debug!(generation, "Event loop gone, ticker exiting");
                    break;
                }
            }
        });
        tracing::debug!(generation, period_ms = period.as_millis() as u64, "Progress ticker started");
        Self { generation, handle }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::debug!(generation = self.generation, "Progress ticker released");
    }
}

/// One-shot splash timer
#[derive(Debug)]
pub struct SplashTimer {
    handle: JoinHandle<()>,
}

impl SplashTimer {
    pub fn start(delay: Duration, events: UnboundedSender<AppEvent>) -> Self {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = events.send(AppEvent::SplashElapsed);
        });
        Self { handle }
    }
}

impl Drop for SplashTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn ticker_fires_once_per_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _ticker = ProgressTicker::start(7, Duration::from_secs(1), tx);

        tokio::time::sleep(Duration::from_millis(3500)).await;
        let mut ticks = 0;
        while let Ok(event) = rx.try_recv() {
            assert_eq!(event, AppEvent::Tick { generation: 7 });
            ticks += 1;
        }
        assert_eq!(ticks, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_ticker_stops_sending() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let ticker = ProgressTicker::start(1, Duration::from_secs(1), tx);
        tokio::time::sleep(Duration::from_millis(1500)).await;
        drop(ticker);
        while rx.try_recv().is_ok() {}

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn splash_fires_once_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _timer = SplashTimer::start(Duration::from_millis(2500), tx);

        tokio::time::sleep(Duration::from_millis(2400)).await;
        assert!(rx.try_recv().is_err());
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(rx.try_recv(), Ok(AppEvent::SplashElapsed));
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_splash_timer_never_fires() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let timer = SplashTimer::start(Duration::from_millis(2500), tx);
        drop(timer);
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }
}

//! Message Poller
//!
//! Keeps the home view's message list fresh: one fetch on activation, then
//! one per interval until the returned handle is disposed.
//!
//! Fetches are not serialized. Each tick starts its own fetch, so two slow
//! fetches may overlap and whichever finishes last wins.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::api::MessageApi;
use crate::config::PollConfig;
use crate::state::AppState;

/// Periodically refreshes [`HomeState`](crate::state::HomeState) from a node
pub struct Poller {
    api: Arc<dyn MessageApi>,
    state: AppState,
    interval: Duration,
}

impl Poller {
    /// Create a poller; a zero interval is raised to one millisecond
    pub fn new(api: Arc<dyn MessageApi>, state: AppState, interval: Duration) -> Self {
        Self {
            api,
            state,
            interval: interval.max(Duration::from_millis(1)),
        }
    }

    pub fn from_config(api: Arc<dyn MessageApi>, state: AppState, config: &PollConfig) -> Self {
        Self::new(api, state, Duration::from_millis(config.interval_ms))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start polling; the first fetch is issued immediately
    ///
    /// Each call opens an independent session with its own handle. Disposing
    /// one handle never affects another.
    pub fn start(self: Arc<Self>) -> PollHandle {
        let running = Arc::new(AtomicBool::new(true));

        tracing::info!("Polling messages every {:?}", self.interval);

        let poller = self;
        let session = Arc::clone(&running);
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(poller.interval);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;

                if !session.load(Ordering::SeqCst) {
                    break;
                }

                let cycle = Arc::clone(&poller);
                let alive = Arc::clone(&session);
                tokio::spawn(async move { cycle.update(&alive).await });
            }
        });

        PollHandle { task, running }
    }

    /// One fetch cycle; the result is dropped if `alive` was cleared meanwhile
    async fn update(&self, alive: &AtomicBool) {
        let result = self.api.fetch_messages().await;

        // Torn down while the request was in flight
        if !alive.load(Ordering::SeqCst) {
            tracing::debug!("Discarding fetch result after teardown");
            return;
        }

        match result {
            Ok(messages) => {
                tracing::debug!("Fetched {} messages", messages.len());
                self.state.home.write().await.apply_messages(messages);
            }
            Err(e) => {
                tracing::warn!("Failed to fetch messages: {}", e);
                self.state.home.write().await.apply_error(e.to_string());
            }
        }

        self.state.touch();
    }
}

/// Cancels polling when disposed or dropped
pub struct PollHandle {
    task: JoinHandle<()>,
    running: Arc<AtomicBool>,
}

impl PollHandle {
    pub fn is_active(&self) -> bool {
        self.running.load(Ordering::SeqCst) && !self.task.is_finished()
    }

    /// Stop the timer; results of fetches still in flight are discarded
    pub fn dispose(self) {
        // Drop does the work
    }

    fn cancel(&self) {
        if self.running.swap(false, Ordering::SeqCst) {
            tracing::info!("Polling stopped");
        }
        self.task.abort();
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

//! Application State
//!
//! Shared view state written by the poller and the send flow and read by
//! the renderers.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::{watch, RwLock};

use crate::model::Message;
use crate::notify::{Notifications, Toast};

/// Where the home view is in its fetch lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollPhase {
    /// Nothing fetched yet
    Idle,
    /// Showing a list, possibly stale while the next fetch runs
    Displaying,
}

/// Fields of the compose form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeState {
    pub callsign: String,
    pub ip: String,
    pub message: String,
    pub visible: bool,
}

/// State behind the home view
#[derive(Debug, Clone, PartialEq)]
pub struct HomeState {
    /// Last fetched list; `None` until the first fetch succeeds
    pub messages: Option<Vec<Message>>,
    pub loading: bool,
    /// Last fetch failure, cleared by the next success
    pub error: Option<String>,
    pub last_update: Option<DateTime<Utc>>,
    pub compose: ComposeState,
}

impl Default for HomeState {
    fn default() -> Self {
        Self {
            messages: None,
            loading: true,
            error: None,
            last_update: None,
            compose: ComposeState::default(),
        }
    }
}

impl HomeState {
    pub fn phase(&self) -> PollPhase {
        match self.messages {
            Some(_) => PollPhase::Displaying,
            None => PollPhase::Idle,
        }
    }

    /// Replace the message list wholesale after a successful fetch
    pub fn apply_messages(&mut self, messages: Vec<Message>) {
        self.messages = Some(messages);
        self.loading = false;
        self.error = None;
        self.last_update = Some(Utc::now());
    }

    /// Record a failed fetch; the previous list stays on screen
    pub fn apply_error(&mut self, error: String) {
        self.error = Some(error);
    }

    pub fn message_count(&self) -> usize {
        self.messages.as_ref().map(Vec::len).unwrap_or(0)
    }
}

/// Handles to all shared state, cheap to clone
#[derive(Clone)]
pub struct AppState {
    pub home: Arc<RwLock<HomeState>>,
    pub notifications: Arc<RwLock<Notifications>>,
    revision: Arc<watch::Sender<u64>>,
}

impl AppState {
    pub fn new() -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            home: Arc::new(RwLock::new(HomeState::default())),
            notifications: Arc::new(RwLock::new(Notifications::new())),
            revision: Arc::new(revision),
        }
    }

    /// Signal observers that something changed
    pub fn touch(&self) {
        self.revision.send_modify(|rev| *rev += 1);
    }

    /// Receiver that wakes on every [`touch`](Self::touch)
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    /// Copy of the home state plus the toasts currently visible
    pub async fn snapshot(&self) -> (HomeState, Vec<Toast>) {
        let home = self.home.read().await.clone();
        let toasts = self.notifications.write().await.active().to_vec();
        (home, toasts)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Contact;

    fn sample() -> Vec<Message> {
        let mut msg = Message::outgoing(1, Contact::station("K1ABC", "10.0.0.5"), "hi");
        msg.ack = Some(true);
        vec![msg]
    }

    #[test]
    fn test_initial_state() {
        let state = HomeState::default();
        assert!(state.loading);
        assert_eq!(state.phase(), PollPhase::Idle);
        assert_eq!(state.message_count(), 0);
    }

    #[test]
    fn test_apply_messages() {
        let mut state = HomeState::default();
        state.apply_error("API error 500: Server error".to_string());
        state.apply_messages(sample());

        assert!(!state.loading);
        assert!(state.error.is_none());
        assert!(state.last_update.is_some());
        assert_eq!(state.phase(), PollPhase::Displaying);
        assert_eq!(state.messages, Some(sample()));
    }

    #[test]
    fn test_error_keeps_list() {
        let mut state = HomeState::default();
        state.apply_messages(sample());
        state.apply_error("HamGO node unavailable".to_string());

        assert_eq!(state.message_count(), 1);
        assert_eq!(state.error.as_deref(), Some("HamGO node unavailable"));
    }

    #[tokio::test]
    async fn test_touch_wakes_subscribers() {
        let state = AppState::new();
        let mut rx = state.subscribe();

        state.touch();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), 1);
        assert_eq!(state.revision(), 1);
    }
}

//! Send Flow
//!
//! Builds CQ messages from the compose form, tags them with the session's
//! sequence counter and spreads them through the node.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use thiserror::Error;

use crate::api::{ApiError, MessageApi};
use crate::model::{Contact, Message};
use crate::state::{AppState, ComposeState};
use crate::validation::{validate_callsign, validate_ip};

/// Text of the toast shown after a successful send
pub const SENT_NOTICE: &str = "Message sent!";

/// Highest sequence number the node accepts (its REST body decodes a `uint16`)
pub const MAX_WIRE_SEQUENCE: u64 = u16::MAX as u64;

/// Errors from the send flow
#[derive(Error, Debug)]
pub enum SendError {
    /// Form input rejected before anything was sent
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The session counter has passed what the node can decode
    #[error("Sequence numbers exhausted (max {})", MAX_WIRE_SEQUENCE)]
    SequenceExhausted,

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Composes and sends messages for one client session
pub struct Composer {
    api: Arc<dyn MessageApi>,
    state: AppState,
    sequence: AtomicU64,
}

impl Composer {
    pub fn new(api: Arc<dyn MessageApi>, state: AppState) -> Self {
        Self::starting_at(api, state, 0)
    }

    /// Resume numbering from `start`
    pub fn starting_at(api: Arc<dyn MessageApi>, state: AppState, start: u64) -> Self {
        Self {
            api,
            state,
            sequence: AtomicU64::new(start),
        }
    }

    /// Sequence number the next message will carry
    pub fn next_sequence(&self) -> u64 {
        self.sequence.load(Ordering::SeqCst)
    }

    /// Show the compose form
    pub async fn open(&self) {
        self.state.home.write().await.compose.visible = true;
        self.state.touch();
    }

    /// Edit the compose form fields
    pub async fn edit(&self, f: impl FnOnce(&mut ComposeState)) {
        f(&mut self.state.home.write().await.compose);
        self.state.touch();
    }

    /// Send whatever is currently in the compose form
    pub async fn send_form(&self) -> Result<Message, SendError> {
        let form = self.state.home.read().await.compose.clone();
        self.send(&form.callsign, &form.ip, &form.message).await
    }

    /// Build, number and spread a CQ message
    ///
    /// The form is hidden before the request resolves. Input errors, and a
    /// counter already past [`MAX_WIRE_SEQUENCE`], are reported without
    /// consuming a sequence number.
    pub async fn send(&self, callsign: &str, ip: &str, text: &str) -> Result<Message, SendError> {
        validate_callsign(callsign).map_err(SendError::Validation)?;
        validate_ip(ip).map_err(SendError::Validation)?;

        let sequence = self
            .sequence
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| {
                (n <= MAX_WIRE_SEQUENCE).then_some(n + 1)
            })
            .map_err(|_| SendError::SequenceExhausted)?;
        let msg = Message::outgoing(sequence, Contact::station(callsign, ip), text);

        tracing::info!(sequence, callsign, "sending message");

        self.state.home.write().await.compose.visible = false;
        self.state.touch();

        match self.api.submit_message(&msg).await {
            Ok(()) => {
                self.state.notifications.write().await.show_success(SENT_NOTICE);
                self.state.touch();
                Ok(msg)
            }
            Err(e) => {
                tracing::warn!(sequence, "Failed to send message: {}", e);
                self.state
                    .notifications
                    .write()
                    .await
                    .show_error(&format!("Failed to send message: {}", e));
                self.state.touch();
                Err(SendError::Api(e))
            }
        }
    }
}

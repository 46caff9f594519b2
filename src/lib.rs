//! # HamGO Client
//!
//! Client for a HamGO node: shows the node's cached CQ messages, refreshes
//! them on a fixed interval and spreads new CQ messages.
//!
//! ## Modules
//!
//! - [`api`]: REST client for the node and the [`MessageApi`] seam
//! - [`poller`]: fixed-interval refresh of the message list
//! - [`compose`]: send flow with the session sequence counter
//! - [`state`]: shared view state
//! - [`widgets`]: text renderers (nav, loading, progress, home)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hamgo_client::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let api: Arc<dyn MessageApi> = Arc::new(ApiClient::new(&config.api)?);
//!     let state = AppState::new();
//!
//!     // Fetch now and every five seconds
//!     let poller = Arc::new(Poller::from_config(Arc::clone(&api), state.clone(), &config.poll));
//!     let handle = poller.start();
//!
//!     // Spread a CQ
//!     let composer = Composer::new(api, state.clone());
//!     composer.send("K1ABC", "10.0.0.5", "hello").await?;
//!
//!     let (home, toasts) = state.snapshot().await;
//!     println!("{}", HomeView::from_config(&config).render(&home, &toasts));
//!
//!     handle.dispose();
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod compose;
pub mod config;
pub mod logging;
pub mod model;
pub mod notify;
pub mod poller;
pub mod state;
pub mod validation;
pub mod widgets;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{ApiClient, ApiError, ApiResult, MessageApi};
pub use compose::{Composer, SendError};
pub use config::{Config, ConfigError, Environment};
pub use model::{Contact, ContactType, Message};
pub use notify::{Notifications, Toast, ToastVariant};
pub use poller::{PollHandle, Poller};
pub use state::{AppState, ComposeState, HomeState, PollPhase};
pub use widgets::{HomeView, LoadingIndicator, Progress, Severity, TopNav};

//! HamGO Node API
//!
//! Client for the node's REST API and the [`MessageApi`] seam the
//! controllers are written against.
//!
//! ## Endpoints
//!
//! - `GET  {endpoint}/cache[?max=N]` - cached messages, JSON array
//! - `POST {endpoint}/spread/cq` - spread a CQ message, JSON body

mod client;
mod error;

pub use client::{resolve_endpoint, ApiClient};
pub use error::{ApiError, ApiResult, GENERIC_SERVER_ERROR};

use async_trait::async_trait;

use crate::model::Message;

/// Operations the controllers need from a HamGO node
#[async_trait]
pub trait MessageApi: Send + Sync {
    /// Fetch the current message list
    async fn fetch_messages(&self) -> ApiResult<Vec<Message>>;

    /// Spread a message; the node's response body is ignored
    async fn submit_message(&self, msg: &Message) -> ApiResult<()>;
}

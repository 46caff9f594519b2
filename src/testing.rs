//! In-memory node used by controller tests

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;

use crate::api::{ApiError, ApiResult, MessageApi};
use crate::model::{Contact, Message};

/// Scriptable stand-in for a HamGO node
#[derive(Default)]
pub struct FakeNode {
    /// Queued fetch outcomes; the cache is served once the queue is empty
    pub responses: Mutex<VecDeque<ApiResult<Vec<Message>>>>,
    pub cache: Mutex<Vec<Message>>,
    pub fetch_times: Mutex<Vec<Instant>>,
    pub submitted: Mutex<Vec<Message>>,
    pub fetch_delay: Option<Duration>,
    pub fail_submit: bool,
}

impl FakeNode {
    pub fn with_cache(cache: Vec<Message>) -> Self {
        Self {
            cache: Mutex::new(cache),
            ..Default::default()
        }
    }

    pub fn queue(&self, response: ApiResult<Vec<Message>>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_times.lock().unwrap().len()
    }
}

pub fn sample_message() -> Message {
    let mut msg = Message::outgoing(1, Contact::station("K1ABC", "10.0.0.5"), "hi");
    msg.ack = Some(true);
    msg
}

#[async_trait]
impl MessageApi for FakeNode {
    async fn fetch_messages(&self) -> ApiResult<Vec<Message>> {
        self.fetch_times.lock().unwrap().push(Instant::now());

        if let Some(delay) = self.fetch_delay {
            tokio::time::sleep(delay).await;
        }

        let queued = self.responses.lock().unwrap().pop_front();
        match queued {
            Some(response) => response,
            None => Ok(self.cache.lock().unwrap().clone()),
        }
    }

    async fn submit_message(&self, msg: &Message) -> ApiResult<()> {
        if self.fail_submit {
            return Err(ApiError::status(500, String::new()));
        }
        self.submitted.lock().unwrap().push(msg.clone());
        Ok(())
    }
}

//! Toast Notifications
//!
//! Transient success and error messages with automatic expiry.

use std::time::Duration;
use tokio::time::Instant;

/// How long a success toast stays visible
pub const SUCCESS_TTL: Duration = Duration::from_millis(3000);

/// How long an error toast stays visible
pub const ERROR_TTL: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Error,
}

impl ToastVariant {
    pub fn icon(self) -> &'static str {
        match self {
            ToastVariant::Success => "✓",
            ToastVariant::Error => "✕",
        }
    }

    fn ttl(self) -> Duration {
        match self {
            ToastVariant::Success => SUCCESS_TTL,
            ToastVariant::Error => ERROR_TTL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub variant: ToastVariant,
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn render(&self) -> String {
        format!("{} {}", self.variant.icon(), self.message)
    }
}

/// Queue of toasts currently on screen
#[derive(Debug, Default)]
pub struct Notifications {
    toasts: Vec<Toast>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a success message (auto-clears after [`SUCCESS_TTL`])
    pub fn show_success(&mut self, message: &str) {
        self.push(ToastVariant::Success, message);
    }

    /// Show an error message (auto-clears after [`ERROR_TTL`])
    pub fn show_error(&mut self, message: &str) {
        self.push(ToastVariant::Error, message);
    }

    fn push(&mut self, variant: ToastVariant, message: &str) {
        tracing::debug!(?variant, message, "toast");
        self.toasts.push(Toast {
            variant,
            message: message.to_string(),
            expires_at: Instant::now() + variant.ttl(),
        });
    }

    /// Drop expired toasts and return the ones still visible
    pub fn active(&mut self) -> &[Toast] {
        let now = Instant::now();
        self.toasts.retain(|t| t.expires_at > now);
        &self.toasts
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }
}

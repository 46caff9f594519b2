//! Home View
//!
//! Message list with header, loading state, compose form and toasts.

use crate::config::Config;
use crate::notify::Toast;
use crate::state::HomeState;

use super::loading::LoadingIndicator;
use super::nav::{default_routes, TopNav};
use super::progress::Progress;

const RULE_WIDTH: usize = 48;
const GAUGE_WIDTH: usize = 20;

/// Renders a [`HomeState`] snapshot as text
#[derive(Debug, Clone)]
pub struct HomeView {
    nav: TopNav,
    /// Shows a cache gauge when the fetch is limited
    cache_limit: Option<usize>,
}

impl HomeView {
    pub fn new(nav: TopNav, cache_limit: Option<usize>) -> Self {
        Self { nav, cache_limit }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            TopNav::new(&config.app).with_routes(default_routes()),
            config.poll.max_messages,
        )
    }

    pub fn render(&self, home: &HomeState, toasts: &[Toast]) -> String {
        let mut lines = vec![self.nav.render("/"), "=".repeat(RULE_WIDTH)];

        let indicator = LoadingIndicator::new(home.loading, home.error.clone());
        if let Some(line) = indicator.render() {
            lines.push(line);
        }

        if let Some(limit) = self.cache_limit {
            let gauge = Progress::new(0.0, limit as f64, home.message_count() as f64);
            lines.push(format!("Cache {}", gauge.render(GAUGE_WIDTH)));
        }

        match &home.messages {
            Some(messages) if messages.is_empty() => lines.push("No messages yet".to_string()),
            Some(messages) => lines.extend(messages.iter().map(|m| m.to_string())),
            None => {}
        }

        if home.compose.visible {
            lines.push("-".repeat(RULE_WIDTH));
            lines.push(format!("Callsign: {}", home.compose.callsign));
            lines.push(format!("IP:       {}", home.compose.ip));
            lines.push(format!("Message:  {}", home.compose.message));
        }

        lines.push("-".repeat(RULE_WIDTH));
        lines.push(
            home.last_update
                .map(|dt| format!("Last update: {}", dt.format("%H:%M:%S")))
                .unwrap_or_else(|| "Not updated".to_string()),
        );

        lines.extend(toasts.iter().map(Toast::render));

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::model::{Contact, Message};
    use crate::notify::Notifications;
    use chrono::TimeZone;

    fn view() -> HomeView {
        HomeView::new(TopNav::new(&AppConfig::default()), None)
    }

    fn displaying() -> HomeState {
        let mut msg = Message::outgoing(1, Contact::station("K1ABC", "10.0.0.5"), "hi");
        msg.ack = Some(true);

        let mut state = HomeState::default();
        state.apply_messages(vec![msg]);
        state.last_update = Some(chrono::Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 5).unwrap());
        state
    }

    #[test]
    fn test_idle() {
        let out = view().render(&HomeState::default(), &[]);
        assert_eq!(
            out,
            format!(
                "HamGO\n{}\nLoading...\n{}\nNot updated",
                "=".repeat(48),
                "-".repeat(48)
            )
        );
    }

    #[test]
    fn test_messages() {
        let out = view().render(&displaying(), &[]);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[2], "#1 K1ABC [10.0.0.5] hi (ack)");
        assert_eq!(lines.last(), Some(&"Last update: 12:30:05"));
        assert!(!out.contains("Loading"));
    }

    #[test]
    fn test_same_state_renders_identically() {
        let state = displaying();
        let view = view();
        assert_eq!(view.render(&state, &[]), view.render(&state, &[]));
    }

    #[test]
    fn test_empty_list() {
        let mut state = HomeState::default();
        state.apply_messages(vec![]);
        assert!(view().render(&state, &[]).contains("No messages yet"));
    }

    #[test]
    fn test_error_shown() {
        let mut state = displaying();
        state.apply_error("HamGO node unavailable".to_string());

        let out = view().render(&state, &[]);
        assert!(out.contains("✕ HamGO node unavailable"));
        assert!(out.contains("#1 K1ABC"));
    }

    #[test]
    fn test_compose_and_toasts() {
        let mut state = displaying();
        state.compose.visible = true;
        state.compose.callsign = "OE1VQS".to_string();

        let mut notes = Notifications::new();
        notes.show_success("Message sent!");

        let out = view().render(&state, &notes.active().to_vec());
        assert!(out.contains("Callsign: OE1VQS"));
        assert!(out.ends_with("✓ Message sent!"));
    }

    #[test]
    fn test_cache_gauge() {
        let view = HomeView::new(TopNav::new(&AppConfig::default()), Some(2));
        let out = view.render(&displaying(), &[]);
        assert!(out.contains("Cache [##########----------]  50% success"));
    }
}

//! Navigation Bar
//!
//! Header line with the application title and route links.

use crate::config::AppConfig;

/// Individual navigation entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub path: String,
    pub label: String,
}

impl NavEntry {
    pub fn new(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
        }
    }
}

/// Top navigation bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopNav {
    pub title: String,
    pub routes: Option<Vec<NavEntry>>,
}

impl TopNav {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            title: config.title.clone(),
            routes: None,
        }
    }

    pub fn with_routes(mut self, routes: Vec<NavEntry>) -> Self {
        self.routes = Some(routes);
        self
    }

    /// Render the header; `active` marks the current path
    pub fn render(&self, active: &str) -> String {
        let mut line = self.title.clone();

        if let Some(routes) = &self.routes {
            for entry in routes {
                if entry.path == active {
                    line.push_str(&format!("  [{}]", entry.label));
                } else {
                    line.push_str(&format!("  {}", entry.label));
                }
            }
        }

        line
    }
}

/// Routes of the client shell
pub fn default_routes() -> Vec<NavEntry> {
    vec![NavEntry::new("/", "Home")]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_from_config() {
        let nav = TopNav::new(&AppConfig::default());
        assert_eq!(nav.render("/"), "HamGO");
    }

    #[test]
    fn test_routes() {
        let nav = TopNav::new(&AppConfig {
            title: "Shack".to_string(),
        })
        .with_routes(vec![NavEntry::new("/", "Home"), NavEntry::new("/log", "Log")]);

        assert_eq!(nav.render("/"), "Shack  [Home]  Log");
        assert_eq!(nav.render("/log"), "Shack  Home  [Log]");
    }
}

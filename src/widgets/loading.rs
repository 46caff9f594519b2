//! Loading Indicator
//!
//! Spinner while the first fetch is pending, error text when it failed.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadingIndicator {
    pub loading: bool,
    pub error: Option<String>,
}

/// What the indicator shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingView<'a> {
    Hidden,
    Spinner,
    Error(&'a str),
}

impl LoadingIndicator {
    pub fn new(loading: bool, error: Option<String>) -> Self {
        Self { loading, error }
    }

    /// An error wins over the spinner
    pub fn view(&self) -> LoadingView<'_> {
        match (&self.error, self.loading) {
            (Some(error), _) => LoadingView::Error(error),
            (None, true) => LoadingView::Spinner,
            (None, false) => LoadingView::Hidden,
        }
    }

    pub fn render(&self) -> Option<String> {
        match self.view() {
            LoadingView::Hidden => None,
            LoadingView::Spinner => Some("Loading...".to_string()),
            LoadingView::Error(error) => Some(format!("✕ {}", error)),
        }
    }
}

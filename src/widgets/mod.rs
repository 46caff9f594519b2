//! Widgets
//!
//! Presentational pieces of the client. Each takes plain inputs and renders
//! text; none of them do I/O.

pub mod home;
pub mod loading;
pub mod nav;
pub mod progress;

pub use home::HomeView;
pub use loading::{LoadingIndicator, LoadingView};
pub use nav::{default_routes, NavEntry, TopNav};
pub use progress::{Progress, Severity};

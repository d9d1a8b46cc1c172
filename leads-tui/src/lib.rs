//! Leads tracking dashboard: terminal UI over the `leads-core` model.
//!
//! Layout:
//! - Sidebar with primary and utility navigation
//! - Header with the page title
//! - Sales / Leads tabs; Leads mounts the funnel, sources, tracking chart
//!   and summary cards
//! - Status bar with key hints and the last status message
//!
//! Keyboard focus stands in for pointer hover and Enter/Space for clicks.

pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod theme;
pub mod ui;

pub use app::{AppState, Focus, MenuTarget, Overlay};
pub use config::{ConfigError, DashboardConfig};
pub use input::handle_key;

#[cfg(test)]
mod test_helpers;

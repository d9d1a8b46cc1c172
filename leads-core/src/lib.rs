//! Leads Core: the dashboard's data model and per-widget state.
//!
//! Everything here is fixed, in-memory display data plus the small state
//! machines each widget owns:
//! - Sidebar navigation with a single highlighted item
//! - Page shell switching between the Leads and Sales tabs
//! - Funnel stages and the gap-free proportional stage bar
//! - Lead sources and donut slice geometry
//! - Closed won/lost series with its time-range derivation
//! - Lost reasons and other-data summary metrics

pub mod funnel;
pub mod nav;
pub mod range;
pub mod shell;
pub mod sources;
pub mod stats;
pub mod summary;
pub mod swatch;
pub mod tracking;

pub use nav::{NavGroup, NavIcon, NavItem, NavigationState};
pub use range::TimeRange;
pub use shell::{LeadsSection, PageContent, PageShell, Tab};
pub use sources::SourceMetric;
pub use stats::StatsGridState;
pub use swatch::Swatch;
pub use tracking::{ChartDataPoint, LeadTrackingState};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: widget state can move between threads.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<PageShell>();
        require_sync::<PageShell>();
        require_send::<NavigationState>();
        require_sync::<NavigationState>();
        require_send::<LeadTrackingState>();
        require_sync::<LeadTrackingState>();
        require_send::<StatsGridState>();
        require_sync::<StatsGridState>();
    }
}

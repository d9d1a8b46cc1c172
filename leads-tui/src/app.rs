//! Application state: single-owner, main-thread only.
//!
//! Each widget's selection lives in its own model type from `leads-core`;
//! this struct only adds the keyboard layer (focus, cursors, overlays).

use tracing::debug;

use leads_core::funnel::FUNNEL_STAGES;
use leads_core::nav::{nav_entries, nav_len, NavGroup};
use leads_core::sources::SOURCES;
use leads_core::summary::OTHER_DATA_METRICS;
use leads_core::{
    LeadTrackingState, NavigationState, PageShell, SourceMetric, StatsGridState, Tab, TimeRange,
};

/// Keyboard focus stops, in ring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Tabs,
    Funnel,
    Sources,
    Tracking,
    Summary,
}

impl Focus {
    const COUNT: usize = 6;

    pub fn index(self) -> usize {
        match self {
            Focus::Sidebar => 0,
            Focus::Tabs => 1,
            Focus::Funnel => 2,
            Focus::Sources => 3,
            Focus::Tracking => 4,
            Focus::Summary => 5,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Focus::Sidebar),
            1 => Some(Focus::Tabs),
            2 => Some(Focus::Funnel),
            3 => Some(Focus::Sources),
            4 => Some(Focus::Tracking),
            5 => Some(Focus::Summary),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Focus::Sidebar => "Navigation",
            Focus::Tabs => "Tabs",
            Focus::Funnel => "Funnel count",
            Focus::Sources => "Sources",
            Focus::Tracking => "Leads tracking",
            Focus::Summary => "Other data",
        }
    }

    /// Stops that only exist while the Leads widgets are mounted.
    pub fn is_widget(self) -> bool {
        !matches!(self, Focus::Sidebar | Focus::Tabs)
    }

    fn step(self, forward: bool) -> Focus {
        let offset = if forward { 1 } else { Self::COUNT - 1 };
        Focus::from_index((self.index() + offset) % Self::COUNT).unwrap_or(Focus::Sidebar)
    }
}

/// Which selector a time-range menu writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTarget {
    /// Shared selector of the funnel and sources cards.
    StatsGrid,
    Tracking,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    TimeRangeMenu { target: MenuTarget, cursor: usize },
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Top-level application state.
pub struct AppState {
    pub running: bool,
    pub focus: Focus,
    pub overlay: Overlay,

    // Page shell and navigation
    pub shell: PageShell,
    pub nav: NavigationState,
    pub nav_cursor: usize,
    pub tab_cursor: usize,

    // Widget states
    pub stats: StatsGridState,
    pub funnel_cursor: usize,
    pub source_cursor: usize,
    pub tracking: LeadTrackingState,
    pub summary_cursor: usize,

    pub status_message: Option<(String, StatusLevel)>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Tab::default())
    }
}

impl AppState {
    pub fn new(start_tab: Tab) -> Self {
        let nav = NavigationState::default();
        Self {
            running: true,
            focus: Focus::Sidebar,
            overlay: Overlay::None,
            shell: PageShell::new(start_tab),
            nav_cursor: nav.highlighted_index(),
            nav,
            tab_cursor: start_tab.index(),
            stats: StatsGridState::default(),
            funnel_cursor: 0,
            source_cursor: 0,
            tracking: LeadTrackingState::default(),
            summary_cursor: 0,
            status_message: None,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Move focus around the ring, skipping widgets that are not mounted.
    pub fn focus_next(&mut self) {
        self.cycle_focus(true);
    }

    pub fn focus_prev(&mut self) {
        self.cycle_focus(false);
    }

    fn cycle_focus(&mut self, forward: bool) {
        let mut next = self.focus.step(forward);
        while next.is_widget() && !self.widgets_mounted() {
            next = next.step(forward);
        }
        self.focus = next;
    }

    pub fn widgets_mounted(&self) -> bool {
        self.shell.active_tab() == Tab::Leads
    }

    /// Activate a tab. Focus on an unmounted widget falls back to the tab strip.
    pub fn select_tab(&mut self, tab: Tab) {
        if self.shell.select(tab) {
            debug!(tab = tab.label(), "tab activated");
        }
        self.tab_cursor = tab.index();
        if self.focus.is_widget() && !self.widgets_mounted() {
            self.focus = Focus::Tabs;
        }
        if !self.widgets_mounted() {
            if let Overlay::TimeRangeMenu { .. } = self.overlay {
                self.overlay = Overlay::None;
            }
        }
    }

    /// Highlight the navigation item under the sidebar cursor. Utility
    /// items cannot take the highlight.
    pub fn select_nav_at_cursor(&mut self) {
        if let Some(name) = self.nav.select_index(self.nav_cursor) {
            debug!(item = name, "navigation item highlighted");
            self.set_status(format!("{name} highlighted"));
        } else if let Some((NavGroup::Utility, item)) = nav_entries().nth(self.nav_cursor) {
            self.set_warning(format!("{} is not selectable", item.name));
        }
    }

    pub fn move_nav_cursor(&mut self, delta: isize) {
        self.nav_cursor = step_cursor(self.nav_cursor, delta, nav_len());
    }

    pub fn move_tab_cursor(&mut self, delta: isize) {
        self.tab_cursor = step_cursor(self.tab_cursor, delta, Tab::ALL.len());
    }

    pub fn move_funnel_cursor(&mut self, delta: isize) {
        self.funnel_cursor = step_cursor(self.funnel_cursor, delta, FUNNEL_STAGES.len());
    }

    pub fn move_source_cursor(&mut self, delta: isize) {
        self.source_cursor = step_cursor(self.source_cursor, delta, SOURCES.len());
    }

    pub fn move_month_cursor(&mut self, delta: isize) {
        self.tracking.move_month_cursor(delta);
    }

    pub fn move_summary_cursor(&mut self, delta: isize) {
        self.summary_cursor = step_cursor(self.summary_cursor, delta, OTHER_DATA_METRICS.len());
    }

    pub fn time_range_of(&self, target: MenuTarget) -> TimeRange {
        match target {
            MenuTarget::StatsGrid => self.stats.time_range,
            MenuTarget::Tracking => self.tracking.time_range(),
        }
    }

    /// Open a dropdown with its cursor on the current selection.
    pub fn open_time_range_menu(&mut self, target: MenuTarget) {
        let cursor = self.time_range_of(target).index();
        self.overlay = Overlay::TimeRangeMenu { target, cursor };
    }

    pub fn apply_time_range(&mut self, target: MenuTarget, range: TimeRange) {
        match target {
            MenuTarget::StatsGrid => self.stats.set_time_range(range),
            MenuTarget::Tracking => self.tracking.set_time_range(range),
        }
        debug!(?target, range = range.label(), "time range selected");
        self.set_status(format!("Showing {}", range.label()));
    }

    pub fn set_source_metric(&mut self, metric: SourceMetric) {
        if self.stats.source_metric != metric {
            self.stats.set_source_metric(metric);
            debug!(metric = metric.label(), "source toggle changed");
        }
    }

    /// Tooltip for the focused row, if it carries one.
    pub fn focused_tooltip(&self) -> Option<String> {
        if !self.widgets_mounted() || self.overlay != Overlay::None {
            return None;
        }
        match self.focus {
            Focus::Funnel => FUNNEL_STAGES.get(self.funnel_cursor)?.tooltip.map(str::to_string),
            Focus::Sources => SOURCES.get(self.source_cursor).map(|s| s.tooltip()),
            Focus::Tracking => self.tracking.focused_point().map(|p| p.tooltip()),
            Focus::Summary => OTHER_DATA_METRICS
                .get(self.summary_cursor)?
                .tooltip()
                .map(str::to_string),
            Focus::Sidebar | Focus::Tabs => None,
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}

/// Move a cursor by `delta`, clamped to `0..len`.
fn step_cursor(cursor: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    cursor.saturating_add_signed(delta).min(len - 1)
}

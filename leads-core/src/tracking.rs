//! Leads tracking card: monthly closed won/lost series and its time range.

use crate::range::TimeRange;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartDataPoint {
    pub month: &'static str,
    pub closed_won: f64,
    pub closed_lost: f64,
}

impl ChartDataPoint {
    /// Hover text for one month, e.g. `June: Closed won 65.6 / Closed lost 5.5`.
    pub fn tooltip(&self) -> String {
        format!(
            "{}: {CLOSED_WON_LABEL} {} / {CLOSED_LOST_LABEL} {}",
            self.month,
            format_count(self.closed_won),
            format_count(self.closed_lost)
        )
    }
}

/// Whole numbers print bare, scaled values keep one decimal.
pub fn format_count(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

const fn point(month: &'static str, closed_won: f64, closed_lost: f64) -> ChartDataPoint {
    ChartDataPoint {
        month,
        closed_won,
        closed_lost,
    }
}

pub static INITIAL_CHART_DATA: [ChartDataPoint; 6] = [
    point("March", 65.0, 80.0),
    point("April", 50.0, 40.0),
    point("May", 60.0, 38.0),
    point("June", 82.0, 5.0),
    point("July", 70.0, 20.0),
    point("August", 95.0, 55.0),
];

/// Headline figures beside the title. Not derived from the series.
pub const TOTAL_CLOSED: u32 = 680;
pub const TOTAL_LOST: u32 = 70;

pub const CLOSED_WON_LABEL: &str = "Closed won";
pub const CLOSED_LOST_LABEL: &str = "Closed lost";

/// Scale factors applied to the trailing quarter view.
pub const QUARTER_WON_FACTOR: f64 = 0.8;
pub const QUARTER_LOST_FACTOR: f64 = 1.1;

/// Headroom above the tallest point on the value axis.
pub const Y_HEADROOM: f64 = 10.0;

/// Display series for a time range.
///
/// Only the three-month view differs: it keeps the last three months and
/// scales them. Every other range shows the full fixed series.
pub fn derive_series(range: TimeRange) -> Vec<ChartDataPoint> {
    match range {
        TimeRange::Last3Months => {
            let start = INITIAL_CHART_DATA.len().saturating_sub(3);
            INITIAL_CHART_DATA[start..]
                .iter()
                .map(|p| ChartDataPoint {
                    closed_won: p.closed_won * QUARTER_WON_FACTOR,
                    closed_lost: p.closed_lost * QUARTER_LOST_FACTOR,
                    ..*p
                })
                .collect()
        }
        _ => INITIAL_CHART_DATA.to_vec(),
    }
}

/// Selected range, the series derived from it, and the focused month.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadTrackingState {
    time_range: TimeRange,
    series: Vec<ChartDataPoint>,
    month_cursor: usize,
}

impl Default for LeadTrackingState {
    fn default() -> Self {
        Self::new(TimeRange::default())
    }
}

impl LeadTrackingState {
    pub fn new(time_range: TimeRange) -> Self {
        Self {
            time_range,
            series: derive_series(time_range),
            month_cursor: 0,
        }
    }

    pub fn time_range(&self) -> TimeRange {
        self.time_range
    }

    pub fn series(&self) -> &[ChartDataPoint] {
        &self.series
    }

    /// Change the range and recompute the series. The month cursor stays
    /// inside the new series.
    pub fn set_time_range(&mut self, range: TimeRange) {
        self.time_range = range;
        self.series = derive_series(range);
        self.month_cursor = self.month_cursor.min(self.series.len().saturating_sub(1));
    }

    pub fn month_cursor(&self) -> usize {
        self.month_cursor
    }

    /// Move the month cursor by `delta`, clamped to the series.
    pub fn move_month_cursor(&mut self, delta: isize) {
        let last = self.series.len().saturating_sub(1);
        self.month_cursor = self.month_cursor.saturating_add_signed(delta).min(last);
    }

    /// Point under the month cursor.
    pub fn focused_point(&self) -> Option<&ChartDataPoint> {
        self.series.get(self.month_cursor)
    }

    /// Upper bound of the value axis: tallest point plus headroom.
    pub fn y_upper_bound(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|p| [p.closed_won, p.closed_lost])
            .fold(0.0, f64::max)
            + Y_HEADROOM
    }

    pub fn months(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.series.iter().map(|p| p.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn default_shows_six_months_from_march() {
        let state = LeadTrackingState::default();
        assert_eq!(state.time_range(), TimeRange::Last6Months);
        assert_eq!(state.series().len(), 6);
        assert_eq!(state.months().next(), Some("March"));
        assert_eq!(state.series(), &INITIAL_CHART_DATA[..]);
    }

    #[test]
    fn three_months_slices_and_scales() {
        let mut state = LeadTrackingState::default();
        state.set_time_range(TimeRange::Last3Months);
        let series = state.series();
        assert_eq!(series.len(), 3);
        let months: Vec<_> = state.months().collect();
        assert_eq!(months, ["June", "July", "August"]);
        assert!(approx(series[0].closed_won, 65.6));
        assert!(approx(series[0].closed_lost, 5.5));
        assert!(approx(series[2].closed_won, 76.0));
        assert!(approx(series[2].closed_lost, 60.5));
    }

    #[test]
    fn other_ranges_restore_full_series() {
        let mut state = LeadTrackingState::new(TimeRange::Last3Months);
        for range in [TimeRange::Last30Days, TimeRange::Last6Months, TimeRange::LastYear] {
            state.set_time_range(range);
            assert_eq!(state.series(), &INITIAL_CHART_DATA[..]);
            state.set_time_range(TimeRange::Last3Months);
        }
    }

    #[test]
    fn y_axis_has_headroom() {
        let mut state = LeadTrackingState::default();
        assert!(approx(state.y_upper_bound(), 105.0));
        state.set_time_range(TimeRange::Last3Months);
        assert!(approx(state.y_upper_bound(), 86.0));
    }

    #[test]
    fn month_cursor_clamps_to_series() {
        let mut state = LeadTrackingState::default();
        state.move_month_cursor(-1);
        assert_eq!(state.month_cursor(), 0);
        state.move_month_cursor(10);
        assert_eq!(state.month_cursor(), 5);
        assert_eq!(state.focused_point().map(|p| p.month), Some("August"));

        state.set_time_range(TimeRange::Last3Months);
        assert_eq!(state.month_cursor(), 2);
        assert_eq!(state.focused_point().map(|p| p.month), Some("August"));
    }

    #[test]
    fn tooltip_reads_derived_values() {
        let mut state = LeadTrackingState::new(TimeRange::Last3Months);
        assert_eq!(
            state.focused_point().map(ChartDataPoint::tooltip).as_deref(),
            Some("June: Closed won 65.6 / Closed lost 5.5")
        );
        assert_eq!(
            INITIAL_CHART_DATA[0].tooltip(),
            "March: Closed won 65 / Closed lost 80"
        );
        // 20 × 1.1 carries float noise.
        assert_eq!(format_count(20.0 * QUARTER_LOST_FACTOR), "22");
    }

    #[test]
    fn totals_are_independent_literals() {
        let won: f64 = INITIAL_CHART_DATA.iter().map(|p| p.closed_won).sum();
        assert!(!approx(won, f64::from(TOTAL_CLOSED)));
        assert_eq!(TOTAL_LOST, 70);
    }
}

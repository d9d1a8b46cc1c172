//! Stats grid state: the funnel and sources cards share one selector set.
//!
//! Neither selection feeds back into the displayed data; both are kept as
//! placeholders for a range-aware backend.

use crate::range::TimeRange;
use crate::sources::SourceMetric;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsGridState {
    pub time_range: TimeRange,
    pub source_metric: SourceMetric,
}

impl StatsGridState {
    pub fn set_time_range(&mut self, range: TimeRange) {
        self.time_range = range;
    }

    pub fn set_source_metric(&mut self, metric: SourceMetric) {
        self.source_metric = metric;
    }
}

//! Time-range selector shared by the card dropdowns.

use serde::{Deserialize, Serialize};

/// Options offered by every time-range dropdown, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "last 30 days")]
    Last30Days,
    #[serde(rename = "last 3 months")]
    Last3Months,
    #[default]
    #[serde(rename = "last 6 months")]
    Last6Months,
    #[serde(rename = "last year")]
    LastYear,
}

impl TimeRange {
    pub const ALL: [TimeRange; 4] = [
        TimeRange::Last30Days,
        TimeRange::Last3Months,
        TimeRange::Last6Months,
        TimeRange::LastYear,
    ];

    /// Label shown on the dropdown trigger button.
    pub fn label(self) -> &'static str {
        match self {
            TimeRange::Last30Days => "last 30 days",
            TimeRange::Last3Months => "last 3 months",
            TimeRange::Last6Months => "last 6 months",
            TimeRange::LastYear => "last year",
        }
    }

    /// Label shown on the dropdown menu entry.
    pub fn menu_label(self) -> &'static str {
        match self {
            TimeRange::Last30Days => "Last 30 days",
            TimeRange::Last3Months => "Last 3 months",
            TimeRange::Last6Months => "Last 6 months",
            TimeRange::LastYear => "Last year",
        }
    }

    pub fn index(self) -> usize {
        match self {
            TimeRange::Last30Days => 0,
            TimeRange::Last3Months => 1,
            TimeRange::Last6Months => 2,
            TimeRange::LastYear => 3,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }
}

//! Summary cards: reasons leads were lost and the other-data metrics.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LostReason {
    pub id: &'static str,
    pub percentage: &'static str,
    pub reason: &'static str,
}

/// The first reason appears twice with different shares; kept as authored.
pub static LOST_REASONS: [LostReason; 4] = [
    LostReason {
        id: "reason1",
        percentage: "40%",
        reason: "The proposal is unclear",
    },
    LostReason {
        id: "reason2",
        percentage: "20%",
        reason: "However venture pursuit",
    },
    LostReason {
        id: "reason3",
        percentage: "10%",
        reason: "Other",
    },
    LostReason {
        id: "reason4",
        percentage: "30%",
        reason: "The proposal is unclear",
    },
];

pub const DEFAULT_INFO_TEXT: &str = "Additional information.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtherDataMetric {
    pub id: &'static str,
    pub value: &'static str,
    pub label: &'static str,
    pub has_info_icon: bool,
    pub info_text: Option<&'static str>,
}

impl OtherDataMetric {
    /// Tooltip for metrics carrying an info icon.
    pub fn tooltip(&self) -> Option<&'static str> {
        if self.has_info_icon {
            Some(self.info_text.unwrap_or(DEFAULT_INFO_TEXT))
        } else {
            None
        }
    }
}

pub static OTHER_DATA_METRICS: [OtherDataMetric; 3] = [
    OtherDataMetric {
        id: "metric1",
        value: "900",
        label: "total leads count",
        has_info_icon: false,
        info_text: None,
    },
    OtherDataMetric {
        id: "metric2",
        value: "12",
        label: "days in average to convert lead",
        has_info_icon: false,
        info_text: None,
    },
    OtherDataMetric {
        id: "metric3",
        value: "30",
        label: "inactive leads",
        has_info_icon: true,
        info_text: Some("Leads that have not shown activity in the last X days."),
    },
];

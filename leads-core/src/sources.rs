//! Sources card: lead origin channels, donut geometry, and the inert
//! metric toggle.

use serde::{Deserialize, Serialize};

use crate::swatch::{self, Swatch};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDatum {
    pub name: &'static str,
    /// Slice weight in the donut.
    pub value: u32,
    pub display_value: &'static str,
    /// Shown as-is; the column does not add up to 100%.
    pub percentage: &'static str,
    pub fill: Swatch,
}

impl SourceDatum {
    /// Hover text for a slice, e.g. `Clutch: Value: 50`.
    pub fn tooltip(&self) -> String {
        format!("{}: Value: {}", self.name, self.value)
    }
}

pub static SOURCES: [SourceDatum; 4] = [
    SourceDatum {
        name: "Clutch",
        value: 50,
        display_value: "$ 3000",
        percentage: "50%",
        fill: swatch::RED_400,
    },
    SourceDatum {
        name: "Behance",
        value: 25,
        display_value: "$ 1000",
        percentage: "40%",
        fill: swatch::AMBER_400,
    },
    SourceDatum {
        name: "Instagram",
        value: 15,
        display_value: "$ 1000",
        percentage: "10%",
        fill: swatch::EMERALD_400,
    },
    SourceDatum {
        name: "Dribbble",
        value: 10,
        display_value: "$ 1000",
        percentage: "10%",
        fill: swatch::BLUE_400,
    },
];

pub const SOURCES_FOOTNOTE: &str = "Percentages shown are from leads total for each source.";

/// Gap left between neighbouring donut slices.
pub const SLICE_PADDING_DEG: f64 = 2.0;

/// Single-choice toggle under the donut. Changing it does not alter the
/// chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SourceMetric {
    LeadsCame,
    #[default]
    LeadsConverted,
    TotalDealsSize,
}

impl SourceMetric {
    pub const ALL: [SourceMetric; 3] = [
        SourceMetric::LeadsCame,
        SourceMetric::LeadsConverted,
        SourceMetric::TotalDealsSize,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SourceMetric::LeadsCame => "Leads came",
            SourceMetric::LeadsConverted => "Leads Converted",
            SourceMetric::TotalDealsSize => "Total deals size",
        }
    }

    pub fn index(self) -> usize {
        match self {
            SourceMetric::LeadsCame => 0,
            SourceMetric::LeadsConverted => 1,
            SourceMetric::TotalDealsSize => 2,
        }
    }

    /// Next option, stopping at the last one.
    pub fn next(self) -> SourceMetric {
        Self::ALL[(self.index() + 1).min(Self::ALL.len() - 1)]
    }

    /// Previous option, stopping at the first one.
    pub fn prev(self) -> SourceMetric {
        Self::ALL[self.index().saturating_sub(1)]
    }
}

/// One donut slice, angles in degrees counter-clockwise from 3 o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutSlice {
    pub start_deg: f64,
    pub sweep_deg: f64,
    pub fill: Swatch,
}

impl DonutSlice {
    /// Whether `angle_deg` (any winding) falls inside this slice.
    pub fn contains(&self, angle_deg: f64) -> bool {
        let offset = (angle_deg - self.start_deg).rem_euclid(360.0);
        offset < self.sweep_deg
    }
}

/// Lay the sources out around a full circle with `padding_deg` between
/// slices. Sweeps are proportional to `value / Σ value`.
pub fn donut_slices(data: &[SourceDatum], padding_deg: f64) -> Vec<DonutSlice> {
    let total: u32 = data.iter().map(|d| d.value).sum();
    if total == 0 {
        return Vec::new();
    }
    let drawable = (360.0 - padding_deg * data.len() as f64).max(0.0);

    let mut start = 0.0;
    data.iter()
        .map(|d| {
            let sweep = drawable * f64::from(d.value) / f64::from(total);
            let slice = DonutSlice {
                start_deg: start,
                sweep_deg: sweep,
                fill: d.fill,
            };
            start += sweep + padding_deg;
            slice
        })
        .collect()
}

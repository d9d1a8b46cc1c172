//! Funnel count card: pipeline stages and the proportional stage bar.

use crate::swatch::{self, Swatch};

/// Hand-authored share of the funnel bar (e.g. 2/5).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    pub num: u32,
    pub den: u32,
}

impl Fraction {
    pub const fn new(num: u32, den: u32) -> Self {
        Self { num, den }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunnelStage {
    pub id: &'static str,
    pub name: &'static str,
    pub count: u32,
    pub value: &'static str,
    /// Average time on stage, as displayed.
    pub days: &'static str,
    pub color: Swatch,
    pub text_color: Option<Swatch>,
    pub width: Fraction,
    /// Hover text attached to the duration label.
    pub tooltip: Option<&'static str>,
}

/// Headline figure above the bar. Independent of the stage counts.
pub const ACTIVE_LEADS_TOTAL: u32 = 600;
pub const ACTIVE_LEADS_LABEL: &str = "active leads";

pub const IN_CONVERSATION_TOOLTIP: &str = "Average time leads spend in this stage.";

pub static FUNNEL_STAGES: [FunnelStage; 5] = [
    FunnelStage {
        id: "discovery",
        name: "Discovery",
        count: 200,
        value: "$ 200",
        days: "2 days",
        color: swatch::RED_400,
        text_color: None,
        width: Fraction::new(2, 5),
        tooltip: None,
    },
    FunnelStage {
        id: "qualified",
        name: "Qualified",
        count: 100,
        value: "$ 100",
        days: "2 days",
        color: swatch::YELLOW_400,
        text_color: None,
        width: Fraction::new(1, 5),
        tooltip: None,
    },
    FunnelStage {
        id: "inConversation",
        name: "In conversation",
        count: 50,
        value: "$ 100",
        days: "average time on this stage",
        color: swatch::SLATE_700,
        text_color: Some(swatch::WHITE),
        width: Fraction::new(1, 6),
        tooltip: Some(IN_CONVERSATION_TOOLTIP),
    },
    FunnelStage {
        id: "negotiations",
        name: "Negotiations",
        count: 20,
        value: "$ 50",
        days: "8 days",
        color: swatch::GREEN_400,
        text_color: None,
        width: Fraction::new(1, 12),
        tooltip: None,
    },
    FunnelStage {
        id: "closedWon",
        name: "Closed won",
        count: 20,
        value: "$ 50",
        days: "10 days",
        color: swatch::PURPLE_400,
        text_color: None,
        width: Fraction::new(1, 12),
        tooltip: None,
    },
];

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

/// Split `total` cells across the stages in proportion to their fractions.
///
/// The authored fractions do not add up to one, so they are treated as
/// relative weights: the result always sums to exactly `total` (for a
/// non-empty stage list with a non-zero weight), leaving no gap at the end of
/// the bar. Leftover cells after flooring go to the largest remainders,
/// earlier stages first on ties.
pub fn segment_widths(stages: &[FunnelStage], total: u16) -> Vec<u16> {
    let lcm = stages
        .iter()
        .map(|s| u64::from(s.width.den.max(1)))
        .fold(1u64, |acc, d| acc / gcd(acc, d) * d);
    let weights: Vec<u64> = stages
        .iter()
        .map(|s| {
            if s.width.den == 0 {
                0
            } else {
                u64::from(s.width.num) * (lcm / u64::from(s.width.den))
            }
        })
        .collect();
    let weight_sum: u64 = weights.iter().sum();
    if weight_sum == 0 {
        return vec![0; stages.len()];
    }

    let total = u64::from(total);
    let mut widths: Vec<u64> = weights.iter().map(|w| total * w / weight_sum).collect();
    let assigned: u64 = widths.iter().sum();

    let mut order: Vec<usize> = (0..stages.len()).collect();
    order.sort_by(|&a, &b| {
        let ra = total * weights[a] % weight_sum;
        let rb = total * weights[b] % weight_sum;
        rb.cmp(&ra).then(a.cmp(&b))
    });
    for &i in order.iter().take((total - assigned) as usize) {
        widths[i] += 1;
    }

    widths.into_iter().map(|w| w as u16).collect()
}

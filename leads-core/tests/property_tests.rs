//! Property tests for dashboard invariants.
//!
//! Uses proptest to verify:
//! 1. Funnel bar: stage segments cover the bar exactly at every width
//! 2. Navigation: exactly one item stays highlighted under any selection sequence
//! 3. Tracking series: the derived series depends only on the last range chosen
//! 4. Donut: slices never overlap and stay inside one turn

use leads_core::funnel::{segment_widths, Fraction, FunnelStage, FUNNEL_STAGES};
use leads_core::nav::{nav_entries, nav_len, NavigationState, MAIN_NAV_ITEMS};
use leads_core::sources::{donut_slices, SourceDatum, SLICE_PADDING_DEG, SOURCES};
use leads_core::swatch::Swatch;
use leads_core::tracking::{derive_series, LeadTrackingState};
use leads_core::TimeRange;
use proptest::prelude::*;

// ── Strategies (proptest) ────────────────────────────────────────────

fn share(width: Fraction) -> f64 {
    if width.den == 0 {
        0.0
    } else {
        f64::from(width.num) / f64::from(width.den)
    }
}

fn arb_range() -> impl Strategy<Value = TimeRange> {
    (0..4usize).prop_map(|i| TimeRange::from_index(i).unwrap())
}

fn arb_stage() -> impl Strategy<Value = FunnelStage> {
    (0..12u32, 1..13u32).prop_map(|(num, den)| FunnelStage {
        width: Fraction::new(num, den),
        ..FUNNEL_STAGES[0].clone()
    })
}

fn arb_source() -> impl Strategy<Value = SourceDatum> {
    (1..500u32).prop_map(|value| SourceDatum {
        value,
        fill: Swatch::rgb(0, 0, 0),
        ..SOURCES[0].clone()
    })
}

// ── 1. Funnel bar ────────────────────────────────────────────────────

proptest! {
    /// The fixed stages fill any bar width with no gap and no overflow.
    #[test]
    fn funnel_segments_cover_bar(total in 0u16..2000) {
        let widths = segment_widths(&FUNNEL_STAGES, total);
        prop_assert_eq!(widths.len(), FUNNEL_STAGES.len());
        let sum: u32 = widths.iter().map(|&w| u32::from(w)).sum();
        prop_assert_eq!(sum, u32::from(total));
    }

    /// Arbitrary hand-authored fractions still cover the bar when any weight is non-zero.
    #[test]
    fn arbitrary_fractions_cover_bar(
        stages in prop::collection::vec(arb_stage(), 1..8),
        total in 0u16..500,
    ) {
        let widths = segment_widths(&stages, total);
        let sum: u32 = widths.iter().map(|&w| u32::from(w)).sum();
        let any_weight = stages.iter().any(|s| s.width.num > 0);
        if any_weight {
            prop_assert_eq!(sum, u32::from(total));
        } else {
            prop_assert_eq!(sum, 0);
        }
        // No segment strays more than one cell from its exact share.
        let weight_sum: f64 = stages.iter().map(|s| share(s.width)).sum();
        if weight_sum > 0.0 {
            for (stage, &w) in stages.iter().zip(&widths) {
                let exact = f64::from(total) * share(stage.width) / weight_sum;
                prop_assert!((f64::from(w) - exact).abs() < 1.0 + 1e-9);
            }
        }
    }
}

// ── 2. Navigation ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn exactly_one_highlight(picks in prop::collection::vec(0..(nav_len() + 3), 0..30)) {
        let mut state = NavigationState::default();
        let mut expected = "Dashboard";
        for pick in picks {
            if let Some(name) = state.select_index(pick) {
                expected = name;
            }
            let lit = nav_entries().filter(|(_, i)| state.is_highlighted(i.name)).count();
            prop_assert_eq!(lit, 1);
            prop_assert_eq!(state.highlighted(), expected);
            prop_assert!(MAIN_NAV_ITEMS.iter().any(|i| i.name == state.highlighted()));
        }
    }
}

// ── 3. Tracking series ───────────────────────────────────────────────

proptest! {
    #[test]
    fn series_follows_last_range(ranges in prop::collection::vec(arb_range(), 1..20)) {
        let mut state = LeadTrackingState::default();
        for range in &ranges {
            state.set_time_range(*range);
        }
        let last = *ranges.last().unwrap();
        let expected_series = derive_series(last);
        prop_assert_eq!(state.series(), expected_series.as_slice());
        let expected_len = if last == TimeRange::Last3Months { 3 } else { 6 };
        prop_assert_eq!(state.series().len(), expected_len);
    }
}

// ── 4. Donut ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn donut_slices_are_disjoint(data in prop::collection::vec(arb_source(), 1..10)) {
        let slices = donut_slices(&data, SLICE_PADDING_DEG);
        prop_assert_eq!(slices.len(), data.len());
        for pair in slices.windows(2) {
            prop_assert!(pair[0].start_deg + pair[0].sweep_deg <= pair[1].start_deg + 1e-9);
        }
        let last = slices.last().unwrap();
        prop_assert!(last.start_deg + last.sweep_deg <= 360.0 + 1e-9);
    }
}

#[test]
fn fixed_donut_uses_all_sources() {
    assert_eq!(donut_slices(&SOURCES, SLICE_PADDING_DEG).len(), SOURCES.len());
}

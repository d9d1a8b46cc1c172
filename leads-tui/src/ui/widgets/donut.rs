//! Donut chart: braille canvas ring split into source slices.
//!
//! Sample points are laid on the braille dot grid so each dot maps to one
//! point; the x range is widened by the dot aspect so the ring stays round.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Points},
        Widget,
    },
};

use leads_core::sources::DonutSlice;

use crate::theme;

/// Inner radius as a share of the outer one (50 / 80 in the card design).
pub const INNER_RATIO: f64 = 0.625;

pub struct Donut<'a> {
    slices: &'a [DonutSlice],
}

impl<'a> Donut<'a> {
    pub fn new(slices: &'a [DonutSlice]) -> Self {
        Self { slices }
    }

    /// Dot coordinates per slice for a canvas `dots_w` × `dots_h` dots large.
    pub fn sample_points(&self, dots_w: u16, dots_h: u16) -> Vec<(Color, Vec<(f64, f64)>)> {
        if dots_w == 0 || dots_h == 0 {
            return Vec::new();
        }
        let x_extent = f64::from(dots_w) / f64::from(dots_h);
        let step = 2.0 / f64::from(dots_h);

        let mut buckets: Vec<(Color, Vec<(f64, f64)>)> = self
            .slices
            .iter()
            .map(|s| (theme::swatch(s.fill), Vec::new()))
            .collect();

        for row in 0..dots_h {
            let y = -1.0 + step * (f64::from(row) + 0.5);
            for col in 0..dots_w {
                let x = -x_extent + step * (f64::from(col) + 0.5);
                let r = (x * x + y * y).sqrt();
                if r > 1.0 || r < INNER_RATIO {
                    continue;
                }
                let angle = y.atan2(x).to_degrees();
                if let Some(i) = self.slices.iter().position(|s| s.contains(angle)) {
                    buckets[i].1.push((x, y));
                }
            }
        }
        buckets
    }
}

impl Widget for Donut<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        // Braille packs 2 × 4 dots into a cell.
        let dots_w = area.width.saturating_mul(2);
        let dots_h = area.height.saturating_mul(4);
        let x_extent = f64::from(dots_w) / f64::from(dots_h);
        let points = self.sample_points(dots_w, dots_h);

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-x_extent, x_extent])
            .y_bounds([-1.0, 1.0])
            .paint(|ctx| {
                for (color, coords) in &points {
                    ctx.draw(&Points {
                        coords,
                        color: *color,
                    });
                }
            })
            .render(area, buf);
    }
}

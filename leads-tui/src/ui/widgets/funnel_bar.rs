//! Funnel bar: one band of stage-colored segments spanning the full width.
//! Each segment carries its lead count when there is room for it.

use ratatui::{buffer::Buffer, layout::Rect, style::Color, style::Style, widgets::Widget};

use leads_core::funnel::{segment_widths, FunnelStage};

use crate::theme;

pub struct FunnelBar<'a> {
    stages: &'a [FunnelStage],
}

impl<'a> FunnelBar<'a> {
    pub fn new(stages: &'a [FunnelStage]) -> Self {
        Self { stages }
    }
}

impl Widget for FunnelBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let widths = segment_widths(self.stages, area.width);
        let mut x = area.x;
        for (stage, width) in self.stages.iter().zip(widths) {
            if width == 0 {
                continue;
            }
            let fill = theme::swatch(stage.color);
            let text = stage.text_color.map(theme::swatch).unwrap_or(Color::Black);
            let style = Style::default().bg(fill).fg(text);
            for y in area.top()..area.bottom() {
                buf.set_string(x, y, " ".repeat(width as usize), style);
            }

            let label = stage.count.to_string();
            if label.len() + 2 <= width as usize {
                let y = area.y + area.height / 2;
                buf.set_string(x + 1, y, &label, style);
            }
            x += width;
        }
    }
}

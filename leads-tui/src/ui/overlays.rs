//! Overlay widgets: help, time range dropdown, focus tooltips.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use leads_core::TimeRange;

use crate::input::key_bindings_help;
use crate::theme;
use crate::ui::centered_rect;

/// Key bindings overlay.
pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 60, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::primary())
        .title(" Keyboard shortcuts [?/Esc]close ")
        .title_style(theme::primary_bold());

    let mut lines = vec![Line::from("")];
    for (keys, action) in key_bindings_help() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {keys:<18}"), theme::primary_bold()),
            Span::styled(action, theme::foreground()),
        ]));
    }

    f.render_widget(Paragraph::new(lines).block(block), popup);
}

/// Dropdown listing the four ranges, current one checked.
pub fn render_time_range_menu(f: &mut Frame, area: Rect, current: TimeRange, cursor: usize) {
    let width = 24.min(area.width);
    let height = (TimeRange::ALL.len() as u16 + 2).min(area.height);
    let popup = Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    );
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::primary())
        .title(" Time range ")
        .title_style(theme::primary_bold());

    let lines: Vec<Line> = TimeRange::ALL
        .iter()
        .enumerate()
        .map(|(i, &range)| {
            let check = if range == current { "✓" } else { " " };
            let base = if range == current {
                theme::primary_bold()
            } else {
                theme::foreground()
            };
            let style = if i == cursor { theme::cursor(base) } else { base };
            Line::from(Span::styled(
                format!(" {check} {:<18}", range.menu_label()),
                style,
            ))
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), popup);
}

/// Where a tooltip box goes: below `anchor` when it fits inside `bounds`,
/// otherwise above, shifted left so it never runs past the right edge.
pub fn tooltip_rect(bounds: Rect, anchor: Rect, text_width: u16) -> Rect {
    let width = text_width.saturating_add(4).min(bounds.width);
    let height = 3.min(bounds.height);

    let y = if anchor.bottom().saturating_add(height) <= bounds.bottom() {
        anchor.bottom()
    } else {
        anchor.y.saturating_sub(height).max(bounds.y)
    };
    let x = anchor
        .x
        .min(bounds.right().saturating_sub(width))
        .max(bounds.x);
    Rect::new(x, y, width, height)
}

pub fn render_tooltip(f: &mut Frame, bounds: Rect, anchor: Rect, text: &str) {
    let popup = tooltip_rect(bounds, anchor, text.chars().count() as u16);
    if popup.width < 3 || popup.height < 3 {
        return;
    }
    f.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted());
    let para = Paragraph::new(Span::styled(format!(" {text}"), theme::foreground())).block(block);
    f.render_widget(para, popup);
}

//! Top-level UI layout: sidebar, header, tabbed content, status bar.

pub mod content;
pub mod funnel_card;
pub mod header;
pub mod overlays;
pub mod sidebar;
pub mod sources_card;
pub mod status_bar;
pub mod summary_cards;
pub mod tracking_chart;
pub mod widgets;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use crate::app::{AppState, Overlay};

/// Sidebar column width in cells.
pub const SIDEBAR_WIDTH: u16 = 24;
/// Header row height including its bottom rule.
pub const HEADER_HEIGHT: u16 = 3;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());
    let main_area = chunks[0];
    let status_area = chunks[1];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(10)])
        .split(main_area);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(1)])
        .split(columns[1]);

    sidebar::render(f, columns[0], app);
    header::render(f, right[0]);
    let anchor = content::render(f, right[1], app);
    status_bar::render(f, status_area, app);

    if let (Some(anchor), Some(text)) = (anchor, app.focused_tooltip()) {
        overlays::render_tooltip(f, main_area, anchor, &text);
    }

    // Draw overlays on top.
    match app.overlay {
        Overlay::Help => overlays::render_help(f, main_area),
        Overlay::TimeRangeMenu { target, cursor } => {
            overlays::render_time_range_menu(f, main_area, app.time_range_of(target), cursor)
        }
        Overlay::None => {}
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Cut `s` to at most `max` characters, marking the cut with a period.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max == 0 {
        String::new()
    } else {
        let mut out: String = s.chars().take(max - 1).collect();
        out.push('.');
        out
    }
}

/// Left-align `s` in a field of `width` characters, truncating if needed.
pub fn pad(s: &str, width: usize) -> String {
    format!("{:<width$}", truncate(s, width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("Negotiations", 20), "Negotiations");
        assert_eq!(truncate("Negotiations", 6), "Negot.");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn pad_fills_field() {
        assert_eq!(pad("Mail", 6), "Mail  ");
        assert_eq!(pad("Proposals", 5), "Prop.");
    }

    #[test]
    fn centered_rect_is_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(50, 50, area);
        assert!(popup.x >= 25 && popup.right() <= 75);
        assert!(popup.y >= 10 && popup.bottom() <= 30);
    }
}

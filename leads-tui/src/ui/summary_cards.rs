//! Summary row: reasons leads were lost and the other-data metrics.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use leads_core::summary::{OtherDataMetric, LOST_REASONS, OTHER_DATA_METRICS};

use crate::app::{AppState, Focus};
use crate::theme;

pub const REASONS_TITLE: &str = "Reasons of leads lost";
pub const OTHER_TITLE: &str = "Other data";
pub const INFO_GLYPH: &str = "ⓘ";

/// Draw both cards. Returns the metric under the cursor while focused.
pub fn render(f: &mut Frame, area: Rect, app: &AppState) -> Option<Rect> {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_reasons(f, cols[0]);
    render_other_data(f, cols[1], app)
}

fn render_reasons(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::card_border(false))
        .title(format!(" {REASONS_TITLE} "))
        .title_style(theme::card_title(false));
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Two by two grid, filled row-major.
    let grid_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(inner);
    for (row, pair) in grid_rows.iter().zip(LOST_REASONS.chunks(2)) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row);
        for (cell, reason) in cells.iter().zip(pair) {
            let lines = vec![
                Line::from(Span::styled(format!(" {}", reason.percentage), theme::figure())),
                Line::from(Span::styled(format!(" {}", reason.reason), theme::muted())),
            ];
            f.render_widget(Paragraph::new(lines), *cell);
        }
    }
}

fn render_other_data(f: &mut Frame, area: Rect, app: &AppState) -> Option<Rect> {
    let focused = app.focus == Focus::Summary;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::card_border(focused))
        .title(format!(" {OTHER_TITLE} "))
        .title_style(theme::card_title(focused));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let n = OTHER_DATA_METRICS.len() as u32;
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..n).map(|_| Constraint::Ratio(1, n)))
        .split(inner);

    for (i, (cell, metric)) in cells.iter().zip(&OTHER_DATA_METRICS).enumerate() {
        let at_cursor = focused && app.summary_cursor == i;
        f.render_widget(metric_paragraph(metric, at_cursor), *cell);
    }

    if focused {
        cells.get(app.summary_cursor).copied()
    } else {
        None
    }
}

fn metric_paragraph(metric: &OtherDataMetric, at_cursor: bool) -> Paragraph<'static> {
    let value_style = if at_cursor {
        theme::cursor(theme::figure())
    } else {
        theme::figure()
    };
    let mut label = vec![Span::styled(format!(" {}", metric.label), theme::muted())];
    if metric.has_info_icon {
        label.push(Span::styled(format!(" {INFO_GLYPH}"), theme::hint()));
    }
    Paragraph::new(vec![
        Line::from(Span::styled(format!(" {} ", metric.value), value_style)),
        Line::from(label),
    ])
    .wrap(Wrap { trim: false })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{buffer_text, render_app};

    #[test]
    fn shows_reasons_and_metrics() {
        let app = AppState::default();
        let text = buffer_text(&render_app(&app, 160, 48));
        assert!(text.contains("40%"));
        assert!(text.contains("However venture pursuit"));
        assert_eq!(text.matches("The proposal is unclear").count(), 2);
        assert!(text.contains(" 900 "));
        assert!(text.contains(" 30 "));
        assert!(text.contains(INFO_GLYPH));
    }

    #[test]
    fn info_tooltip_needs_focus_on_inactive_leads() {
        let mut app = AppState::default();
        let tooltip = "Leads that have not shown activity in the last X days.";
        app.summary_cursor = 2;
        assert!(!buffer_text(&render_app(&app, 160, 48)).contains(tooltip));

        app.focus = Focus::Summary;
        assert!(buffer_text(&render_app(&app, 160, 48)).contains(tooltip));

        app.summary_cursor = 0;
        assert!(!buffer_text(&render_app(&app, 160, 48)).contains(tooltip));
    }
}

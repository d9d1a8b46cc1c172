//! Sources card: range button, donut with legend, metric toggle, footnote.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use leads_core::sources::{donut_slices, SourceMetric, SLICE_PADDING_DEG, SOURCES, SOURCES_FOOTNOTE};
use leads_core::TimeRange;

use crate::app::{AppState, Focus};
use crate::theme;
use crate::ui::widgets::Donut;
use crate::ui::pad;

pub const TITLE: &str = "Sources";
const DONUT_WIDTH: u16 = 16;

/// Dropdown trigger label, shared with the tracking card.
pub fn range_button(range: TimeRange) -> String {
    format!("[ {} ▾ ]", range.label())
}

/// Draw the card. Returns the legend row under the cursor while focused.
pub fn render(f: &mut Frame, area: Rect, app: &AppState) -> Option<Rect> {
    let focused = app.focus == Focus::Sources;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::card_border(focused))
        .title(format!(" {TITLE} "))
        .title_style(theme::card_title(focused));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let button_style = if focused {
        theme::cursor(theme::primary())
    } else {
        theme::primary()
    };
    let button = Paragraph::new(Line::from(Span::styled(
        range_button(app.stats.time_range),
        button_style,
    )))
    .alignment(Alignment::Right);
    f.render_widget(button, rows[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(DONUT_WIDTH),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(rows[1]);

    let slices = donut_slices(&SOURCES, SLICE_PADDING_DEG);
    f.render_widget(Donut::new(&slices), body[1]);

    let legend: Vec<Line> = SOURCES
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let name_style = if focused && app.source_cursor == i {
                theme::cursor(theme::foreground())
            } else {
                theme::foreground()
            };
            Line::from(vec![
                Span::styled("● ", Style::default().fg(theme::swatch(s.fill))),
                Span::styled(pad(s.name, 11), name_style),
                Span::styled(pad(s.display_value, 8), theme::figure()),
                Span::styled(s.percentage, theme::muted()),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(legend), body[3]);

    f.render_widget(
        Paragraph::new(toggle_line(app.stats.source_metric, focused)),
        rows[2],
    );
    f.render_widget(
        Paragraph::new(Span::styled(format!(" {SOURCES_FOOTNOTE}"), theme::muted())),
        rows[3],
    );

    if !focused {
        return None;
    }
    let legend_area = body[3];
    let y = legend_area.y + app.source_cursor as u16;
    (y < legend_area.bottom()).then(|| Rect::new(legend_area.x, y, legend_area.width, 1))
}

fn toggle_line(selected: SourceMetric, focused: bool) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for (i, metric) in SourceMetric::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("│", theme::muted()));
        }
        let style = if metric == selected {
            let base = theme::primary_bold();
            if focused { theme::cursor(base) } else { base }
        } else {
            theme::muted()
        };
        spans.push(Span::styled(format!(" {} ", metric.label()), style));
    }
    Line::from(spans)
}

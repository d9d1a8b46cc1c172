//! Leads tracking card: closed/lost headline, range button, monthly chart.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Paragraph,
};

use leads_core::swatch::{EMERALD_500, RED_500};
use leads_core::LeadTrackingState;
use leads_core::tracking::{
    ChartDataPoint, CLOSED_LOST_LABEL, CLOSED_WON_LABEL, TOTAL_CLOSED, TOTAL_LOST,
};

use crate::app::{AppState, Focus};
use crate::theme;
use crate::ui::sources_card::range_button;

pub const TITLE: &str = "Leads tracking";

/// Draw the card. Returns the column of the focused month while focused.
pub fn render(f: &mut Frame, area: Rect, app: &AppState) -> Option<Rect> {
    let focused = app.focus == Focus::Tracking;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::card_border(focused))
        .title(format!(" {TITLE} "))
        .title_style(theme::card_title(focused));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let headline = Line::from(vec![
        Span::styled(format!(" {TOTAL_CLOSED}"), theme::figure()),
        Span::styled(" total closed   ", theme::muted()),
        Span::styled(TOTAL_LOST.to_string(), theme::figure()),
        Span::styled(" total lost", theme::muted()),
    ]);
    f.render_widget(Paragraph::new(headline), rows[0]);

    let button_style = if focused {
        theme::cursor(theme::primary())
    } else {
        theme::primary()
    };
    let button = Paragraph::new(Span::styled(
        range_button(app.tracking.time_range()),
        button_style,
    ))
    .alignment(Alignment::Right);
    f.render_widget(button, rows[0]);

    let cursor = focused.then(|| app.tracking.month_cursor());
    render_chart(f, rows[1], &app.tracking, cursor)
}

/// Points of one series, x being the month position.
fn series_points(series: &[ChartDataPoint], pick: fn(&ChartDataPoint) -> f64) -> Vec<(f64, f64)> {
    series
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, pick(p)))
        .collect()
}

/// Column of month `index` on a graph starting at `graph_x`, `graph_width` wide.
fn month_column(graph_x: u16, graph_width: u16, index: usize, months: usize) -> u16 {
    if months < 2 || graph_width == 0 {
        return graph_x;
    }
    let span = u32::from(graph_width - 1);
    graph_x + (span * index as u32 / (months as u32 - 1)) as u16
}

fn render_chart(
    f: &mut Frame,
    area: Rect,
    tracking: &LeadTrackingState,
    cursor: Option<usize>,
) -> Option<Rect> {
    let series = tracking.series();
    let y_max = tracking.y_upper_bound();
    if area.height < 3 || series.is_empty() {
        return None;
    }
    let won = series_points(series, |p| p.closed_won);
    let lost = series_points(series, |p| p.closed_lost);
    let x_max = series.len().saturating_sub(1) as f64;
    let won_style = Style::default().fg(theme::swatch(EMERALD_500));
    let lost_style = Style::default().fg(theme::swatch(RED_500));

    // Unnamed scatter sets mark each month and stay out of the legend.
    let datasets = vec![
        Dataset::default()
            .name(CLOSED_WON_LABEL)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(won_style)
            .data(&won),
        Dataset::default()
            .name(CLOSED_LOST_LABEL)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(lost_style)
            .data(&lost),
        Dataset::default()
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(won_style)
            .data(&won),
        Dataset::default()
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(lost_style)
            .data(&lost),
    ];

    let x_labels: Vec<Span> = tracking
        .months()
        .enumerate()
        .map(|(i, month)| {
            if cursor == Some(i) {
                Span::styled(month, theme::cursor(theme::primary_bold()))
            } else {
                Span::styled(month, theme::muted())
            }
        })
        .collect();
    let y_texts = ["0".to_string(), format!("{:.0}", y_max / 2.0), format!("{y_max:.0}")];
    let label_width = y_texts.iter().map(|t| t.len()).max().unwrap_or(0) as u16;
    let y_labels: Vec<Span> = y_texts
        .into_iter()
        .map(|t| Span::styled(t, theme::muted()))
        .collect();

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([0.0, x_max.max(1.0)])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([0.0, y_max])
                .labels(y_labels),
        )
        .legend_position(Some(LegendPosition::Bottom))
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

    f.render_widget(chart, area);

    let index = cursor?;
    let graph_x = area.x + label_width + 1;
    let graph_width = area.right().saturating_sub(graph_x);
    let x = month_column(graph_x, graph_width, index, series.len()).min(area.right().saturating_sub(1));
    Some(Rect::new(x, area.y, 1, 1))
}

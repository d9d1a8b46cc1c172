//! Tab strip and the content block of the active tab.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use leads_core::{LeadsSection, PageContent, Tab};

use crate::app::{AppState, Focus};
use crate::theme;
use crate::ui::{funnel_card, sources_card, summary_cards, tracking_chart};

pub const TAB_STRIP_HEIGHT: u16 = 2;
pub const STATS_GRID_HEIGHT: u16 = 12;
pub const SUMMARY_HEIGHT: u16 = 7;

/// Draw the tab strip and active content. Returns the focused row that
/// may anchor a tooltip.
pub fn render(f: &mut Frame, area: Rect, app: &AppState) -> Option<Rect> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(TAB_STRIP_HEIGHT), Constraint::Min(0)])
        .split(area);

    render_tab_strip(f, chunks[0], app);

    match app.shell.content() {
        PageContent::Leads(sections) => render_leads(f, chunks[1], app, sections),
        PageContent::SalesPlaceholder { title, body } => {
            render_sales_placeholder(f, chunks[1], title, body);
            None
        }
    }
}

fn render_tab_strip(f: &mut Frame, area: Rect, app: &AppState) {
    let focused = app.focus == Focus::Tabs;
    let active = app.shell.active_tab();

    let mut spans = vec![Span::raw(" ")];
    for tab in Tab::ALL {
        let mut style = if tab == active {
            theme::primary_bold().add_modifier(Modifier::UNDERLINED)
        } else {
            theme::muted()
        };
        if focused && app.tab_cursor == tab.index() {
            style = theme::cursor(style);
        }
        spans.push(Span::styled(format!(" {} ", tab.label()), style));
        spans.push(Span::raw(" "));
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme::card_border(focused));
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_leads(
    f: &mut Frame,
    area: Rect,
    app: &AppState,
    sections: &[LeadsSection],
) -> Option<Rect> {
    let constraints: Vec<Constraint> = sections
        .iter()
        .map(|section| match section {
            LeadsSection::StatsGrid => Constraint::Length(STATS_GRID_HEIGHT),
            LeadsSection::TrackingChart => Constraint::Min(8),
            LeadsSection::SummaryCards => Constraint::Length(SUMMARY_HEIGHT),
        })
        .collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut anchor = None;
    for (section, &row) in sections.iter().zip(rows.iter()) {
        let focused_row = match section {
            LeadsSection::StatsGrid => render_stats_grid(f, row, app),
            LeadsSection::TrackingChart => tracking_chart::render(f, row, app),
            LeadsSection::SummaryCards => summary_cards::render(f, row, app),
        };
        anchor = anchor.or(focused_row);
    }
    anchor
}

fn render_stats_grid(f: &mut Frame, area: Rect, app: &AppState) -> Option<Rect> {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let funnel = funnel_card::render(f, cols[0], app);
    let sources = sources_card::render(f, cols[1], app);
    funnel.or(sources)
}

fn render_sales_placeholder(f: &mut Frame, area: Rect, title: &str, body: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::card_border(false));

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(title, theme::figure())),
        Line::from(""),
        Line::from(Span::styled(body, theme::muted())),
    ];
    let para = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(para, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{buffer_text, render_app};
    use leads_core::shell::SALES_PLACEHOLDER_TITLE;

    #[test]
    fn leads_tab_mounts_three_sections() {
        let app = AppState::default();
        let text = buffer_text(&render_app(&app, 160, 48));
        assert!(text.contains("Funnel count"));
        assert!(text.contains("Sources"));
        assert!(text.contains("Leads tracking"));
        assert!(text.contains("Reasons of leads lost"));
        assert!(text.contains("Other data"));
        assert!(!text.contains(SALES_PLACEHOLDER_TITLE));
    }

    #[test]
    fn sales_tab_shows_only_placeholder() {
        let app = AppState::new(Tab::Sales);
        let text = buffer_text(&render_app(&app, 160, 48));
        assert!(text.contains(SALES_PLACEHOLDER_TITLE));
        assert!(text.contains("currently under development"));
        assert!(!text.contains("Funnel count"));
        assert!(!text.contains("Leads tracking"));
        assert!(!text.contains("Other data"));
    }

    #[test]
    fn tab_strip_lists_sales_then_leads() {
        let app = AppState::default();
        let text = buffer_text(&render_app(&app, 160, 48));
        let strip = text.lines().find(|l| l.contains(" Sales ")).unwrap();
        // The sidebar shares this row, so look right of the Sales tab.
        let sales = strip.find("Sales").unwrap();
        assert!(strip[sales..].contains("Leads"));
    }
}

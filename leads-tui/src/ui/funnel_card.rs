//! Funnel count card: headline, stage bar, one row per stage.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use leads_core::funnel::{FunnelStage, ACTIVE_LEADS_LABEL, ACTIVE_LEADS_TOTAL, FUNNEL_STAGES};

use crate::app::{AppState, Focus};
use crate::theme;
use crate::ui::widgets::FunnelBar;
use crate::ui::pad;

pub const TITLE: &str = "Funnel count";

const NAME_COL: usize = 16;
const COUNT_COL: usize = 6;
const VALUE_COL: usize = 8;

/// Draw the card. Returns the cursor row when the card has focus, so a
/// tooltip can be anchored to it.
pub fn render(f: &mut Frame, area: Rect, app: &AppState) -> Option<Rect> {
    let focused = app.focus == Focus::Funnel;
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
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let headline = Line::from(vec![
        Span::styled(format!(" {ACTIVE_LEADS_TOTAL}"), theme::figure()),
        Span::styled(format!(" {ACTIVE_LEADS_LABEL}"), theme::muted()),
    ]);
    f.render_widget(Paragraph::new(headline), rows[0]);

    let bar_area = Rect {
        x: rows[2].x + 1,
        width: rows[2].width.saturating_sub(2),
        ..rows[2]
    };
    f.render_widget(FunnelBar::new(&FUNNEL_STAGES), bar_area);

    let list = rows[4];
    let lines: Vec<Line> = FUNNEL_STAGES
        .iter()
        .enumerate()
        .map(|(i, stage)| stage_line(stage, focused && app.funnel_cursor == i))
        .collect();
    f.render_widget(Paragraph::new(lines), list);

    if !focused {
        return None;
    }
    let y = list.y + app.funnel_cursor as u16;
    (y < list.bottom()).then(|| Rect::new(list.x, y, list.width, 1))
}

fn stage_line(stage: &FunnelStage, at_cursor: bool) -> Line<'static> {
    let apply = |style: Style| if at_cursor { theme::cursor(style) } else { style };
    let days_style = if stage.tooltip.is_some() {
        theme::hint()
    } else {
        theme::muted()
    };
    Line::from(vec![
        Span::raw(" "),
        Span::styled("■ ", Style::default().fg(theme::swatch(stage.color))),
        Span::styled(pad(stage.name, NAME_COL), apply(theme::foreground())),
        Span::styled(pad(&stage.count.to_string(), COUNT_COL), apply(theme::figure())),
        Span::styled(pad(stage.value, VALUE_COL), apply(theme::muted())),
        Span::styled(stage.days, apply(days_style)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{buffer_text, render_app};

    #[test]
    fn shows_headline_and_stages() {
        let app = AppState::default();
        let text = buffer_text(&render_app(&app, 160, 48));
        assert!(text.contains("600 active leads"));
        for stage in &FUNNEL_STAGES {
            assert!(text.contains(stage.name), "missing {}", stage.name);
        }
        assert!(text.contains("average time on this stage"));
        assert!(text.contains("$ 200"));
    }

    #[test]
    fn tooltip_shows_on_in_conversation_row() {
        let mut app = AppState::default();
        app.focus = Focus::Funnel;
        app.funnel_cursor = 2;
        let text = buffer_text(&render_app(&app, 160, 48));
        assert!(text.contains("Average time leads spend in this stage."));

        app.funnel_cursor = 0;
        let text = buffer_text(&render_app(&app, 160, 48));
        assert!(!text.contains("Average time leads spend in this stage."));
    }
}

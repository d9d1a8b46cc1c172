//! Sidebar: brand row, primary navigation, utility group pinned to the bottom.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use leads_core::nav::{nav_entries, NavGroup, NavItem, MAIN_NAV_ITEMS, UTILITY_NAV_ITEMS};

use crate::app::{AppState, Focus};
use crate::theme;

pub const BRAND: &str = "Leads Tracking";

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let focused = app.focus == Focus::Sidebar;
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(theme::card_border(focused));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let util_height = UTILITY_NAV_ITEMS.len() as u16;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(util_height),
        ])
        .split(inner);

    let brand = Line::from(vec![
        Span::styled(" ◆ ", theme::primary_bold()),
        Span::styled(BRAND, theme::figure()),
    ]);
    f.render_widget(Paragraph::new(brand), rows[0]);

    let width = inner.width as usize;
    let mut primary = Vec::with_capacity(MAIN_NAV_ITEMS.len());
    let mut utility = Vec::with_capacity(UTILITY_NAV_ITEMS.len());
    for (index, (group, item)) in nav_entries().enumerate() {
        let line = nav_line(item, app, index, focused, width);
        match group {
            NavGroup::Primary => primary.push(line),
            NavGroup::Utility => utility.push(line),
        }
    }

    f.render_widget(Paragraph::new(primary), rows[1]);
    f.render_widget(Paragraph::new(utility), rows[2]);
}

fn nav_line(
    item: &NavItem,
    app: &AppState,
    index: usize,
    focused: bool,
    width: usize,
) -> Line<'static> {
    let mut style = if app.nav.is_highlighted(item.name) {
        theme::highlighted()
    } else {
        theme::muted()
    };
    if focused && app.nav_cursor == index {
        style = theme::cursor(style);
    }
    let marker = if app.nav.is_highlighted(item.name) { "▌" } else { " " };
    let label = format!("{marker}{} {}", theme::nav_glyph(item.icon), item.name);
    Line::from(Span::styled(super::pad(&label, width), style))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{buffer_text, render_app};
    use ratatui::style::{Modifier, Style};

    fn item_style(app: &AppState, index: usize) -> Style {
        let focused = app.focus == Focus::Sidebar;
        let (_, item) = nav_entries().nth(index).unwrap();
        nav_line(item, app, index, focused, 1).spans[0].style
    }

    #[test]
    fn lists_both_groups() {
        let app = AppState::default();
        let text = buffer_text(&render_app(&app, 100, 30));
        for (_, item) in nav_entries() {
            assert!(text.contains(item.name), "missing {}", item.name);
        }
    }

    #[test]
    fn only_the_highlighted_item_uses_highlight_style() {
        let mut app = AppState::default();
        app.nav_cursor = 4;
        app.select_nav_at_cursor();
        for index in 0..leads_core::nav::nav_len() {
            let is_bg = item_style(&app, index).bg == Some(theme::HIGHLIGHT_BG);
            assert_eq!(is_bg, index == 4, "item {index}");
        }
    }

    #[test]
    fn cursor_only_shows_with_focus() {
        let mut app = AppState::default();
        app.focus = Focus::Tabs;
        assert!(!item_style(&app, 0).add_modifier.contains(Modifier::REVERSED));
        app.focus = Focus::Sidebar;
        assert!(item_style(&app, 0).add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn utility_group_sits_at_the_bottom() {
        let app = AppState::default();
        let buf = render_app(&app, 100, 30);
        let text = buffer_text(&buf);
        let lines: Vec<&str> = text.lines().collect();
        let settings = lines.iter().position(|l| l.contains("Settings")).unwrap();
        let calendar = lines.iter().position(|l| l.contains("Calendar")).unwrap();
        // Status bar is the last row, Settings sits just above it.
        assert_eq!(settings, lines.len() - 2);
        assert!(settings > calendar + 1);
    }
}

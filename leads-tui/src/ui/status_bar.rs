//! Bottom status bar: key hints, focused region, last status message.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub const HINTS: &str = " Tab:focus 1:Sales 2:Leads Enter:select ?:help q:quit";

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(HINTS, theme::muted()));
    spans.push(Span::raw(" | "));
    spans.push(Span::styled(app.focus.label(), theme::primary()));

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::foreground(),
            StatusLevel::Warning => theme::warning(),
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Focus;
    use crate::test_helpers::{buffer_text, render_app};

    #[test]
    fn shows_focus_and_message() {
        let mut app = AppState::default();
        app.focus = Focus::Tracking;
        app.set_warning("heads up");
        let buf = render_app(&app, 140, 40);
        let text = buffer_text(&buf);
        let last = text.lines().last().unwrap();
        assert!(last.contains("Leads tracking"));
        assert!(last.contains("heads up"));
    }
}

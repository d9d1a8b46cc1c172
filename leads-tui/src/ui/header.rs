//! Header row: page title and the (inert) create button.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::theme;

pub const TITLE: &str = "Dashboard";
pub const CREATE_BUTTON: &str = "[ + Create ]";

pub fn render(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme::card_border(false));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let title = Paragraph::new(Line::from(Span::styled(
        format!(" {TITLE}"),
        theme::figure(),
    )));
    f.render_widget(title, inner);

    let button = Paragraph::new(Line::from(Span::styled(
        format!("{CREATE_BUTTON} "),
        theme::primary_bold(),
    )))
    .alignment(Alignment::Right);
    f.render_widget(button, inner);
}

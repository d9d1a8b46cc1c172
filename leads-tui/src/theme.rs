//! Slate/indigo theme tokens for the leads dashboard.
//!
//! # Color Palette
//! - **Primary**: Indigo (active tab, highlighted navigation, focus)
//! - **Foreground**: Near-white (headline figures, labels)
//! - **Muted**: Slate gray (secondary text, inactive items)
//! - **Border**: Dark slate (card outlines, rules)
//! - **Highlight**: Deep indigo wash behind the active navigation item
//! - **Warning**: Amber (status bar warnings)
//!
//! Data colors (funnel stages, sources, chart series) come from the model's
//! [`Swatch`] values and are mapped through [`swatch`].

use ratatui::style::{Color, Modifier, Style};

use leads_core::{NavIcon, Swatch};

pub const PRIMARY: Color = Color::Rgb(99, 102, 241);
pub const FOREGROUND: Color = Color::Rgb(241, 245, 249);
pub const MUTED: Color = Color::Rgb(148, 163, 184);
pub const BORDER: Color = Color::Rgb(71, 85, 105);
pub const HIGHLIGHT_BG: Color = Color::Rgb(30, 27, 75);
pub const WARNING: Color = Color::Rgb(251, 191, 36);

/// Map a model color onto the terminal palette.
pub fn swatch(s: Swatch) -> Color {
    Color::Rgb(s.r, s.g, s.b)
}

pub fn primary() -> Style {
    Style::default().fg(PRIMARY)
}

pub fn primary_bold() -> Style {
    primary().add_modifier(Modifier::BOLD)
}

pub fn foreground() -> Style {
    Style::default().fg(FOREGROUND)
}

/// Large figures on cards.
pub fn figure() -> Style {
    foreground().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

/// Active navigation entry.
pub fn highlighted() -> Style {
    Style::default()
        .fg(PRIMARY)
        .bg(HIGHLIGHT_BG)
        .add_modifier(Modifier::BOLD)
}

/// Keyboard cursor inside a focused region.
pub fn cursor(base: Style) -> Style {
    base.add_modifier(Modifier::REVERSED)
}

pub fn card_border(focused: bool) -> Style {
    if focused {
        primary()
    } else {
        Style::default().fg(BORDER)
    }
}

pub fn card_title(focused: bool) -> Style {
    if focused {
        primary_bold()
    } else {
        figure()
    }
}

/// Text carrying a tooltip is underlined, like a dotted hover hint.
pub fn hint() -> Style {
    muted().add_modifier(Modifier::UNDERLINED)
}

/// Single-width glyph standing in for each navigation icon.
pub fn nav_glyph(icon: NavIcon) -> &'static str {
    match icon {
        NavIcon::LayoutGrid => "▦",
        NavIcon::Users => "⚇",
        NavIcon::UserCircle => "◉",
        NavIcon::FileText => "▤",
        NavIcon::FileDigit => "▥",
        NavIcon::ShoppingCart => "▣",
        NavIcon::Mail => "✉",
        NavIcon::Archive => "▧",
        NavIcon::CalendarDays => "▨",
        NavIcon::HelpCircle => "?",
        NavIcon::Settings => "⚙",
    }
}

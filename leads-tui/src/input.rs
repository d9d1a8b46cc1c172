//! Keyboard input dispatch: overlays → global keys → focused region.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use leads_core::{Tab, TimeRange};

use crate::app::{AppState, Focus, MenuTarget, Overlay};

/// Apply a key event to the app state.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match app.overlay {
        Overlay::Help => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                app.overlay = Overlay::None;
            }
            return;
        }
        Overlay::TimeRangeMenu { .. } => {
            handle_menu_key(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
            return;
        }
        KeyCode::Char('q') => {
            app.quit();
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        KeyCode::Char('1') => {
            app.select_tab(Tab::Sales);
            return;
        }
        KeyCode::Char('2') => {
            app.select_tab(Tab::Leads);
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.focus_prev();
            } else {
                app.focus_next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return;
        }
        _ => {}
    }

    // 3. Focused region.
    match app.focus {
        Focus::Sidebar => handle_sidebar_key(app, key),
        Focus::Tabs => handle_tabs_key(app, key),
        Focus::Funnel => handle_funnel_key(app, key),
        Focus::Sources => handle_sources_key(app, key),
        Focus::Tracking => handle_tracking_key(app, key),
        Focus::Summary => handle_summary_key(app, key),
    }
}

fn is_activate(code: KeyCode) -> bool {
    matches!(code, KeyCode::Enter | KeyCode::Char(' '))
}

fn vertical_delta(code: KeyCode) -> Option<isize> {
    match code {
        KeyCode::Char('j') | KeyCode::Down => Some(1),
        KeyCode::Char('k') | KeyCode::Up => Some(-1),
        _ => None,
    }
}

fn horizontal_delta(code: KeyCode) -> Option<isize> {
    match code {
        KeyCode::Char('l') | KeyCode::Right => Some(1),
        KeyCode::Char('h') | KeyCode::Left => Some(-1),
        _ => None,
    }
}

fn handle_menu_key(app: &mut AppState, key: KeyEvent) {
    let Overlay::TimeRangeMenu { target, cursor } = app.overlay else {
        return;
    };
    if let Some(delta) = vertical_delta(key.code) {
        let cursor = cursor
            .saturating_add_signed(delta)
            .min(TimeRange::ALL.len() - 1);
        app.overlay = Overlay::TimeRangeMenu { target, cursor };
        return;
    }
    match key.code {
        code if is_activate(code) => {
            if let Some(range) = TimeRange::from_index(cursor) {
                app.apply_time_range(target, range);
            }
            app.overlay = Overlay::None;
        }
        KeyCode::Esc | KeyCode::Char('q') => {
            app.overlay = Overlay::None;
        }
        _ => {}
    }
}

fn handle_sidebar_key(app: &mut AppState, key: KeyEvent) {
    if let Some(delta) = vertical_delta(key.code) {
        app.move_nav_cursor(delta);
    } else if is_activate(key.code) {
        app.select_nav_at_cursor();
    }
}

fn handle_tabs_key(app: &mut AppState, key: KeyEvent) {
    if let Some(delta) = horizontal_delta(key.code) {
        app.move_tab_cursor(delta);
    } else if is_activate(key.code) {
        if let Some(tab) = Tab::from_index(app.tab_cursor) {
            app.select_tab(tab);
        }
    }
}

fn handle_funnel_key(app: &mut AppState, key: KeyEvent) {
    if let Some(delta) = vertical_delta(key.code) {
        app.move_funnel_cursor(delta);
    } else if key.code == KeyCode::Enter {
        app.set_status("The funnel follows the range picked on the Sources card");
    }
}

fn handle_sources_key(app: &mut AppState, key: KeyEvent) {
    if let Some(delta) = vertical_delta(key.code) {
        app.move_source_cursor(delta);
    } else if let Some(delta) = horizontal_delta(key.code) {
        let current = app.stats.source_metric;
        let metric = if delta > 0 { current.next() } else { current.prev() };
        app.set_source_metric(metric);
    } else if key.code == KeyCode::Enter {
        app.open_time_range_menu(MenuTarget::StatsGrid);
    }
}

fn handle_tracking_key(app: &mut AppState, key: KeyEvent) {
    if let Some(delta) = horizontal_delta(key.code) {
        app.move_month_cursor(delta);
    } else if key.code == KeyCode::Enter {
        app.open_time_range_menu(MenuTarget::Tracking);
    }
}

fn handle_summary_key(app: &mut AppState, key: KeyEvent) {
    if let Some(delta) = horizontal_delta(key.code).or_else(|| vertical_delta(key.code)) {
        app.move_summary_cursor(delta);
    }
}

/// Key bindings help text.
pub fn key_bindings_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("q / Ctrl+C", "Quit"),
        ("Tab / Shift+Tab", "Move focus forward / back"),
        ("1 / 2", "Show Sales / Leads tab"),
        ("↑/k, ↓/j", "Move within the focused region"),
        ("↑/k, ↓/j", "Pick a source on Sources"),
        ("←/h, →/l", "Move tab cursor / source toggle / chart month"),
        ("Enter / Space", "Activate item under cursor"),
        ("Enter", "Open time range menu on Sources and Leads tracking"),
        ("Esc", "Close menu"),
        ("?", "Toggle this help"),
    ]
}

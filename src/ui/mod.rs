//! User interface rendering.
//!
//! Views are thin: they read the application state each frame and render
//! it, leaving every transition to the [`App`] facade.

pub mod charts;
pub mod formatters;
pub mod keymap_bar;
pub mod status_bar;
mod theme;
pub mod timeline_panel;

use crate::app::App;
use crate::file_browser;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);
    let area = f.area();

    f.render_widget(Block::default().style(Style::default().bg(colors.bg0)), area);

    if app.file_browser_mode {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(10),   // File browser
                Constraint::Length(1), // Status bar
                Constraint::Length(1), // Keymap bar
            ])
            .split(area);

        file_browser::ui::draw_file_browser(f, &mut app.file_browser, chunks[0], &colors);
        draw_bars(f, app, &colors, chunks[1], chunks[2]);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Timeline control
            Constraint::Min(10),   // Chart panels
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Keymap bar
        ])
        .split(area);

    timeline_panel::draw_timeline(f, chunks[0], app, &colors);
    charts::draw_charts(f, chunks[1], app, &colors);
    draw_bars(f, app, &colors, chunks[2], chunks[3]);
}

fn draw_bars(
    f: &mut Frame<'_>,
    app: &App,
    colors: &ThemeColors,
    status_area: ratatui::layout::Rect,
    keymap_area: ratatui::layout::Rect,
) {
    status_bar::draw_status(
        f,
        status_area,
        &app.status,
        app.error_message.as_deref(),
        colors,
    );
    keymap_bar::draw_keymap(f, keymap_area, app.file_browser_mode, colors);
}

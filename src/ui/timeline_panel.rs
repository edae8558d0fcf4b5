//! Timeline control panel - playback readout and scrubber.

use crate::app::App;
use crate::data::ActiveSource;
use crate::ui::formatters::format_speed;
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the timeline control panel.
pub fn draw_timeline(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let block = Block::default()
        .title(" Timeline Control ")
        .title_style(Style::default().fg(colors.yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.bg2));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Playback readout
            Constraint::Length(1), // Scrubber track
            Constraint::Length(1), // Year labels
        ])
        .split(inner);

    draw_readout(f, chunks[0], app, colors);
    draw_track(f, chunks[1], app, colors);
    draw_labels(f, chunks[2], app, colors);
}

fn draw_readout(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let (symbol, label, fg) = if app.timeline.is_playing() {
        ("▶", "Playing", colors.green)
    } else {
        ("⏸", "Paused", colors.gray)
    };

    let source = match (app.provider.is_loading(), app.provider.source()) {
        (true, _) => Span::styled("loading…", Style::default().fg(colors.orange)),
        (false, ActiveSource::Default) => Span::styled("default", Style::default().fg(colors.fg0)),
        (false, ActiveSource::Custom) => Span::styled("custom", Style::default().fg(colors.aqua)),
    };

    let line = Line::from(vec![
        Span::styled(format!("{symbol} {label}"), Style::default().fg(fg)),
        Span::styled("  |  ", Style::default().fg(colors.bg2)),
        Span::styled(
            format!("Speed: {}", format_speed(app.timeline.speed())),
            Style::default().fg(colors.fg0),
        ),
        Span::styled("  |  ", Style::default().fg(colors.bg2)),
        Span::styled("Dataset: ", Style::default().fg(colors.gray)),
        source,
    ]);

    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn draw_track(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let width = area.width as usize;
    if width < 3 {
        return;
    }

    let min = app.timeline.min_year();
    let max = app.timeline.max_year();
    let span = (max - min).max(1) as f64;
    let ratio = (app.timeline.current_year() - min) as f64 / span;
    let marker = ((width - 1) as f64 * ratio).round() as usize;

    let line = Line::from(vec![
        Span::styled("━".repeat(marker), Style::default().fg(colors.aqua)),
        Span::styled(
            "●",
            Style::default()
                .fg(colors.yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "─".repeat(width - marker - 1),
            Style::default().fg(colors.bg2),
        ),
    ]);

    f.render_widget(Paragraph::new(line), area);
}

fn draw_labels(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let width = area.width as usize;
    let min = app.timeline.min_year().to_string();
    let max = app.timeline.max_year().to_string();
    let current = app.timeline.current_year().to_string();

    let padding = width
        .saturating_sub(min.len() + max.len() + current.len())
        .max(2);
    let left_pad = padding / 2;
    let right_pad = padding - left_pad;

    let line = Line::from(vec![
        Span::styled(min, Style::default().fg(colors.gray)),
        Span::raw(" ".repeat(left_pad)),
        Span::styled(
            current,
            Style::default()
                .fg(colors.yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(right_pad)),
        Span::styled(max, Style::default().fg(colors.gray)),
    ]);

    f.render_widget(Paragraph::new(line), area);
}

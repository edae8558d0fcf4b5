//! Status bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the status bar.
pub fn draw_status(
    f: &mut Frame<'_>,
    area: Rect,
    status: &str,
    error: Option<&str>,
    colors: &ThemeColors,
) {
    let (text, fg) = match error {
        Some(error) => (error, colors.red),
        None => (status, colors.fg0),
    };

    let paragraph = Paragraph::new(text).style(Style::default().fg(fg).bg(colors.bg1));

    f.render_widget(paragraph, area);
}

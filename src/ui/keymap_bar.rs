//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub fn draw_keymap(f: &mut Frame<'_>, area: Rect, file_browser_mode: bool, colors: &ThemeColors) {
    let keymap_text = if file_browser_mode {
        "jk/↑↓:nav | Enter/l:import | h:parent | .:hidden | Esc/q:cancel"
    } else {
        "q:quit | Space:play/pause | h/l:scrub | g/G:ends | +/-:speed | i:import | R:reset | y/c:copy | T:theme"
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.gray).bg(colors.bg0));

    f.render_widget(paragraph, area);
}

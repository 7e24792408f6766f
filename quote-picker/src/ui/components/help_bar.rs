//! Help bar with the key bindings, shown at the bottom of the screen.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

/// Render a help bar with the given text, centered in a bordered block.
pub fn render_help_bar(f: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text)
        .style(theme::help_text_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(help, area);
}

/// Key bindings of the quote screen
pub const HELP_TEXT_QUOTE: &str =
    "↑/↓ move · Enter add · Esc close/clear · ^D remove last · ^T IGV · ^R reload · ^C quit";

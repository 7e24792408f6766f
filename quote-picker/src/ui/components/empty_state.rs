//! Placeholder panels shown where the quote table would be.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

/// Render an empty state message with consistent styling.
///
/// # Arguments
/// * `title` - The block title (e.g., "Quote")
/// * `message` - The message to display (e.g., "No tests quoted yet")
/// * `hint` - Optional hint text below the message
pub fn render_empty_state(
    f: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    hint: Option<&str>,
) {
    render_panel(f, area, title, message, theme::help_text_style(), hint);
}

/// Render a loading message while the catalog is read
pub fn render_loading_state(f: &mut Frame, area: Rect, title: &str, message: &str) {
    render_panel(f, area, title, message, theme::loading_style(), None);
}

fn render_panel(
    f: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    style: Style,
    hint: Option<&str>,
) {
    let mut lines = vec![Line::from(""), Line::from(Span::styled(message, style))];

    if let Some(hint_text) = hint {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(hint_text, theme::help_text_style())));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(paragraph, area);
}

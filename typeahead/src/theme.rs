//! Colors and styles for the typeahead input and dropdown.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Colors
// =============================================================================

/// Background color for the highlighted dropdown row
pub const COLOR_SELECTION_BG: Color = Color::DarkGray;

/// Background for the input field when focused
pub const COLOR_FORM_FIELD_BG: Color = Color::DarkGray;

/// Dropdown border
pub const COLOR_DROPDOWN_BORDER: Color = Color::DarkGray;

/// Code badge at the start of each row
pub const COLOR_CODE: Color = Color::Cyan;

/// Secondary text: placeholder, result count, row details
pub const COLOR_MUTED: Color = Color::Gray;

/// Related-code warning line
pub const COLOR_WARNING: Color = Color::Indexed(208);

// =============================================================================
// Layout Constants
// =============================================================================

/// Narrowest dropdown, even under a narrow input
pub const MIN_DROPDOWN_WIDTH: u16 = 40;

/// Indent of detail and warning lines under the row title
pub const ROW_INDENT: &str = "  ";

// =============================================================================
// Style Functions
// =============================================================================

/// Style for the highlighted dropdown row
pub fn selection_style() -> Style {
    Style::default()
        .bg(COLOR_SELECTION_BG)
        .add_modifier(Modifier::BOLD)
}

/// Style for the input field when focused
pub fn form_field_focused_style() -> Style {
    Style::default()
        .bg(COLOR_FORM_FIELD_BG)
        .add_modifier(Modifier::BOLD)
}

/// Style for the input field when not focused
pub fn form_field_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn placeholder_style() -> Style {
    Style::default()
        .fg(COLOR_MUTED)
        .add_modifier(Modifier::ITALIC)
}

pub fn dropdown_border_style() -> Style {
    Style::default().fg(COLOR_DROPDOWN_BORDER)
}

pub fn summary_style() -> Style {
    Style::default().fg(COLOR_MUTED)
}

pub fn code_style() -> Style {
    Style::default()
        .fg(COLOR_CODE)
        .add_modifier(Modifier::BOLD)
}

pub fn detail_style() -> Style {
    Style::default().fg(COLOR_MUTED)
}

pub fn warning_style() -> Style {
    Style::default().fg(COLOR_WARNING)
}

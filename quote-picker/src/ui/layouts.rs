//! Layout builders for the quote screen.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::{
    HELP_BAR_HEIGHT, SCREEN_MARGIN, SEARCH_INPUT_HEIGHT, STATUS_HEIGHT, TITLE_HEIGHT,
    TOTALS_HEIGHT, TOTALS_WIDTH,
};

/// Screen areas, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub title: Rect,
    pub search: Rect,
    pub content: Rect,
    pub status: Rect,
    pub help: Rect,
}

/// Standard screen layout: title, search input, content, status line and help bar
pub fn screen_layout(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(SCREEN_MARGIN)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Length(SEARCH_INPUT_HEIGHT),
            Constraint::Min(6),
            Constraint::Length(STATUS_HEIGHT),
            Constraint::Length(HELP_BAR_HEIGHT),
        ])
        .split(area);

    ScreenAreas {
        title: chunks[0],
        search: chunks[1],
        content: chunks[2],
        status: chunks[3],
        help: chunks[4],
    }
}

/// Split the content area into the quote table and the totals block under it.
///
/// Returns (table_area, totals_area); the totals block is right-aligned.
pub fn content_with_totals(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(TOTALS_HEIGHT)])
        .split(area);

    let totals_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(TOTALS_WIDTH)])
        .split(rows[1]);

    (rows[0], totals_row[1])
}

/// Split a title area into title text and loading indicator.
///
/// Returns (title_text_area, loading_indicator_area)
pub fn title_with_loading(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(100), Constraint::Length(1)])
        .split(area);

    (chunks[0], chunks[1])
}

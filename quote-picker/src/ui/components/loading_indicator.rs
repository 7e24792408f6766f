use ratatui::{
    layout::{Alignment, Rect},
    text::Span,
    widgets::Paragraph,
    Frame,
};
use throbber_widgets_tui::{Throbber, BRAILLE_EIGHT};

use crate::state::LoadingState;
use crate::ui::theme;

/// Catalog state in one cell: spinner while loading, ✓ once loaded, x on failure
pub fn render_loading_indicator(f: &mut Frame, area: Rect, loading_state: &LoadingState) {
    let mark = match loading_state {
        LoadingState::NotStarted => return,
        LoadingState::Loading(throbber_state) => {
            let throbber = Throbber::default().throbber_set(BRAILLE_EIGHT);
            f.render_stateful_widget(throbber, area, &mut throbber_state.clone());
            return;
        }
        LoadingState::Loaded => Span::styled("✓", theme::accredited_style()),
        LoadingState::Error(_) => Span::styled("x", theme::error_style()),
    };

    f.render_widget(Paragraph::new(mark).alignment(Alignment::Right), area);
}

use ratatui::prelude::Rect;
use ratatui::{text::Span, widgets::Paragraph, Frame};

use crate::state::LoadingState;
use crate::ui::theme;

/// Render the last status message; failures show in the error color
pub fn render_status_line(
    f: &mut Frame,
    area: Rect,
    status: Option<&str>,
    loading_state: &LoadingState,
) {
    let Some(status) = status else {
        return;
    };

    let style = if matches!(loading_state, LoadingState::Error(_)) {
        theme::error_style()
    } else {
        theme::loading_style()
    };

    f.render_widget(Paragraph::new(Span::styled(status, style)), area);
}
